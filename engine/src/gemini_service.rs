use crate::models::*;
use anyhow::Result;
use reqwest::Client;
use std::env;
use tiktoken_rs::cl100k_base;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const GENERATION_MODEL: &str = "gemini-1.5-pro-latest";
const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 2000;

// Ceiling on the organization description; leaves the template and the
// 2000-token response well inside the model context.
const ORGANIZATION_TOKEN_BUDGET: usize = 6000;

pub struct GeminiService {
    client: Client,
    api_key: String,
}

impl GeminiService {
    pub fn new() -> Result<Self> {
        let api_key = env::var("GOOGLE_API_KEY")
            .map_err(|_| anyhow::anyhow!("GOOGLE_API_KEY environment variable not set"))?;

        Ok(Self {
            client: Client::new(),
            api_key,
        })
    }

    /// One templated generateContent call. Returns the model's free-text
    /// markdown analysis.
    pub async fn generate_analysis(&self, organization: &str, context: &str) -> Result<String> {
        let organization = truncate_to_token_budget(organization, ORGANIZATION_TOKEN_BUDGET)?;
        let prompt = build_prompt(&organization, context);

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: Some(GeminiGenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            }),
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            API_BASE, GENERATION_MODEL, self.api_key
        );

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!("Gemini API error: {}", error_text));
        }

        let gemini_response: GeminiResponse = response.json().await?;

        let analysis = gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .unwrap_or_else(|| "No response generated".to_string());

        Ok(analysis)
    }
}

/// Assembles the context block handed to the prompt from the retrieved
/// passages.
pub fn build_context(passages: &[ScoredPassage]) -> String {
    let mut context = String::new();

    for scored in passages {
        context.push_str(&format!("Concept: {}\n\n", scored.passage.text));
    }

    context
}

fn build_prompt(organization: &str, context: &str) -> String {
    format!(
        r#"You are an expert business analyst specializing in conducting comprehensive SWOT analyses.

Use the following retrieved context information to enhance your analysis:
{context}

Based on the organizational information provided by the user, conduct a detailed and insightful SWOT analysis for:
{organization}

Your analysis must include:
1. STRENGTHS: Identify 6-8 significant internal capabilities, resources, and advantages. Be specific about technological advantages, workforce strengths, operational efficiencies, and strategic assets.

2. WEAKNESSES: Identify 6-8 critical internal limitations and challenges. Be detailed about organizational barriers, resource constraints, process inefficiencies, and capability gaps.

3. OPPORTUNITIES: Analyze 6-8 promising external possibilities that could be capitalized upon. Identify market openings, technological trends, partnership possibilities, and emerging customer needs.

4. THREATS: Identify 6-8 substantial external challenges that could negatively impact the organization. Cover competitive pressures, industry disruptions, regulatory changes, and environmental factors.

For each item, provide 2-3 sentences of explanation that includes specific examples and potential impact. Format your response in markdown with clear headings for each SWOT component. Use bullet points for each item.

Be creative, insightful, and specific. Avoid generic statements. Your analysis should provide actionable insights that could genuinely help the organization's strategic planning."#
    )
}

fn truncate_to_token_budget(text: &str, budget: usize) -> Result<String> {
    let bpe = cl100k_base()?;
    let tokens = bpe.encode_with_special_tokens(text);

    if tokens.len() <= budget {
        return Ok(text.to_string());
    }

    log::warn!(
        "Organization description is {} tokens; truncating to {}",
        tokens.len(),
        budget
    );
    let truncated = bpe.decode(tokens[..budget].to_vec())?;
    Ok(truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConceptGroup, ConceptPassage};

    #[test]
    fn prompt_embeds_context_and_organization() {
        let prompt = build_prompt("Acme Corp, a 50-person tooling vendor", "Concept: internal factors\n\n");
        assert!(prompt.contains("Acme Corp, a 50-person tooling vendor"));
        assert!(prompt.contains("Concept: internal factors"));
        assert!(prompt.contains("1. STRENGTHS"));
        assert!(prompt.contains("4. THREATS"));
    }

    #[test]
    fn context_lists_each_retrieved_passage() {
        let passages = vec![
            ScoredPassage {
                passage: ConceptPassage {
                    id: "1".to_string(),
                    group: ConceptGroup::Strengths,
                    text: "first concept".to_string(),
                },
                score: 0.9,
            },
            ScoredPassage {
                passage: ConceptPassage {
                    id: "2".to_string(),
                    group: ConceptGroup::Threats,
                    text: "second concept".to_string(),
                },
                score: 0.4,
            },
        ];

        let context = build_context(&passages);
        assert!(context.contains("Concept: first concept"));
        assert!(context.contains("Concept: second concept"));
    }

    #[test]
    fn short_text_is_not_truncated() {
        let text = "A small regional bakery with twelve employees.";
        let result = truncate_to_token_budget(text, 6000).unwrap();
        assert_eq!(result, text);
    }

    #[test]
    fn oversized_text_is_cut_to_budget() {
        let text = "growth ".repeat(500);
        let result = truncate_to_token_budget(&text, 100).unwrap();
        let bpe = cl100k_base().unwrap();
        assert!(bpe.encode_with_special_tokens(&result).len() <= 100);
    }
}
