use crate::charts;
use crate::embedding_service::EmbeddingService;
use crate::extractor::extract_swot_components;
use crate::gemini_service::{build_context, GeminiService};
use crate::knowledge;
use crate::models::*;
use crate::vector_index::{VectorIndex, DEFAULT_RETRIEVAL_DEPTH};
use anyhow::Result;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;

// Grounding excerpts quote the leading sentences of each retrieved passage.
const EXCERPT_SENTENCES: usize = 2;

/// End-to-end SWOT pipeline: embed the organization description, retrieve
/// methodology passages, generate the analysis, and shape it for display.
pub struct AnalysisService {
    embedding_service: Arc<EmbeddingService>,
    gemini_service: Arc<GeminiService>,
    index: VectorIndex,
}

impl AnalysisService {
    /// Embeds the knowledge corpus and builds the index. Called once per
    /// process; fails fast if the API key is missing or embedding fails.
    pub async fn initialize() -> Result<Self> {
        log::info!("Initializing SWOT analysis service...");

        let embedding_service = Arc::new(EmbeddingService::new()?);
        let gemini_service = Arc::new(GeminiService::new()?);

        let passages = knowledge::concept_passages();
        let texts: Vec<&str> = passages.iter().map(|p| p.text.as_str()).collect();
        let embeddings = embedding_service.embed_batch(&texts).await?;
        let index = VectorIndex::build(passages, embeddings)?;

        log::info!("Indexed {} knowledge passages", index.len());

        Ok(Self {
            embedding_service,
            gemini_service,
            index,
        })
    }

    pub async fn analyze(&self, organization: &str) -> Result<AnalysisReport> {
        let start_time = std::time::Instant::now();

        let query_embedding = self.embedding_service.embed_text(organization).await?;
        let retrieved = self.index.search(&query_embedding, DEFAULT_RETRIEVAL_DEPTH);
        log::info!("Retrieved {} passages to ground the prompt", retrieved.len());

        let context = build_context(&retrieved);
        let analysis = self
            .gemini_service
            .generate_analysis(organization, &context)
            .await?;

        let components = extract_swot_components(&analysis);
        let radar_chart = charts::radar_chart(&components);
        let bar_chart = charts::bar_chart(&components);
        let grounding = grounding_excerpts(&retrieved);

        let processing_time = start_time.elapsed().as_millis();

        Ok(AnalysisReport {
            id: Uuid::new_v4().to_string(),
            status: "success".to_string(),
            analysis,
            components,
            radar_chart,
            bar_chart,
            grounding,
            processing_time_ms: processing_time,
        })
    }
}

/// Cites which passages fed the prompt: group label plus a sentence-bounded
/// excerpt and the similarity score.
pub fn grounding_excerpts(retrieved: &[ScoredPassage]) -> Vec<GroundingExcerpt> {
    retrieved
        .iter()
        .map(|scored| {
            let excerpt: String = scored
                .passage
                .text
                .unicode_sentences()
                .take(EXCERPT_SENTENCES)
                .collect::<Vec<&str>>()
                .join("")
                .trim()
                .to_string();

            GroundingExcerpt {
                group: scored.passage.group.label().to_string(),
                excerpt,
                score: scored.score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConceptGroup, ConceptPassage};

    fn scored(group: ConceptGroup, text: &str, score: f32) -> ScoredPassage {
        ScoredPassage {
            passage: ConceptPassage {
                id: "p".to_string(),
                group,
                text: text.to_string(),
            },
            score,
        }
    }

    #[test]
    fn excerpts_keep_only_the_leading_sentences() {
        let retrieved = vec![scored(
            ConceptGroup::Strengths,
            "First sentence. Second sentence. Third sentence that should be dropped.",
            0.83,
        )];

        let excerpts = grounding_excerpts(&retrieved);
        assert_eq!(excerpts.len(), 1);
        assert_eq!(excerpts[0].group, "Strengths");
        assert!(excerpts[0].excerpt.contains("Second sentence."));
        assert!(!excerpts[0].excerpt.contains("Third sentence"));
        assert!((excerpts[0].score - 0.83).abs() < 1e-6);
    }

    #[test]
    fn short_passages_are_quoted_whole() {
        let retrieved = vec![scored(ConceptGroup::Methodology, "Only one sentence.", 0.5)];
        let excerpts = grounding_excerpts(&retrieved);
        assert_eq!(excerpts[0].excerpt, "Only one sentence.");
    }
}
