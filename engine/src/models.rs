use serde::{Deserialize, Serialize};

/// Which part of the SWOT methodology a knowledge passage describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConceptGroup {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
    Methodology,
}

impl ConceptGroup {
    pub fn label(&self) -> &'static str {
        match self {
            ConceptGroup::Strengths => "Strengths",
            ConceptGroup::Weaknesses => "Weaknesses",
            ConceptGroup::Opportunities => "Opportunities",
            ConceptGroup::Threats => "Threats",
            ConceptGroup::Methodology => "Methodology",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptPassage {
    pub id: String,
    pub group: ConceptGroup,
    pub text: String,
}

/// A knowledge passage paired with its similarity to the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPassage {
    pub passage: ConceptPassage,
    pub score: f32,
}

/// The four bullet lists recovered from the model's free-text analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwotComponents {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

impl SwotComponents {
    /// Item counts in fixed S, W, O, T order.
    pub fn quadrant_counts(&self) -> [usize; 4] {
        [
            self.strengths.len(),
            self.weaknesses.len(),
            self.opportunities.len(),
            self.threats.len(),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.quadrant_counts().iter().all(|&count| count == 0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarChart {
    pub categories: Vec<String>,
    pub values: Vec<usize>,
    pub range: [usize; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub category: String,
    pub count: usize,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarChart {
    pub bars: Vec<Bar>,
}

/// Which knowledge passages grounded the prompt, with a short excerpt each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundingExcerpt {
    pub group: String,
    pub excerpt: String,
    pub score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: String,
    pub status: String,
    pub analysis: String,
    pub components: SwotComponents,
    pub radar_chart: RadarChart,
    pub bar_chart: BarChart,
    pub grounding: Vec<GroundingExcerpt>,
    pub processing_time_ms: u128,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    pub generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiResponse {
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContent,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmbedContentRequest {
    pub model: String,
    pub content: GeminiContent,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEmbedContentsRequest {
    pub requests: Vec<EmbedContentRequest>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentEmbedding {
    pub values: Vec<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmbedContentResponse {
    pub embedding: ContentEmbedding,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEmbedContentsResponse {
    pub embeddings: Vec<ContentEmbedding>,
}
