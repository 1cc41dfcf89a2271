use crate::models::*;
use anyhow::Result;
use reqwest::Client;
use std::env;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const EMBEDDING_MODEL: &str = "models/embedding-001";

/// Client for the hosted embedding endpoint. The whole corpus is embedded in a
/// single batch call at startup; queries are embedded one at a time.
pub struct EmbeddingService {
    client: Client,
    api_key: String,
}

impl EmbeddingService {
    pub fn new() -> Result<Self> {
        let api_key = env::var("GOOGLE_API_KEY")
            .map_err(|_| anyhow::anyhow!("GOOGLE_API_KEY environment variable not set"))?;

        Ok(Self {
            client: Client::new(),
            api_key,
        })
    }

    pub async fn embed_text(&self, text: &str) -> Result<Vec<f32>> {
        let request = embed_request(text);

        let url = format!(
            "{}/{}:embedContent?key={}",
            API_BASE, EMBEDDING_MODEL, self.api_key
        );

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!("embedding API error: {}", error_text));
        }

        let embed_response: EmbedContentResponse = response.json().await?;
        if embed_response.embedding.values.is_empty() {
            return Err(anyhow::anyhow!("embedding API returned an empty vector"));
        }

        Ok(embed_response.embedding.values)
    }

    pub async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        log::info!("Embedding {} passages in one batch call", texts.len());

        let request = BatchEmbedContentsRequest {
            requests: texts.iter().map(|text| embed_request(text)).collect(),
        };

        let url = format!(
            "{}/{}:batchEmbedContents?key={}",
            API_BASE, EMBEDDING_MODEL, self.api_key
        );

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!("embedding API error: {}", error_text));
        }

        let batch_response: BatchEmbedContentsResponse = response.json().await?;
        if batch_response.embeddings.len() != texts.len() {
            return Err(anyhow::anyhow!(
                "embedding API returned {} vectors for {} inputs",
                batch_response.embeddings.len(),
                texts.len()
            ));
        }

        Ok(batch_response
            .embeddings
            .into_iter()
            .map(|embedding| embedding.values)
            .collect())
    }
}

fn embed_request(text: &str) -> EmbedContentRequest {
    EmbedContentRequest {
        model: EMBEDDING_MODEL.to_string(),
        content: GeminiContent {
            parts: vec![GeminiPart {
                text: text.to_string(),
            }],
        },
    }
}

/// Cosine similarity over the common prefix of the two vectors, 0.0 when either
/// side has zero norm.
pub fn cosine_similarity(embedding1: &[f32], embedding2: &[f32]) -> f32 {
    let min_len = embedding1.len().min(embedding2.len());

    let dot_product: f32 = embedding1[..min_len]
        .iter()
        .zip(embedding2[..min_len].iter())
        .map(|(a, b)| a * b)
        .sum();

    let norm1: f32 = embedding1[..min_len].iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm2: f32 = embedding2[..min_len].iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm1 == 0.0 || norm2 == 0.0 {
        0.0
    } else {
        dot_product / (norm1 * norm2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let v = vec![0.5, 0.3, 0.8];
        let score = cosine_similarity(&v, &v);
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn zero_norm_is_guarded() {
        let a = vec![0.0, 0.0, 0.0];
        let b = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn mismatched_lengths_compare_common_prefix() {
        let a = vec![1.0, 0.0, 5.0];
        let b = vec![1.0, 0.0];
        let score = cosine_similarity(&a, &b);
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn embed_request_carries_model_and_text() {
        let request = embed_request("quarterly revenue grew");
        assert_eq!(request.model, EMBEDDING_MODEL);
        assert_eq!(request.content.parts[0].text, "quarterly revenue grew");
    }
}
