use crate::embedding_service::cosine_similarity;
use crate::models::{ConceptPassage, ScoredPassage};
use anyhow::Result;

/// How many passages are retrieved to ground a prompt.
pub const DEFAULT_RETRIEVAL_DEPTH: usize = 7;

struct IndexEntry {
    passage: ConceptPassage,
    embedding: Vec<f32>,
}

/// In-memory similarity index over the knowledge corpus. At 25 entries an
/// exhaustive cosine scan is the whole search strategy.
pub struct VectorIndex {
    entries: Vec<IndexEntry>,
}

impl VectorIndex {
    pub fn build(passages: Vec<ConceptPassage>, embeddings: Vec<Vec<f32>>) -> Result<Self> {
        if passages.len() != embeddings.len() {
            return Err(anyhow::anyhow!(
                "passage/embedding count mismatch: {} passages, {} embeddings",
                passages.len(),
                embeddings.len()
            ));
        }

        let entries = passages
            .into_iter()
            .zip(embeddings)
            .map(|(passage, embedding)| IndexEntry { passage, embedding })
            .collect();

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-k passages by cosine similarity, highest first. Asking for more than
    /// the corpus holds returns everything.
    pub fn search(&self, query_embedding: &[f32], k: usize) -> Vec<ScoredPassage> {
        let mut scored: Vec<ScoredPassage> = self
            .entries
            .iter()
            .map(|entry| ScoredPassage {
                passage: entry.passage.clone(),
                score: cosine_similarity(query_embedding, &entry.embedding),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored.truncate(k);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConceptGroup;

    fn passage(text: &str) -> ConceptPassage {
        ConceptPassage {
            id: text.to_string(),
            group: ConceptGroup::Methodology,
            text: text.to_string(),
        }
    }

    #[test]
    fn build_rejects_mismatched_lengths() {
        let result = VectorIndex::build(vec![passage("a")], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn search_returns_highest_similarity_first() {
        let index = VectorIndex::build(
            vec![passage("x-axis"), passage("y-axis"), passage("diagonal")],
            vec![
                vec![1.0, 0.0],
                vec![0.0, 1.0],
                vec![0.7, 0.7],
            ],
        )
        .unwrap();

        let results = index.search(&[1.0, 0.1], 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].passage.id, "x-axis");
        assert_eq!(results[1].passage.id, "diagonal");
        assert!(results[0].score >= results[1].score);
    }

    #[test]
    fn oversized_k_returns_whole_corpus() {
        let index = VectorIndex::build(
            vec![passage("a"), passage("b")],
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
        )
        .unwrap();

        let results = index.search(&[0.5, 0.5], DEFAULT_RETRIEVAL_DEPTH);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn zero_query_scores_everything_zero() {
        let index = VectorIndex::build(vec![passage("a")], vec![vec![1.0, 0.0]]).unwrap();
        let results = index.search(&[0.0, 0.0], 1);
        assert_eq!(results[0].score, 0.0);
    }
}
