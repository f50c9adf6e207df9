//! Keyword embedding for the product search
//!
//! A TF-IDF vectorizer over the catalog text. Good enough for a small
//! drinkware catalog without heavy ML dependencies.

use std::collections::{BTreeSet, HashMap};

/// TF-IDF text embedder fitted on a document corpus
#[derive(Debug, Default)]
pub struct SimpleEmbedder {
    idf_scores: HashMap<String, f64>,
    vocab: BTreeSet<String>,
}

impl SimpleEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize text into lowercase alphanumeric words longer than 2 chars
    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
            .collect::<String>()
            .split_whitespace()
            .filter(|token| token.len() > 2)
            .map(|token| token.to_string())
            .collect()
    }

    fn compute_tf(tokens: &[String]) -> HashMap<String, f64> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }

        let total = tokens.len() as f64;
        counts.into_iter().map(|(word, count)| (word, count as f64 / total)).collect()
    }

    /// Fit the embedder on a corpus of documents
    pub fn fit(&mut self, documents: &[String]) {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|doc| Self::tokenize(doc)).collect();

        for tokens in &tokenized {
            self.vocab.extend(tokens.iter().cloned());
        }

        let doc_count = documents.len() as f64;
        let mut word_doc_count: HashMap<&str, usize> = HashMap::new();

        for tokens in &tokenized {
            let unique: BTreeSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for token in unique {
                *word_doc_count.entry(token).or_insert(0) += 1;
            }
        }

        for (word, count) in word_doc_count {
            self.idf_scores.insert(word.to_string(), (doc_count / count as f64).ln());
        }
    }

    /// Create a normalized TF-IDF vector for the text
    ///
    /// Vector components follow the sorted vocabulary, so vectors from the
    /// same fitted embedder are always comparable.
    pub fn embed(&self, text: &str) -> Vec<f64> {
        let tokens = Self::tokenize(text);
        let tf_scores = Self::compute_tf(&tokens);

        let mut vector: Vec<f64> = self
            .vocab
            .iter()
            .map(|word| {
                let tf = tf_scores.get(word).copied().unwrap_or(0.0);
                let idf = self.idf_scores.get(word).copied().unwrap_or(0.0);
                tf * idf
            })
            .collect();

        let magnitude = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if magnitude > 0.0 {
            for v in &mut vector {
                *v /= magnitude;
            }
        }

        vector
    }

    /// Cosine similarity between two vectors, clamped to [0, 1]
    pub fn similarity(&self, a: &[f64], b: &[f64]) -> f64 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        dot.clamp(0.0, 1.0)
    }
}
