//! BM25 ranking over a small in-memory corpus.
//!
//! The index is rebuilt from scratch by every [`Bm25::fit`] call; with tens
//! to low thousands of rows per table that is cheaper than maintaining a
//! persistent index.
//!
//! # Scoring
//!
//! For each query token present in the fitted vocabulary, a document earns
//!
//! ```text
//! idf(t) * tf * (k1 + 1) / (tf + k1 * (1 - b + b * len / avgdl))
//! ```
//!
//! where `idf(t) = ln((N - df + 0.5) / (df + 0.5) + 1)`. Tokens outside the
//! vocabulary contribute nothing — there is no unseen-term smoothing.

use std::collections::{HashMap, HashSet};

use crate::tokenize::tokenize;

/// Default term-frequency saturation.
pub const DEFAULT_K1: f64 = 1.5;

/// Default document-length normalization strength.
pub const DEFAULT_B: f64 = 0.75;

/// A BM25 index over one table's documents.
#[derive(Debug, Clone)]
pub struct Bm25 {
    k1: f64,
    b: f64,
    corpus: Vec<Vec<String>>,
    doc_lengths: Vec<usize>,
    avgdl: f64,
    idf: HashMap<String, f64>,
}

impl Default for Bm25 {
    fn default() -> Self {
        Self::new(DEFAULT_K1, DEFAULT_B)
    }
}

impl Bm25 {
    pub fn new(k1: f64, b: f64) -> Self {
        Self {
            k1,
            b,
            corpus: Vec::new(),
            doc_lengths: Vec::new(),
            avgdl: 0.0,
            idf: HashMap::new(),
        }
    }

    /// Build the index from raw document strings.
    ///
    /// Replaces any previously fitted state. An empty document set leaves
    /// the index inert: [`Bm25::score`] will return an empty vector.
    pub fn fit(&mut self, documents: &[String]) {
        self.corpus = documents.iter().map(|doc| tokenize(doc)).collect();
        self.doc_lengths.clear();
        self.avgdl = 0.0;
        self.idf.clear();

        let n = self.corpus.len();
        if n == 0 {
            return;
        }

        self.doc_lengths = self.corpus.iter().map(Vec::len).collect();
        self.avgdl = self.doc_lengths.iter().sum::<usize>() as f64 / n as f64;

        // Document frequency counts documents containing the token, not
        // raw occurrences.
        let mut doc_freqs: HashMap<&str, usize> = HashMap::new();
        for doc in &self.corpus {
            let mut seen: HashSet<&str> = HashSet::new();
            for word in doc {
                if seen.insert(word) {
                    *doc_freqs.entry(word).or_insert(0) += 1;
                }
            }
        }

        self.idf = doc_freqs
            .into_iter()
            .map(|(word, df)| {
                let idf = ((n as f64 - df as f64 + 0.5) / (df as f64 + 0.5) + 1.0).ln();
                (word.to_string(), idf)
            })
            .collect();
    }

    /// Score every fitted document against the query.
    ///
    /// Returns one `(original index, score)` pair per document, ordered by
    /// descending score. The sort is stable, so equal scores keep their
    /// original row order — this decides which of equally relevant rows
    /// surfaces first and must not change.
    pub fn score(&self, query: &str) -> Vec<(usize, f64)> {
        let query_tokens = tokenize(query);
        let mut scores: Vec<(usize, f64)> = Vec::with_capacity(self.corpus.len());

        for (idx, doc) in self.corpus.iter().enumerate() {
            let doc_len = self.doc_lengths[idx] as f64;

            let mut term_freqs: HashMap<&str, usize> = HashMap::new();
            for word in doc {
                *term_freqs.entry(word.as_str()).or_insert(0) += 1;
            }

            let mut score = 0.0;
            for token in &query_tokens {
                if let Some(idf) = self.idf.get(token.as_str()) {
                    let tf = term_freqs.get(token.as_str()).copied().unwrap_or(0) as f64;
                    let numerator = tf * (self.k1 + 1.0);
                    let denominator =
                        tf + self.k1 * (1.0 - self.b + self.b * doc_len / self.avgdl);
                    score += idf * numerator / denominator;
                }
            }

            scores.push((idx, score));
        }

        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scores
    }
}
