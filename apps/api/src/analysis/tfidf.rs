//! TF-IDF vectorizer fitted over a small in-memory corpus.
//!
//! ```text
//! tf(t, d)  = raw count of t in d
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1      (smoothed)
//! v(d)      = [tf(t, d) * idf(t) for t in vocabulary] / ||.||₂
//! ```
//!
//! Tokens are maximal runs of alphanumeric or `_` characters, lowercased, of
//! at least two characters.

use std::collections::{BTreeMap, HashSet};

const MIN_TOKEN_CHARS: usize = 2;

/// A fitted vocabulary with one L2-normalized vector per corpus document.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    /// Term → column index, sorted by term.
    pub vocabulary: BTreeMap<String, usize>,
    pub rows: Vec<Vec<f64>>,
}

impl TfidfMatrix {
    /// Fits vocabulary and IDF on `documents` and transforms them.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| analyze(d.as_ref())).collect();

        let mut vocabulary: BTreeMap<String, usize> = tokenized
            .iter()
            .flatten()
            .map(|t| (t.clone(), 0))
            .collect();
        for (idx, column) in vocabulary.values_mut().enumerate() {
            *column = idx;
        }

        let n = documents.len() as f64;
        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: HashSet<&String> = tokens.iter().collect();
            for term in unique {
                df[vocabulary[term]] += 1;
            }
        }
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for term in tokens {
                    row[vocabulary[term]] += 1.0;
                }
                for (weight, idf) in row.iter_mut().zip(&idf) {
                    *weight *= idf;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Self { vocabulary, rows }
    }
}

/// Splits a document into lowercase terms.
pub fn analyze(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|s| s.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in row.iter_mut() {
            *w /= norm;
        }
    }
}

/// Cosine of the angle between `a` and `b`; 0 when either has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
