//! Similarity Scoring — pluggable scorer comparing a cleaned résumé with a
//! cleaned job description.
//!
//! `AppState` holds an `Arc<dyn SimilarityScorer>`; `TfidfCosineScorer` is the
//! default backend.

use tracing::debug;

use crate::analysis::tfidf::{cosine_similarity, TfidfMatrix};
use crate::errors::AppError;

/// Implement this to swap scoring backends without touching the pipeline or
/// handlers. Scores are percentages in `[0, 100]` with two decimals.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, resume_clean: &str, job_clean: &str) -> Result<f64, AppError>;

    /// Short backend label for logs.
    fn name(&self) -> &str;
}

/// Fits a fresh TF-IDF model on the two-document corpus `[resume, job]` for
/// every call, so scores from different requests are not on a shared scale.
pub struct TfidfCosineScorer;

impl SimilarityScorer for TfidfCosineScorer {
    fn score(&self, resume_clean: &str, job_clean: &str) -> Result<f64, AppError> {
        let matrix = TfidfMatrix::fit_transform(&[resume_clean, job_clean]);
        let similarity = cosine_similarity(&matrix.rows[0], &matrix.rows[1]);
        debug!(terms = matrix.vocabulary.len(), similarity, "Fitted two-document TF-IDF");

        if !similarity.is_finite() {
            return Err(AppError::Scoring(format!(
                "similarity is not a finite number ({similarity})"
            )));
        }

        Ok(to_percentage(similarity))
    }

    fn name(&self) -> &str {
        "tfidf-cosine"
    }
}

/// Scales a `[0, 1]` similarity to a percentage rounded to two decimals.
pub fn to_percentage(similarity: f64) -> f64 {
    round_two_decimals(similarity.clamp(0.0, 1.0) * 100.0)
}

/// Half-way cases round to even, as Python's `round(x, 2)` does.
fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(a: &str, b: &str) -> f64 {
        TfidfCosineScorer.score(a, b).unwrap()
    }

    #[test]
    fn test_identical_documents_score_100() {
        assert_eq!(score("python flask backend", "python flask backend"), 100.0);
        assert_eq!(score("rust rust tokio", "rust rust tokio"), 100.0);
    }

    #[test]
    fn test_disjoint_vocabulary_scores_0() {
        assert_eq!(score("python flask", "welding forklift"), 0.0);
    }

    #[test]
    fn test_empty_inputs_score_0() {
        assert_eq!(score("", ""), 0.0);
        assert_eq!(score("python", ""), 0.0);
        assert_eq!(score("", "python"), 0.0);
    }

    #[test]
    fn test_single_char_tokens_do_not_count() {
        assert_eq!(score("a b c", "a b c"), 0.0);
    }

    #[test]
    fn test_partial_overlap_is_between_bounds() {
        let s = score("python flask rest api", "python backend engineer flask");
        assert!(s > 0.0 && s < 100.0, "score was {s}");
    }

    #[test]
    fn test_known_value_for_two_shared_terms() {
        // shared terms weigh 1, unique terms weigh ln(1.5) + 1
        let u = 1.5f64.ln() + 1.0;
        let expected = 2.0 / ((2.0 + 2.0 * u * u).sqrt() * (2.0 + 2.0 * u * u).sqrt());
        let s = score("python flask rest api", "python flask go kafka");
        assert_eq!(s, to_percentage(expected));
    }

    #[test]
    fn test_score_is_symmetric() {
        let a = "python flask rest api developer";
        let b = "python backend engineer flask experience";
        assert_eq!(score(a, b), score(b, a));
    }

    #[test]
    fn test_more_overlap_scores_higher() {
        let job = "python flask backend engineer";
        assert!(score("python flask backend", job) > score("python welding forklift", job));
    }

    #[test]
    fn test_to_percentage_rounds_and_clamps() {
        assert_eq!(to_percentage(0.123456), 12.35);
        assert_eq!(to_percentage(1.0000000002), 100.0);
        assert_eq!(to_percentage(-0.1), 0.0);
    }

    #[test]
    fn test_exact_halves_round_to_even() {
        assert_eq!(round_two_decimals(0.125), 0.12);
        assert_eq!(round_two_decimals(0.375), 0.38);
        assert_eq!(round_two_decimals(12.5), 12.5);
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(TfidfCosineScorer.name(), "tfidf-cosine");
    }
}
