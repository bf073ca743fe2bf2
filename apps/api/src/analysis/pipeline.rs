//! Request orchestration: extract → normalize → score for every résumé.
//!
//! The job description is normalized once and reused. Any failure aborts the
//! whole batch; already computed scores are discarded.

use tracing::{debug, info};

use crate::analysis::extractor::extract_text;
use crate::analysis::normalizer::Normalizer;
use crate::analysis::scorer::SimilarityScorer;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisRequest, Document, ScoreResult, UploadedResume};

/// Runs the blocking pipeline for one request. Call from `spawn_blocking`.
pub fn run_analysis(
    request: &AnalysisRequest,
    normalizer: &Normalizer,
    scorer: &dyn SimilarityScorer,
) -> Result<Vec<ScoreResult>, AppError> {
    let job_clean = normalizer.normalize(&request.job_description);
    debug!(
        job_terms = job_clean.split_whitespace().count(),
        "Normalized job description"
    );

    let mut results = Vec::with_capacity(request.resumes.len());
    for upload in &request.resumes {
        let document = prepare_document(upload, normalizer)?;
        let match_score = scorer.score(&document.cleaned_text, &job_clean)?;

        info!(
            filename = %document.filename,
            raw_chars = document.raw_text.len(),
            match_score,
            scorer = scorer.name(),
            "Scored resume"
        );
        results.push(ScoreResult {
            filename: document.filename,
            match_score,
        });
    }

    Ok(results)
}

fn prepare_document(upload: &UploadedResume, normalizer: &Normalizer) -> Result<Document, AppError> {
    let raw_text = extract_text(&upload.bytes).map_err(|source| AppError::Extraction {
        filename: upload.filename.clone(),
        source,
    })?;
    let cleaned_text = normalizer.normalize(&raw_text);

    Ok(Document {
        filename: upload.filename.clone(),
        raw_text,
        cleaned_text,
    })
}
