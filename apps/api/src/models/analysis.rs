use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A résumé file as received in the multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub filename: String,
    pub bytes: Bytes,
}

/// One `/analyze` call: a job description scored against each résumé in order.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub job_description: String,
    pub resumes: Vec<UploadedResume>,
}

/// A résumé moving through the pipeline. Discarded once scored.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub raw_text: String,
    pub cleaned_text: String,
}

/// Match score for a single résumé, as a percentage in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub filename: String,
    pub match_score: f64,
}
