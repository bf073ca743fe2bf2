//! Axum route handler for the Analysis API.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::analysis::pipeline::run_analysis;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisRequest, ScoreResult, UploadedResume};
use crate::state::AppState;

pub const RESUMES_FIELD: &str = "resumes";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
const SUCCESS_MESSAGE: &str = "Resumes analyzed successfully.";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub message: String,
    pub results: Vec<ScoreResult>,
}

/// POST /analyze
///
/// Multipart form: one or more `resumes` PDF parts plus a `job_description`
/// text part. Every failure is reported as a 500 with an `error` string.
#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let multipart = multipart.map_err(|e| AppError::MalformedUpload(e.body_text()))?;
    let request = read_analysis_request(multipart).await?;

    info!(
        resumes = request.resumes.len(),
        "Received analysis request"
    );

    let normalizer = state.normalizer.clone();
    let scorer = state.scorer.clone();
    let results = tokio::task::spawn_blocking(move || {
        run_analysis(&request, &normalizer, scorer.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in analysis: {e}")))??;

    Ok(Json(AnalyzeResponse {
        message: SUCCESS_MESSAGE.to_string(),
        results,
    }))
}

/// Collects the form fields. Unknown fields are ignored; a repeated
/// `job_description` keeps its first value.
async fn read_analysis_request(mut multipart: Multipart) -> Result<AnalysisRequest, AppError> {
    let mut job_description: Option<String> = None;
    let mut resumes = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedUpload(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            RESUMES_FIELD => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::MalformedUpload(e.body_text()))?;
                resumes.push(UploadedResume { filename, bytes });
            }
            JOB_DESCRIPTION_FIELD if job_description.is_none() => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::MalformedUpload(e.body_text()))?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or(AppError::MissingField(JOB_DESCRIPTION_FIELD))?;

    Ok(AnalysisRequest {
        job_description,
        resumes,
    })
}
