use crate::eeg::aggregate::BatchReport;
use crate::eeg::ingest;
use crate::eeg::sample::{generate_sample_csv, SAMPLE_FILENAME};
use crate::eeg::{score, ScoreResult, Target};
use crate::error::AppError;
use axum::body::Bytes;
use axum::extract::{Multipart, Path};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::{info, instrument};

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub target: Target,
    pub result: ScoreResult,
}

struct CsvUpload {
    filename: String,
    bytes: Bytes,
}

/// Reads the `file` field of a multipart upload and checks its extension.
async fn read_csv_upload(mut multipart: Multipart) -> Result<CsvUpload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        ingest::check_extension(&filename)?;
        let bytes = field.bytes().await?;
        return Ok(CsvUpload { filename, bytes });
    }
    Err(AppError::BadRequest(format!(
        "Missing upload field '{}'",
        UPLOAD_FIELD
    )))
}

/// Scores the first data row of the uploaded CSV.
#[instrument(skip_all, fields(target = %target))]
pub async fn predict(
    Path(target): Path<Target>,
    multipart: Multipart,
) -> Result<Json<PredictResponse>, AppError> {
    let upload = read_csv_upload(multipart).await?;
    let features = ingest::first_vector(&upload.bytes)?;
    let result = score(&features, target);

    info!(
        "Scored {} ({} bytes) for {}",
        upload.filename,
        upload.bytes.len(),
        target
    );
    Ok(Json(PredictResponse { target, result }))
}

/// Scores every parsable data row; unusable rows are skipped, not reported.
#[instrument(skip_all, fields(target = %target))]
pub async fn predict_batch(
    Path(target): Path<Target>,
    multipart: Multipart,
) -> Result<Json<BatchReport>, AppError> {
    let upload = read_csv_upload(multipart).await?;
    let batch = ingest::batch_vectors(&upload.bytes)?;
    let report = BatchReport::build(target, &batch.vectors);

    info!(
        "Batch scored {} for {}: {} rows, {} skipped",
        upload.filename, target, report.count, batch.skipped
    );
    Ok(Json(report))
}

/// Downloadable demo CSV with random feature rows.
pub async fn sample_csv() -> Result<impl IntoResponse, AppError> {
    let csv = generate_sample_csv(&mut rand::thread_rng())?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", SAMPLE_FILENAME),
            ),
        ],
        csv,
    ))
}
