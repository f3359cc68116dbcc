//! CSV ingestion for uploaded feature files.
//!
//! Uploads are decoded leniently, split into rows with the `csv` crate, and an
//! optional header row is dropped. The single-row path reports every
//! validation failure; the batch path only fails on an unusable upload and
//! skips bad rows.

use super::features::{parse_finite, FeatureVector};
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

/// Client-facing upload validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("Please upload a CSV file")]
    BadExtension,
    #[error("CSV is empty")]
    EmptyInput,
    #[error("CSV has no data rows")]
    NoDataRows,
    #[error("CSV contains non-numeric values")]
    NonNumericValue,
    #[error("Expected {expected} features, got {got}")]
    InsufficientFeatures { expected: usize, got: usize },
}

/// Vectors recovered from a batch upload.
#[derive(Debug, Default)]
pub struct ParsedBatch {
    pub vectors: Vec<FeatureVector>,
    /// Data rows dropped for non-numeric values or missing columns.
    pub skipped: usize,
}

/// Only the suffix is checked; content type is ignored.
pub fn check_extension(filename: &str) -> Result<(), IngestError> {
    if filename.ends_with(".csv") {
        Ok(())
    } else {
        Err(IngestError::BadExtension)
    }
}

/// Decodes UTF-8, dropping any invalid byte sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

fn read_rows(text: &str) -> Vec<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    reader
        .records()
        .filter_map(|record| match record {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping unreadable CSV record: {}", e);
                None
            }
        })
        .collect()
}

/// A row is a header when any of its fields is not a finite number.
pub fn looks_like_header(record: &StringRecord) -> bool {
    record.iter().any(|field| parse_finite(field).is_none())
}

/// Parses the upload and returns its data rows, header removed.
pub fn data_rows(bytes: &[u8]) -> Result<Vec<StringRecord>, IngestError> {
    let mut rows = read_rows(&decode_lossy(bytes));
    if rows.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    if looks_like_header(&rows[0]) {
        debug!("Dropping header row with {} fields", rows[0].len());
        rows.remove(0);
    }
    Ok(rows)
}

/// The first data row as a feature vector. Later rows are ignored.
pub fn first_vector(bytes: &[u8]) -> Result<FeatureVector, IngestError> {
    let rows = data_rows(bytes)?;
    let first = rows.first().ok_or(IngestError::NoDataRows)?;
    FeatureVector::from_fields(first.iter())
}

/// Every data row that parses as a feature vector.
pub fn batch_vectors(bytes: &[u8]) -> Result<ParsedBatch, IngestError> {
    let rows = data_rows(bytes)?;
    let mut batch = ParsedBatch::default();
    for row in &rows {
        match FeatureVector::from_fields(row.iter()) {
            Ok(vector) => batch.vectors.push(vector),
            Err(_) => batch.skipped += 1,
        }
    }
    Ok(batch)
}
