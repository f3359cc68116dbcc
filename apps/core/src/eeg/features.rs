//! Fixed-length feature vectors.

use super::ingest::IngestError;

/// Number of features consumed from each CSV row.
pub const NUM_FEATURES: usize = 1024;

/// Exactly [`NUM_FEATURES`] finite values taken from one CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

/// Descriptive statistics the scoring heuristics are built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStats {
    pub mean: f64,
    /// Population variance (mean of squared deviations).
    pub variance: f64,
    /// Count of strictly positive values.
    pub positive_count: usize,
    pub len: usize,
}

impl FeatureStats {
    pub fn abs_mean(&self) -> f64 {
        self.mean.abs()
    }
}

/// Parses a CSV field as a finite decimal number, ignoring surrounding whitespace.
pub fn parse_finite(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

impl FeatureVector {
    /// Builds a vector from already-parsed values. Values past
    /// [`NUM_FEATURES`] are dropped.
    pub fn from_values(mut values: Vec<f64>) -> Result<Self, IngestError> {
        values.truncate(NUM_FEATURES);
        if values.iter().any(|v| !v.is_finite()) {
            return Err(IngestError::NonNumericValue);
        }
        if values.len() < NUM_FEATURES {
            return Err(IngestError::InsufficientFeatures {
                expected: NUM_FEATURES,
                got: values.len(),
            });
        }
        Ok(Self(values))
    }

    /// Parses the leading [`NUM_FEATURES`] fields of a row.
    ///
    /// A non-numeric field is reported before a short row, so a 500-column row
    /// containing text fails with `NonNumericValue`.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self, IngestError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let values = fields
            .into_iter()
            .take(NUM_FEATURES)
            .map(|field| parse_finite(field).ok_or(IngestError::NonNumericValue))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_values(values)
    }

    #[cfg(test)]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn stats(&self) -> FeatureStats {
        let len = self.0.len();
        let n = len as f64;
        let mean = self.0.iter().sum::<f64>() / n;
        let variance = self.0.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let positive_count = self.0.iter().filter(|x| **x > 0.0).count();
        FeatureStats {
            mean,
            variance,
            positive_count,
            len,
        }
    }
}
