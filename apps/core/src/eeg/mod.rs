//! # EEG Feature Scoring
//!
//! Placeholder classifier for uploaded EEG feature vectors.
//! Scores are heuristics derived from simple descriptive statistics of a row,
//! not the output of a trained model.
//!
//! ## Components
//! - `target`: the ten scoring targets and their transform table
//! - `features`: fixed-length feature vectors and their statistics
//! - `ingest`: CSV decoding, header detection and row validation
//! - `scoring`: per-row scoring
//! - `aggregate`: batch summaries
//! - `sample`: demo CSV generator

pub mod aggregate;
pub mod features;
pub mod ingest;
pub mod sample;
pub mod scoring;
pub mod target;

pub use ingest::IngestError;
pub use scoring::{score, ScoreResult};
pub use target::Target;
