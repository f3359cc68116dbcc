//! Test Module
//!
//! Crate-level test suite for the Mindful Companion backend.
//!
//! ## Test Categories
//! - `eeg_tests`: scoring formulas and bounds across every target
//! - `database_tests`: CRUD operations for mood and journal entries
//! - `chat_tests`: chat service behavior with mock and mocked-HTTP providers
//! - `api_tests`: full router behavior over HTTP requests

pub mod database_tests;
