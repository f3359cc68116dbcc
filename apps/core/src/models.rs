use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A recorded mood check-in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: i64,
    /// When the entry was recorded (UTC).
    pub created_at: DateTime<Utc>,
    /// Self-reported mood, 1 (lowest) to 10 (highest).
    pub mood_score: i64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MoodEntryCreate {
    #[validate(range(min = 1, max = 10))]
    pub mood_score: i64,
    #[serde(default)]
    pub note: Option<String>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MoodEntryUpdate {
    #[validate(range(min = 1, max = 10))]
    #[serde(default)]
    pub mood_score: Option<i64>,
    #[serde(default)]
    pub note: Option<String>,
}

/// A free-form journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JournalEntry {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JournalEntryCreate {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalEntryUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// One turn of a prior conversation, as sent by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Option<Vec<ChatMessage>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub reply: String,
    pub suggestions: Vec<String>,
    /// Model that produced the reply, or `"fallback"` for the scripted answer.
    pub used_model: String,
    pub safety_notice: String,
}

/// A crisis-support contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceItem {
    pub name: String,
    pub country: String,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}
