//! Supportive chat replies.
//!
//! Replies come from the completion provider when one is configured. Any
//! provider failure degrades to a scripted, deterministic reply so the
//! endpoint always answers.

use crate::actors::messages::CompletionRequest;
use crate::actors::traits::LlmActor;
use crate::models::{ChatMessage, ChatRequest, ChatResponse};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const SYSTEM_PROMPT: &str = "You are a supportive, empathetic mental health companion. \
Provide brief, validating responses (4-7 sentences), suggest 1-2 gentle next steps, and when appropriate, a simple grounding/breathing exercise. \
Maintain a non-judgmental tone, avoid medical diagnoses, and always include a short reminder that you're not a replacement for professional help. \
If the user expresses intent to harm self or others, urge them to contact local emergency services or a crisis hotline immediately.";

pub const FALLBACK_MODEL: &str = "fallback";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 400;
const EMPTY_REPLY: &str = "I'm here with you.";

pub struct ChatService {
    provider: Option<Arc<dyn LlmActor>>,
    model: String,
}

impl ChatService {
    pub fn new(provider: Option<Arc<dyn LlmActor>>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// A service that always answers with the scripted reply.
    pub fn offline() -> Self {
        Self::new(None, FALLBACK_MODEL)
    }

    #[instrument(skip_all, fields(history = req.history.as_ref().map_or(0, Vec::len)))]
    pub async fn respond(&self, req: &ChatRequest) -> ChatResponse {
        let Some(provider) = &self.provider else {
            info!("No completion provider configured, using fallback reply");
            return fallback_reply();
        };

        match provider.complete(self.build_request(req)).await {
            Ok(text) => self.provider_reply(&text),
            Err(e) => {
                warn!("Completion provider failed, using fallback reply: {}", e);
                fallback_reply()
            }
        }
    }

    /// System prompt, then user/assistant history with content, then the new message.
    pub fn build_request(&self, req: &ChatRequest) -> CompletionRequest {
        let mut messages = vec![ChatMessage::new("system", SYSTEM_PROMPT)];
        if let Some(history) = &req.history {
            messages.extend(
                history
                    .iter()
                    .filter(|m| matches!(m.role.as_str(), "user" | "assistant"))
                    .filter(|m| !m.content.is_empty())
                    .cloned(),
            );
        }
        messages.push(ChatMessage::new("user", req.message.clone()));

        CompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    fn provider_reply(&self, text: &str) -> ChatResponse {
        let reply = match text.trim() {
            "" => EMPTY_REPLY,
            trimmed => trimmed,
        };
        ChatResponse {
            reply: reply.to_string(),
            suggestions: vec![
                "Try a short grounding or breathing exercise".to_string(),
                "Write what you’re feeling for 2 minutes without editing".to_string(),
                "Drink some water and step outside for fresh air".to_string(),
            ],
            used_model: self.model.clone(),
            safety_notice: "I'm an AI companion, not a substitute for professional care. If you're in crisis, call your local emergency number or a crisis hotline.".to_string(),
        }
    }
}

/// Scripted reply used without a provider or when the provider fails.
pub fn fallback_reply() -> ChatResponse {
    let empathy = "I hear you—thank you for sharing this with me. It sounds like you're dealing with a lot right now.";
    let simple_tool = "Try a 60-second grounding: notice 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, and 1 you can taste.";
    let crisis_note = "If you're in immediate danger or considering self-harm, please contact local emergency services or your regional crisis line right now.";

    ChatResponse {
        reply: format!("{} {} {}", empathy, simple_tool, crisis_note),
        suggestions: vec![
            "Take three slow breaths (4 in, 4 hold, 6 out)".to_string(),
            "Write down one worry and one thing you can control today".to_string(),
        ],
        used_model: FALLBACK_MODEL.to_string(),
        safety_notice: "This is not medical advice; consider speaking with a licensed professional.".to_string(),
    }
}
