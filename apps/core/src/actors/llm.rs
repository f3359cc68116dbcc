use crate::actors::messages::{ActorError, AppError, CompletionRequest, LlmMessage};
use crate::actors::traits::LlmActor;
use crate::config::ProviderConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;
use tracing::{error, info, instrument};

// --- Constants ---
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(45);
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(60);

/// A handle to the `LlmActor`.
///
/// This struct provides a public, cloneable interface for sending messages to the
/// running LLM actor. It abstracts away the `mpsc::Sender`.
#[derive(Clone)]
pub struct LlmActorHandle {
    sender: mpsc::Sender<LlmMessage>,
}

impl LlmActorHandle {
    /// Creates a new `LlmActor` and returns a handle to it.
    ///
    /// This will spawn the `LlmActorRunner` in a new Tokio task, so it must be
    /// called from within a Tokio runtime.
    pub fn new(config: ProviderConfig) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let actor = LlmActorRunner::new(receiver, config);
        tokio::spawn(async move { actor.run().await });
        Self { sender }
    }
}

#[async_trait]
impl LlmActor for LlmActorHandle {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = LlmMessage::Complete {
            request,
            responder: send,
        };

        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Actor(ActorError::Internal(e.to_string())))?;
        timeout(RESPONSE_TIMEOUT, recv)
            .await?
            .map_err(|e| AppError::Actor(ActorError::Internal(e.to_string())))?
    }
}

// --- Actor Runner (Internal Logic) ---
struct LlmActorRunner {
    receiver: mpsc::Receiver<LlmMessage>,
    client: Client,
    config: ProviderConfig,
}

impl LlmActorRunner {
    fn new(receiver: mpsc::Receiver<LlmMessage>, config: ProviderConfig) -> Self {
        Self {
            receiver,
            client: Client::new(),
            config,
        }
    }

    async fn run(mut self) {
        info!("LlmActor started (provider: {})", self.config.base_url);

        while let Some(msg) = self.receiver.recv().await {
            self.handle_message(msg);
        }

        info!("LlmActor stopped");
    }

    /// Each completion runs on its own task so slow requests do not queue.
    fn handle_message(&self, msg: LlmMessage) {
        match msg {
            LlmMessage::Complete { request, responder } => {
                let client = self.client.clone();
                let config = self.config.clone();
                tokio::spawn(async move {
                    let result = generate_completion(&client, &config, request).await;
                    let _ = responder.send(result);
                });
            }
        }
    }
}

fn build_request(
    client: &Client,
    config: &ProviderConfig,
    payload: &CompletionRequest,
) -> Result<reqwest::RequestBuilder, AppError> {
    let mut headers = HeaderMap::new();
    let auth_value = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
        .map_err(|e| AppError::Config(format!("Invalid API key header: {}", e)))?;
    headers.insert(AUTHORIZATION, auth_value);

    Ok(client
        .post(format!("{}/chat/completions", config.base_url))
        .headers(headers)
        .json(payload))
}

#[instrument(skip_all, fields(model = %request.model, messages = request.messages.len()))]
async fn generate_completion(
    client: &Client,
    config: &ProviderConfig,
    request: CompletionRequest,
) -> Result<String, AppError> {
    let request_future = build_request(client, config, &request)?.send();

    let res = timeout(COMPLETION_TIMEOUT, request_future).await??;

    let status = res.status();

    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        error!("Completion request failed with status {}", status);
        return Err(AppError::Actor(ActorError::LlmError(format!(
            "Completion request failed with status {}: {}",
            status, body
        ))));
    }

    let json: serde_json::Value = res
        .json()
        .await
        .map_err(|e| AppError::Actor(ActorError::LlmError(e.to_string())))?;

    let choice = json["choices"]
        .get(0)
        .ok_or_else(|| AppError::Actor(ActorError::LlmError("Response has no choices".to_string())))?;

    Ok(choice["message"]["content"].as_str().unwrap_or("").to_string())
}
