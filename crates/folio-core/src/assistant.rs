//! Portfolio assistant backed by a hosted language model.
//!
//! The model is an opaque collaborator: it receives a system instruction
//! (persona plus the portfolio document) and the conversation so far, and
//! returns text. Nothing here interprets the answer.
//!
//! ```text
//! Transcript  (what the panel shows: greeting + turns + pending flag)
//!     │ begin / finish
//! ChatSession (history sent to the model, rollback on failure)
//!     │ generate
//! LanguageModel ── GeminiClient (HTTPS generateContent)
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::content::PortfolioData;
use crate::error::FolioError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Shown when the model call itself fails.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again later.";

/// Shown when there is no model to talk to at all.
pub const UNAVAILABLE_REPLY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// System instruction for a portfolio: persona, grounding rules, then the
/// document itself as pretty-printed JSON.
pub fn system_instruction(data: &PortfolioData) -> Result<String, FolioError> {
    let name = &data.personal_info.name;
    let first = data.personal_info.first_name();
    let json = serde_json::to_string_pretty(data)?;
    Ok(format!(
        "You are a helpful and friendly AI assistant for the portfolio of {name}. \
Your personality is professional yet approachable. Answer questions based *only* on the \
following portfolio data. Do not make up information. If a question is outside this scope \
or you don't know the answer from the data, politely state that you can only answer \
questions about {first}'s portfolio. Format your answers clearly, using markdown for lists \
or emphasis where appropriate.\n\nHere is the portfolio data in JSON format:\n{json}"
    ))
}

/// Opening line of the assistant panel.
pub fn greeting(data: &PortfolioData) -> String {
    format!(
        "Hi! I'm {}'s AI assistant. Ask me anything about their skills, experience, or projects.",
        data.personal_info.first_name()
    )
}

/// Anything that turns a conversation into a reply.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, system: &str, history: &[ChatMessage]) -> Result<String, FolioError>;
}

/// Connection settings for the hosted model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AssistantConfig {
    /// `GEMINI_API_KEY` (or `API_KEY`), `FOLIO_MODEL`, `FOLIO_API_BASE`.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: var("GEMINI_API_KEY").or_else(|| var("API_KEY")),
            model: var("FOLIO_MODEL").unwrap_or(defaults.model),
            api_base: var("FOLIO_API_BASE").unwrap_or(defaults.api_base),
        }
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model {
            self.model = model;
        }
        self
    }
}

/// [`LanguageModel`] over the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_base: api_base.into(),
        }
    }

    /// `None` when no API key is configured.
    pub fn from_config(config: &AssistantConfig) -> Option<Self> {
        let key = config.api_key.as_ref()?;
        Some(Self::new(key.clone(), config.model.clone(), config.api_base.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    fn request_body(system: &str, history: &[ChatMessage]) -> serde_json::Value {
        let contents: Vec<_> = history
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "parts": [{ "text": m.content }] }))
            .collect();
        json!({
            "systemInstruction": { "parts": [{ "text": system }] },
            "contents": contents,
        })
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn generate(&self, system: &str, history: &[ChatMessage]) -> Result<String, FolioError> {
        let url = self.endpoint();
        tracing::debug!(model = %self.model, turns = history.len(), "Sending prompt to model");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(system, history))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FolioError::Assistant(format!("model returned {}: {}", status, body)));
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(FolioError::Assistant("model returned no text".to_string()));
        }
        Ok(text)
    }
}

/// Multi-turn conversation with the model.
pub struct ChatSession {
    model: Arc<dyn LanguageModel>,
    system: String,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(model: Arc<dyn LanguageModel>, data: &PortfolioData) -> Result<Self, FolioError> {
        Ok(Self {
            model,
            system: system_instruction(data)?,
            history: Vec::new(),
        })
    }

    pub fn system_instruction(&self) -> &str {
        &self.system
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Send one user turn. On failure the turn is rolled back so the next
    /// attempt starts from the same history.
    pub async fn send(&mut self, text: &str) -> Result<String, FolioError> {
        self.history.push(ChatMessage::user(text));
        match self.model.generate(&self.system, &self.history).await {
            Ok(reply) => {
                self.history.push(ChatMessage::model(reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                self.history.pop();
                Err(e)
            }
        }
    }

    /// Like [`send`](Self::send), but failures become [`ERROR_REPLY`].
    pub async fn reply(&mut self, text: &str) -> String {
        match self.send(text).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "Assistant request failed");
                ERROR_REPLY.to_string()
            }
        }
    }
}

/// What the assistant panel renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Transcript {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::model(greeting)],
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether `input` would be accepted by [`begin`](Self::begin).
    pub fn can_send(&self, input: &str) -> bool {
        !self.pending && !input.trim().is_empty()
    }

    /// Record a visitor line and mark a reply as pending.
    ///
    /// Blank input, or input while a reply is still pending, is refused.
    pub fn begin(&mut self, input: &str) -> Option<String> {
        if !self.can_send(input) {
            return None;
        }
        self.messages.push(ChatMessage::user(input));
        self.pending = true;
        Some(input.to_string())
    }

    /// Append the assistant's answer and clear the pending flag.
    pub fn finish(&mut self, reply: impl Into<String>) {
        self.messages.push(ChatMessage::model(reply));
        self.pending = false;
    }

    /// There was no model to ask.
    pub fn fail(&mut self) {
        self.finish(UNAVAILABLE_REPLY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Replies with the number of turns it saw, or fails on demand.
    struct FakeModel {
        fail: bool,
        seen: Mutex<Vec<usize>>,
    }

    #[async_trait]
    impl LanguageModel for FakeModel {
        async fn generate(&self, _system: &str, history: &[ChatMessage]) -> Result<String, FolioError> {
            self.seen.lock().push(history.len());
            if self.fail {
                Err(FolioError::Assistant("boom".into()))
            } else {
                Ok(format!("turns={}", history.len()))
            }
        }
    }

    fn data() -> PortfolioData {
        PortfolioData::bundled().unwrap()
    }

    fn session(fail: bool) -> (Arc<FakeModel>, ChatSession) {
        let model = Arc::new(FakeModel { fail, seen: Mutex::new(Vec::new()) });
        let session = ChatSession::new(model.clone(), &data()).unwrap();
        (model, session)
    }

    #[test]
    fn instruction_embeds_persona_and_data() {
        let d = data();
        let system = system_instruction(&d).unwrap();
        assert!(system.contains("portfolio of Avery Quinn"));
        assert!(system.contains("questions about Avery's portfolio"));
        assert!(system.contains("\"personalInfo\": {"));
        assert!(system.contains(&d.projects[0].title));
    }

    #[test]
    fn greeting_names_owner() {
        assert!(greeting(&data()).starts_with("Hi! I'm Avery's AI assistant."));
    }

    #[tokio::test]
    async fn session_accumulates_history() {
        let (model, mut session) = session(false);
        assert_eq!(session.send("hello").await.unwrap(), "turns=1");
        assert_eq!(session.send("again").await.unwrap(), "turns=3");
        assert_eq!(session.history().len(), 4);
        assert_eq!(*model.seen.lock(), vec![1, 3]);
    }

    #[tokio::test]
    async fn failed_turn_is_rolled_back() {
        let (_model, mut session) = session(true);
        assert!(session.send("hello").await.is_err());
        assert!(session.history().is_empty());
        assert_eq!(session.reply("hello").await, ERROR_REPLY);
        assert!(session.history().is_empty());
    }

    #[test]
    fn transcript_refuses_blank_and_concurrent_sends() {
        let mut t = Transcript::new("hi");
        assert_eq!(t.begin("   "), None);
        assert_eq!(t.begin("What do you do?").as_deref(), Some("What do you do?"));
        assert!(t.is_pending());
        assert_eq!(t.begin("second"), None);

        t.finish("I test things.");
        assert!(!t.is_pending());
        let roles: Vec<_> = t.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, [ChatRole::Model, ChatRole::User, ChatRole::Model]);
    }

    #[test]
    fn transcript_failure_message() {
        let mut t = Transcript::new("hi");
        t.begin("q");
        t.fail();
        assert_eq!(t.messages().last().unwrap().content, UNAVAILABLE_REPLY);
        assert!(!t.is_pending());
    }

    #[test]
    fn request_body_shape() {
        let body = GeminiClient::request_body(
            "sys",
            &[ChatMessage::user("q"), ChatMessage::model("a")],
        );
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "sys");
        assert_eq!(body["contents"][1]["role"], "model");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "q");
    }

    #[test]
    fn config_defaults() {
        let config = AssistantConfig::default().with_model(Some("gemini-pro".into()));
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert!(GeminiClient::from_config(&config).is_none());
    }
}
