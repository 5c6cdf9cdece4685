use crate::config::ChatFailurePolicy;
use crate::errors::FetchResult;
use crate::models::chat::{ChatMessage, FALLBACK_REPLY};
use crate::providers::traits::ChatBackend;

/// A user message that has been appended and posted but not answered yet.
#[derive(Debug)]
#[must_use = "a pending chat message must be completed"]
pub struct PendingMessage {
    text: String,
}

impl PendingMessage {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// State of the overlay chat panel.
///
/// History is append-only. Overlapping sends are allowed and their replies
/// land in arrival order, not send order.
#[derive(Debug)]
pub struct ChatSession {
    open: bool,
    messages: Vec<ChatMessage>,
    draft: String,
    in_flight: usize,
    failure_policy: ChatFailurePolicy,
    clear_on_close: bool,
    last_failure: Option<String>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(ChatFailurePolicy::default(), false)
    }
}

impl ChatSession {
    pub fn new(failure_policy: ChatFailurePolicy, clear_on_close: bool) -> Self {
        Self {
            open: false,
            messages: Vec::new(),
            draft: String::new(),
            in_flight: 0,
            failure_policy,
            clear_on_close,
            last_failure: None,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the panel and drop the unsent draft.
    pub fn close(&mut self) {
        self.open = false;
        self.draft.clear();
        if self.clear_on_close {
            self.messages.clear();
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Send the current draft. See [`ChatSession::begin_send_text`].
    pub fn begin_send(&mut self) -> Option<PendingMessage> {
        let draft = self.draft.clone();
        self.begin_send_text(&draft)
    }

    /// Append `text` as a user message, clear the draft and mark loading.
    ///
    /// Blank input (after trimming) changes nothing and returns `None`.
    pub fn begin_send_text(&mut self, text: &str) -> Option<PendingMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        self.draft.clear();
        self.in_flight += 1;
        Some(PendingMessage {
            text: text.to_string(),
        })
    }

    /// Apply the backend's answer (or failure) for a pending message.
    pub fn complete(&mut self, pending: PendingMessage, result: FetchResult<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(answer) => {
                self.messages.push(ChatMessage::assistant(answer));
                self.last_failure = None;
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    chars = pending.text.chars().count(),
                    policy = ?self.failure_policy,
                    "chat message failed"
                );
                self.last_failure = Some(e.to_string());
                if self.failure_policy == ChatFailurePolicy::AppendFallback {
                    self.messages.push(ChatMessage::assistant(FALLBACK_REPLY));
                }
            }
        }
    }

    /// Send the draft and wait for the reply.
    pub async fn send(&mut self, backend: &dyn ChatBackend) {
        if let Some(pending) = self.begin_send() {
            let result = backend.ask(pending.text()).await;
            self.complete(pending, result);
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Error of the most recent failed send, cleared by the next success.
    /// Not rendered by default.
    #[must_use]
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    #[must_use]
    pub fn failure_policy(&self) -> ChatFailurePolicy {
        self.failure_policy
    }
}
