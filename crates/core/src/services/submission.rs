use crate::errors::FetchResult;
use crate::models::form::FormParameters;
use crate::models::view::SubmitView;
use crate::providers::traits::SubmitBackend;

/// Message shown for any failed submit, whatever the cause.
pub const SUBMIT_ERROR_MESSAGE: &str = "Failed to fetch data from API.";

/// Result pane of the parameter form.
#[derive(Debug, Default)]
pub struct Submission {
    loading: bool,
    error: Option<String>,
    response: Option<serde_json::Value>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store the response, or the generic error. A failure keeps the
    /// previous response on screen.
    pub fn complete(&mut self, result: FetchResult<serde_json::Value>) {
        self.loading = false;
        match result {
            Ok(value) => {
                self.response = Some(value);
            }
            Err(e) => {
                tracing::warn!(error = %e, "form submit failed");
                self.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
            }
        }
    }

    pub async fn submit(&mut self, backend: &dyn SubmitBackend, params: &FormParameters) {
        self.begin();
        let result = backend.submit(params).await;
        self.complete(result);
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn response(&self) -> Option<&serde_json::Value> {
        self.response.as_ref()
    }

    /// Response as two-space indented JSON.
    #[must_use]
    pub fn response_pretty(&self) -> Option<String> {
        self.response
            .as_ref()
            .and_then(|v| serde_json::to_string_pretty(v).ok())
    }

    #[must_use]
    pub fn view(&self) -> SubmitView {
        SubmitView {
            loading: self.loading,
            error: self.error.clone(),
            response_pretty: self.response_pretty(),
        }
    }
}
