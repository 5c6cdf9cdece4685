use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::form::{is_digits_only, Period};

/// What the chat widget does when the chat backend fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatFailurePolicy {
    /// History is left untouched; the user sees no reply.
    #[default]
    Silent,
    /// A canned assistant reply is appended.
    AppendFallback,
}

/// Geometry of the survey popup window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyWindow {
    pub route: String,
    pub width: u32,
    pub height: u32,
}

impl Default for SurveyWindow {
    fn default() -> Self {
        Self {
            route: "/survey".to_string(),
            width: 600,
            height: 800,
        }
    }
}

impl SurveyWindow {
    /// Feature string for `window.open`.
    #[must_use]
    pub fn features(&self) -> String {
        format!("width={},height={},noopener,noreferrer", self.width, self.height)
    }
}

/// Dashboard configuration: every endpoint and tunable in one place.
///
/// Fields missing from a JSON config fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Base URL of the price/chat/survey service.
    pub backend_url: String,

    /// Location of the static dropdown options file.
    pub dropdown_data_url: String,

    /// Endpoint receiving the submitted form parameters.
    pub submit_url: String,

    /// Per-request timeout. `None` leaves requests unbounded.
    pub request_timeout_secs: Option<u64>,

    pub chat_failure_policy: ChatFailurePolicy,

    /// Drop the chat history when the panel is closed.
    pub clear_chat_on_close: bool,

    pub default_symbol: String,
    pub default_chart_period: Period,
    pub default_chart_limit: String,

    pub survey_window: SurveyWindow,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8000".to_string(),
            dropdown_data_url: "http://localhost:5173/data/dropdown-data.json".to_string(),
            submit_url: "http://localhost:5173/api/submit".to_string(),
            request_timeout_secs: None,
            chat_failure_policy: ChatFailurePolicy::Silent,
            clear_chat_on_close: false,
            default_symbol: "ETH".to_string(),
            default_chart_period: Period::Day,
            default_chart_limit: "100".to_string(),
            survey_window: SurveyWindow::default(),
        }
    }
}

impl DashboardSettings {
    /// Parse and validate settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let settings: DashboardSettings = serde_json::from_str(json)
            .map_err(|e| CoreError::Config(format!("Failed to parse settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Load settings from a JSON file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Write settings as pretty JSON (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&self, path: &str) -> Result<(), CoreError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, url) in [
            ("backend_url", &self.backend_url),
            ("dropdown_data_url", &self.dropdown_data_url),
            ("submit_url", &self.submit_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(CoreError::Config(format!(
                    "{name} must be an absolute http(s) URL, got '{url}'"
                )));
            }
        }
        if self.request_timeout_secs == Some(0) {
            return Err(CoreError::Config(
                "request_timeout_secs must be positive when set".into(),
            ));
        }
        if !is_digits_only(&self.default_chart_limit) {
            return Err(CoreError::Config(format!(
                "default_chart_limit must contain only digits, got '{}'",
                self.default_chart_limit
            )));
        }
        if self.default_symbol.trim().is_empty() {
            return Err(CoreError::Config("default_symbol must not be empty".into()));
        }
        Ok(())
    }

    /// `backend_url` joined with an endpoint path.
    #[must_use]
    pub fn backend_endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.backend_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
