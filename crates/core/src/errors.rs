use thiserror::Error;

/// Outcome of a single call across the network boundary.
///
/// Every remote response is decoded once, at the edge, into either a typed
/// payload or one of these variants. Stores never see raw transport errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}, message: {message}")]
    Http { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    /// The backend answered with a success status but reported an error in the body.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Shorthand for results produced by providers.
pub type FetchResult<T> = Result<T, FetchError>;

impl FetchError {
    /// True for failures where the request never produced a response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Network(_))
    }

    /// HTTP status code, if the failure carried one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return FetchError::Decode(redact_query(&e.to_string()));
        }
        if let Some(status) = e.status() {
            return FetchError::Http {
                status: status.as_u16(),
                message: redact_query(&e.to_string()),
            };
        }
        FetchError::Network(redact_query(&e.to_string()))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Strip query parameters from URLs embedded in an error message.
/// Chat requests carry the user's text in the query string.
fn redact_query(msg: &str) -> String {
    match msg.find('?') {
        Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
        None => msg.to_string(),
    }
}

/// Failures reported by a browser-injected wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("No wallet provider installed")]
    NoProvider,

    #[error("Wallet request rejected: {0}")]
    Rejected(String),

    #[error("Wallet provider error: {0}")]
    Provider(String),

    #[error("Wallet returned no accounts")]
    NoAccounts,
}

/// Unified error type for the dashboard core.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input ───────────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Chart not found: {0}")]
    ChartNotFound(String),

    // ── Configuration / File ────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Remote ──────────────────────────────────────────────────────
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Wallet(#[from] WalletError),
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
