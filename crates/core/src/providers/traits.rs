use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{FetchResult, WalletError};
use crate::models::chart::ChartQuery;
use crate::models::dropdown::DropdownOptions;
use crate::models::form::FormParameters;
use crate::models::survey::SurveySubmission;

/// Source of the static dropdown options.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait OptionsSource: Send + Sync {
    async fn load_options(&self) -> FetchResult<DropdownOptions>;
}

/// Price chart endpoint.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChartSource: Send + Sync {
    /// Raw response body for a chart query. Decoding happens in the store.
    async fn fetch_chart(&self, query: &ChartQuery) -> FetchResult<String>;
}

/// Chat-completion endpoint.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChatBackend: Send + Sync {
    /// Send one user message and return the assistant's answer text.
    async fn ask(&self, user_input: &str) -> FetchResult<String>;
}

/// Receiver of the submitted parameter form.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SubmitBackend: Send + Sync {
    async fn submit(&self, params: &FormParameters) -> FetchResult<serde_json::Value>;
}

/// Receiver of the investor survey.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SurveyBackend: Send + Sync {
    async fn submit_survey(&self, survey: &SurveySubmission) -> FetchResult<serde_json::Value>;
}

/// A browser-injected wallet (EIP-1193 style).
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait WalletProvider: Send + Sync {
    /// `eth_requestAccounts`: ask the user to expose their accounts.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;
}

/// Capability check for an injected wallet provider.
///
/// Hosts implement this against whatever global they inspect; tests
/// substitute a fixed answer.
pub trait ProviderDetector: Send + Sync {
    fn detect(&self) -> Option<Arc<dyn WalletProvider>>;
}
