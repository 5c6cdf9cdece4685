use std::sync::Arc;

use crate::errors::WalletError;
use crate::models::view::WalletView;
use crate::models::wallet::WalletAccount;
use crate::providers::traits::{ProviderDetector, WalletProvider};

/// Connects to an injected wallet and remembers the first account.
///
/// Failures are logged and otherwise ignored: the button simply stays in
/// its "connect" state.
#[derive(Default)]
pub struct WalletConnector {
    provider: Option<Arc<dyn WalletProvider>>,
    account: Option<WalletAccount>,
}

impl std::fmt::Debug for WalletConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConnector")
            .field("installed", &self.provider.is_some())
            .field("account", &self.account)
            .finish()
    }
}

impl WalletConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whether a provider is present.
    pub fn mount(&mut self, detector: &dyn ProviderDetector) {
        self.provider = detector.detect();
        tracing::debug!(installed = self.provider.is_some(), "wallet provider detection");
    }

    /// Request account access. Errors are swallowed after logging.
    pub async fn connect(&mut self) {
        if let Err(e) = self.try_connect().await {
            tracing::warn!(error = %e, "wallet connection failed");
        }
    }

    /// Same as [`WalletConnector::connect`] but reports the failure.
    pub async fn try_connect(&mut self) -> Result<&WalletAccount, WalletError> {
        let provider = self.provider.as_ref().ok_or(WalletError::NoProvider)?;
        let accounts = provider.request_accounts().await?;
        let first = accounts.into_iter().next().ok_or(WalletError::NoAccounts)?;
        tracing::info!(account = %first, "wallet connected");
        Ok(self.account.insert(WalletAccount::new(first)))
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.provider.is_some()
    }

    #[must_use]
    pub fn account(&self) -> Option<&WalletAccount> {
        self.account.as_ref()
    }

    #[must_use]
    pub fn view(&self) -> WalletView {
        match (&self.provider, &self.account) {
            (None, _) => WalletView::NotInstalled,
            (Some(_), None) => WalletView::Disconnected,
            (Some(_), Some(account)) => WalletView::Connected {
                label: account.short_label(),
            },
        }
    }
}
