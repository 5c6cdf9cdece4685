use std::sync::Arc;

use super::traits::{ProviderDetector, WalletProvider};

/// Detector for hosts without any wallet integration.
pub struct NoWalletDetector;

impl ProviderDetector for NoWalletDetector {
    fn detect(&self) -> Option<Arc<dyn WalletProvider>> {
        None
    }
}

/// Detector whose answer was resolved up-front by the host.
pub struct StaticDetector {
    provider: Option<Arc<dyn WalletProvider>>,
}

impl StaticDetector {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self { provider }
    }

    pub fn installed(provider: Arc<dyn WalletProvider>) -> Self {
        Self::new(Some(provider))
    }
}

impl ProviderDetector for StaticDetector {
    fn detect(&self) -> Option<Arc<dyn WalletProvider>> {
        self.provider.clone()
    }
}
