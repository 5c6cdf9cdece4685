use serde::{Deserialize, Serialize};

/// An account address handed out by a wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAccount(pub String);

impl WalletAccount {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.0
    }

    /// Truncated form for the connect button: first 6 characters, `...`,
    /// then everything from character 38 on (the last 4 of a 42-char address).
    #[must_use]
    pub fn short_label(&self) -> String {
        let head: String = self.0.chars().take(6).collect();
        let tail: String = self.0.chars().skip(38).collect();
        format!("{head}...{tail}")
    }
}

impl std::fmt::Display for WalletAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
