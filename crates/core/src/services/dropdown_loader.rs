use crate::models::dropdown::DropdownOptions;
use crate::providers::traits::OptionsSource;

/// Lifecycle of the one-shot options load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(DropdownOptions),
    /// Load failed; logged, never surfaced to the user.
    Failed,
}

/// Loads the static dropdown options once at startup.
#[derive(Debug, Default)]
pub struct DropdownLoader {
    state: LoadState,
    attempted: bool,
}

impl DropdownLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the options. Only the first call does anything; a failure is
    /// logged and leaves the options absent. Never returns an error.
    pub async fn load(&mut self, source: &dyn OptionsSource) {
        if self.attempted {
            return;
        }
        self.attempted = true;

        match source.load_options().await {
            Ok(options) => {
                tracing::info!(symbols = options.dropdown1.len(), "dropdown options loaded");
                self.state = LoadState::Loaded(options);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load dropdown options");
                self.state = LoadState::Failed;
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> Option<&DropdownOptions> {
        match &self.state {
            LoadState::Loaded(options) => Some(options),
            _ => None,
        }
    }
}
