use serde::{Deserialize, Serialize};

/// Static option lists served from `/data/dropdown-data.json`.
///
/// `dropdown1` holds the selectable symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOptions {
    #[serde(default)]
    pub dropdown1: Vec<String>,
    #[serde(default)]
    pub dropdown2: Vec<String>,
}

impl DropdownOptions {
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.dropdown1
    }

    #[must_use]
    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.dropdown1.iter().any(|s| s == symbol)
    }
}
