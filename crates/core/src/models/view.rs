use serde::{Deserialize, Serialize};

use super::chart::ChartRecord;
use super::chat::ChatMessage;
use super::form::FormParameters;

/// Everything a frontend needs to draw one frame of the dashboard.
///
/// The core composes it, the frontend only renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub wallet: WalletView,
    pub chart: ChartPanelView,
    pub form: FormParameters,
    /// Symbols for the symbol dropdown; empty until the options have loaded
    pub symbol_options: Vec<String>,
    pub selected_symbol: String,
    pub submit: SubmitView,
    pub chat: ChatView,
}

/// Header button state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletView {
    NotInstalled,
    Disconnected,
    Connected { label: String },
}

impl WalletView {
    #[must_use]
    pub fn button_text(&self) -> String {
        match self {
            WalletView::NotInstalled => "MetaMask not installed!".to_string(),
            WalletView::Disconnected => "Connect to MetaMask".to_string(),
            WalletView::Connected { label } => format!("Connected: {label}"),
        }
    }
}

/// Left column: chart tabs and the selected chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartPanelView {
    Loading,
    Error(String),
    Empty,
    Tabs {
        tabs: Vec<ChartTab>,
        active: Option<ChartRecord>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartTab {
    pub id: String,
    pub title: String,
    pub active: bool,
}

/// Right column: result of the last form submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitView {
    pub loading: bool,
    pub error: Option<String>,
    /// Response body, pretty-printed with two-space indentation
    pub response_pretty: Option<String>,
}

/// Overlay chat panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatView {
    Closed,
    Open {
        messages: Vec<ChatMessage>,
        draft: String,
        loading: bool,
    },
}
