//! Pure projection from [`AppState`] to what the page shows.
//!
//! Renderers (DOM, test recorders) only ever consume a [`View`]; projecting
//! the same state twice yields the same view.

use super::constants::messages;
use super::state::{AppState, Phase};
use crate::wallet::WalletInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Connect,
    Authorize,
    Final,
}

/// UI-triggered action, dispatched through the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Connect(String),
    Authorize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub loader_visible: bool,
    pub authorize_disabled: bool,
    pub status_text: String,
    pub status_is_error: bool,
    /// `None` in the fatal state: only the status line is shown.
    pub panel: Option<Panel>,
    pub wallet_caption: Option<String>,
}

impl View {
    pub fn project(state: &AppState) -> Self {
        let panel = match state.phase {
            Phase::Fatal => None,
            Phase::Success => Some(Panel::Final),
            _ if state.wallet.is_some() => Some(Panel::Authorize),
            _ => Some(Panel::Connect),
        };

        let wallet_caption = match panel {
            Some(Panel::Authorize) => state.wallet_name().map(|name| {
                format!("Connected with {name}. Click below to sign the session message.")
            }),
            _ => None,
        };

        Self {
            loader_visible: state.is_loading,
            authorize_disabled: state.is_loading,
            status_text: state.error.clone().unwrap_or_default(),
            status_is_error: state.error.is_some(),
            panel,
            wallet_caption,
        }
    }

    pub fn shows(&self, panel: Panel) -> bool {
        self.panel == Some(panel)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletEntry {
    pub name: String,
    pub icon: String,
    pub action: Action,
}

/// Contents of the wallet picker in the connect panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletListView {
    Empty { message: String },
    Entries(Vec<WalletEntry>),
}

impl WalletListView {
    pub fn project(wallets: &[WalletInfo]) -> Self {
        if wallets.is_empty() {
            return Self::Empty { message: messages::NO_WALLETS.to_string() };
        }
        Self::Entries(
            wallets
                .iter()
                .map(|w| WalletEntry {
                    name: w.name.clone(),
                    icon: w.icon.clone(),
                    action: Action::Connect(w.name.clone()),
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[WalletEntry] {
        match self {
            Self::Empty { .. } => &[],
            Self::Entries(entries) => entries,
        }
    }
}
