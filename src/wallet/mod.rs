//! Wallet module - browser wallet capabilities behind traits
//!
//! The controller never talks to an extension directly. It sees two seams:
//!
//! ```text
//! WalletConnector            (enumerate + connect)
//!     │
//!     └── connect(name) ──▶ WalletHandle   (used_addresses + sign_data)
//! ```
//!
//! The browser build implements both over CIP-30 (`window.cardano`); tests
//! substitute in-memory fakes.

pub mod address;

use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A wallet extension detected in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub name: String,
    pub icon: String,
}

impl WalletInfo {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self { name: name.into(), icon: icon.into() }
    }
}

/// Result of a CIP-30 `signData` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSignature {
    pub key: String,
    pub signature: String,
}

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("wallet not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Rejected(String),
    #[error("wallet api: {0}")]
    Api(String),
}

pub type WalletResult<T> = Result<T, WalletError>;

/// Connected wallet: address listing and message signing.
#[async_trait(?Send)]
pub trait WalletHandle {
    fn name(&self) -> &str;

    /// Addresses controlled by the wallet, in the wallet's own order.
    async fn used_addresses(&self) -> WalletResult<Vec<String>>;

    /// Sign hex-encoded data with `address`. Suspends until the user decides.
    async fn sign_data(&self, address: &str, hex_message: &str) -> WalletResult<DataSignature>;
}

/// Enumerates installed extensions and connects to one by name.
#[async_trait(?Send)]
pub trait WalletConnector {
    fn list_wallets(&self) -> Vec<WalletInfo>;

    async fn connect(&self, name: &str) -> WalletResult<Rc<dyn WalletHandle>>;
}
