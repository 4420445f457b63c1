//! Endpoint, message and DOM constants
//!
//! Centralized registry for every literal the flow shows or calls.

/// Remote endpoints
pub mod endpoints {
    pub const TERMS_URL: &str = "https://scavenger.prod.gd.midnighttge.io/TandC";

    /// Fallback used when no backend URL was compiled in or configured.
    pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8001/api/v1/authorize";

    /// Backend URL baked in at build time, if `WALLETGATE_BACKEND_URL` was set.
    pub const BUILD_BACKEND_URL: Option<&str> = option_env!("WALLETGATE_BACKEND_URL");

    pub const SESSION_PARAM: &str = "session_id";
}

/// User-facing messages
pub mod messages {
    pub const FATAL_NO_SESSION: &str = "CRITICAL ERROR: No 'session_id' found in URL.";
    pub const CONNECT_FAILED: &str = "Wallet connection was cancelled or failed.";
    pub const PRECONDITION: &str = "Wallet not connected or Session ID is missing.";
    pub const TERMS_UNAVAILABLE: &str = "Could not fetch Terms & Conditions.";
    pub const NO_ADDRESSES: &str = "No addresses found in the wallet.";
    pub const SIGNING_FALLBACK: &str = "Signing was cancelled or an error occurred.";
    pub const NO_WALLETS: &str =
        "No Cardano wallet extensions found. Please install one and refresh the page.";
}

/// Element ids of the hosting page
pub mod dom {
    pub const CONNECT_VIEW: &str = "connect-view";
    pub const AUTHORIZE_VIEW: &str = "authorize-view";
    pub const FINAL_VIEW: &str = "final-view";
    pub const WALLET_LIST: &str = "wallet-list";
    pub const AUTHORIZE_BTN: &str = "authorize-btn";
    pub const LOADER: &str = "loader";
    pub const STATUS_MESSAGE: &str = "status-message";
    pub const CONNECTED_WALLET_INFO: &str = "connected-wallet-info";

    pub const HIDDEN_CLASS: &str = "hidden";
    pub const STATUS_CLASS: &str = "status-message";
    pub const ERROR_CLASS: &str = "error";
}
