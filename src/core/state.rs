//! Authorization state machine
//!
//! ```text
//!            connect            ok             authorize           ok
//! Disconnected ──▶ Connecting ──▶ Connected ──▶ Authorizing ──▶ Success
//!      ▲               │              ▲               │
//!      └──── failed ───┘              └──── failed ───┘
//! ```
//!
//! `Fatal` is entered at startup when the page has no session id and absorbs
//! every event. `Success` is terminal. Transitions are pure: the controller
//! feeds an [`Event`] and stores the returned state.

use std::fmt;
use std::rc::Rc;

use super::constants::messages;
use super::session::SessionId;
use crate::wallet::WalletHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Fatal,
    Disconnected,
    Connecting,
    Connected,
    Authorizing,
    Success,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Fatal => "fatal",
            Phase::Disconnected => "disconnected",
            Phase::Connecting => "connecting",
            Phase::Connected => "connected",
            Phase::Authorizing => "authorizing",
            Phase::Success => "success",
        }
    }
}

/// What happened. Requests come from the UI, outcomes from the controller.
#[derive(Clone)]
pub enum Event {
    ConnectRequested,
    ConnectSucceeded(Rc<dyn WalletHandle>),
    ConnectFailed,
    AuthorizeRequested,
    AuthorizeSucceeded,
    AuthorizeFailed(String),
}

impl Event {
    fn is_request(&self) -> bool {
        matches!(self, Event::ConnectRequested | Event::AuthorizeRequested)
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::ConnectRequested => f.write_str("ConnectRequested"),
            Event::ConnectSucceeded(w) => write!(f, "ConnectSucceeded({})", w.name()),
            Event::ConnectFailed => f.write_str("ConnectFailed"),
            Event::AuthorizeRequested => f.write_str("AuthorizeRequested"),
            Event::AuthorizeSucceeded => f.write_str("AuthorizeSucceeded"),
            Event::AuthorizeFailed(msg) => write!(f, "AuthorizeFailed({msg:?})"),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub phase: Phase,
    pub wallet: Option<Rc<dyn WalletHandle>>,
    pub session_id: Option<SessionId>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AppState {
    /// Initial state for a page. No session id means the fatal state.
    pub fn new(session_id: Option<SessionId>) -> Self {
        match session_id {
            Some(id) => Self {
                phase: Phase::Disconnected,
                wallet: None,
                session_id: Some(id),
                is_loading: false,
                error: None,
            },
            None => Self {
                phase: Phase::Fatal,
                wallet: None,
                session_id: None,
                is_loading: false,
                error: Some(messages::FATAL_NO_SESSION.to_string()),
            },
        }
    }

    pub fn wallet_name(&self) -> Option<&str> {
        self.wallet.as_deref().map(|w| w.name())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Fatal | Phase::Success)
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("phase", &self.phase)
            .field("wallet", &self.wallet_name())
            .field("session_id", &self.session_id)
            .field("is_loading", &self.is_loading)
            .field("error", &self.error)
            .finish()
    }
}

/// Apply `event` to `state`. Events that make no sense in the current phase
/// leave the state untouched.
pub fn transition(state: &AppState, event: Event) -> AppState {
    if state.is_terminal() || (state.is_loading && event.is_request()) {
        return state.clone();
    }

    let mut next = state.clone();
    match (state.phase, event) {
        (Phase::Disconnected, Event::ConnectRequested) => {
            next.phase = Phase::Connecting;
            next.is_loading = true;
            next.error = None;
        }
        (Phase::Connecting, Event::ConnectSucceeded(wallet)) => {
            next.phase = Phase::Connected;
            next.wallet = Some(wallet);
            next.is_loading = false;
            next.error = None;
        }
        (Phase::Connecting, Event::ConnectFailed) => {
            next.phase = Phase::Disconnected;
            next.is_loading = false;
            next.error = Some(messages::CONNECT_FAILED.to_string());
        }
        (Phase::Disconnected | Phase::Connected, Event::AuthorizeRequested) => {
            if state.wallet.is_some() && state.session_id.is_some() {
                next.phase = Phase::Authorizing;
                next.is_loading = true;
                next.error = None;
            } else {
                next.error = Some(messages::PRECONDITION.to_string());
            }
        }
        (Phase::Authorizing, Event::AuthorizeSucceeded) => {
            next.phase = Phase::Success;
            next.is_loading = false;
            next.error = None;
        }
        (Phase::Authorizing, Event::AuthorizeFailed(message)) => {
            next.phase = Phase::Connected;
            next.is_loading = false;
            next.error = Some(if message.is_empty() {
                messages::SIGNING_FALLBACK.to_string()
            } else {
                message
            });
        }
        _ => {}
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::{DataSignature, WalletResult};
    use async_trait::async_trait;

    struct Dummy;

    #[async_trait(?Send)]
    impl WalletHandle for Dummy {
        fn name(&self) -> &str { "nami" }
        async fn used_addresses(&self) -> WalletResult<Vec<String>> { Ok(vec![]) }
        async fn sign_data(&self, _: &str, _: &str) -> WalletResult<DataSignature> {
            Ok(DataSignature { key: String::new(), signature: String::new() })
        }
    }

    fn ready() -> AppState {
        AppState::new(SessionId::new("s1"))
    }

    fn connected() -> AppState {
        let s = transition(&ready(), Event::ConnectRequested);
        transition(&s, Event::ConnectSucceeded(Rc::new(Dummy)))
    }

    #[test]
    fn missing_session_is_fatal_and_absorbing() {
        let fatal = AppState::new(None);
        assert_eq!(fatal.phase, Phase::Fatal);
        assert_eq!(fatal.error.as_deref(), Some(messages::FATAL_NO_SESSION));

        let after = transition(&fatal, Event::ConnectRequested);
        assert_eq!(after.phase, Phase::Fatal);
        assert!(!after.is_loading);
    }

    #[test]
    fn connect_sets_loading_and_clears_error() {
        let mut s = ready();
        s.error = Some("old".into());
        let s = transition(&s, Event::ConnectRequested);
        assert_eq!(s.phase, Phase::Connecting);
        assert!(s.is_loading);
        assert!(s.error.is_none());
    }

    #[test]
    fn connect_failure_returns_to_disconnected() {
        let s = transition(&ready(), Event::ConnectRequested);
        let s = transition(&s, Event::ConnectFailed);
        assert_eq!(s.phase, Phase::Disconnected);
        assert!(s.wallet.is_none());
        assert!(!s.is_loading);
        assert_eq!(s.error.as_deref(), Some(messages::CONNECT_FAILED));
    }

    #[test]
    fn requests_while_loading_are_ignored() {
        let s = transition(&ready(), Event::ConnectRequested);
        let again = transition(&s, Event::AuthorizeRequested);
        assert_eq!(again.phase, Phase::Connecting);
        assert!(again.error.is_none());
    }

    #[test]
    fn wallet_is_never_reassigned() {
        let s = connected();
        let s = transition(&s, Event::ConnectRequested);
        assert_eq!(s.phase, Phase::Connected);
        assert!(!s.is_loading);
        assert_eq!(s.wallet_name(), Some("nami"));
    }

    #[test]
    fn authorize_without_wallet_is_a_precondition_error() {
        let s = transition(&ready(), Event::AuthorizeRequested);
        assert_eq!(s.phase, Phase::Disconnected);
        assert!(!s.is_loading);
        assert_eq!(s.error.as_deref(), Some(messages::PRECONDITION));
    }

    #[test]
    fn authorize_failure_keeps_wallet() {
        let s = transition(&connected(), Event::AuthorizeRequested);
        assert_eq!(s.phase, Phase::Authorizing);
        let s = transition(&s, Event::AuthorizeFailed("boom".into()));
        assert_eq!(s.phase, Phase::Connected);
        assert_eq!(s.wallet_name(), Some("nami"));
        assert_eq!(s.error.as_deref(), Some("boom"));
    }

    #[test]
    fn empty_failure_message_uses_fallback() {
        let s = transition(&connected(), Event::AuthorizeRequested);
        let s = transition(&s, Event::AuthorizeFailed(String::new()));
        assert_eq!(s.error.as_deref(), Some(messages::SIGNING_FALLBACK));
    }

    #[test]
    fn success_is_terminal() {
        let s = transition(&connected(), Event::AuthorizeRequested);
        let s = transition(&s, Event::AuthorizeSucceeded);
        assert_eq!(s.phase, Phase::Success);
        assert!(s.error.is_none());

        let s = transition(&s, Event::AuthorizeRequested);
        assert_eq!(s.phase, Phase::Success);
        assert!(!s.is_loading);
    }
}
