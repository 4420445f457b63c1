//! Controller: owns the state, runs the side effects, re-renders.
//!
//! UI events arrive as [`Action`]s. Each one becomes a state-machine
//! [`Event`], the resulting state is stored and projected to a [`View`], and
//! only then does the controller await the wallet or the network. State is
//! never borrowed across an await, so a second click while loading just hits
//! the gate in [`transition`] and is dropped.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error, info, warn};

use crate::config::GateConfig;
use crate::core::constants::messages;
use crate::core::{transition, Action, AppState, AuthorizePayload, Event, Phase, SessionId, View, WalletListView};
use crate::http::{HttpClient, HttpError};
use crate::wallet::{WalletConnector, WalletError, WalletHandle};

/// Failure of one authorize step. `Display` is the text the user sees.
#[derive(Debug, thiserror::Error)]
pub enum AuthorizeError {
    #[error("{}", messages::TERMS_UNAVAILABLE)]
    TermsUnavailable,
    #[error("{}", messages::NO_ADDRESSES)]
    NoAddresses,
    #[error("{0}")]
    Wallet(#[from] WalletError),
    #[error("Backend error: {status} - {body}")]
    Backend { status: u16, body: String },
    #[error("{0}")]
    Http(#[from] HttpError),
}

/// Paints a [`View`]. Must be a pure function of the view it is handed.
pub trait Renderer {
    fn render(&self, view: &View);
}

impl<R: Renderer + ?Sized> Renderer for Rc<R> {
    fn render(&self, view: &View) {
        (**self).render(view)
    }
}

pub struct Controller<C, H, R> {
    connector: C,
    http: H,
    renderer: R,
    config: GateConfig,
    state: RefCell<AppState>,
}

impl<C, H, R> Controller<C, H, R>
where
    C: WalletConnector,
    H: HttpClient,
    R: Renderer,
{
    pub fn new(connector: C, http: H, renderer: R, config: GateConfig, session_id: Option<SessionId>) -> Self {
        Self {
            connector,
            http,
            renderer,
            config,
            state: RefCell::new(AppState::new(session_id)),
        }
    }

    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn view(&self) -> View {
        View::project(&self.state.borrow())
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn render(&self) {
        let view = self.view();
        self.renderer.render(&view);
    }

    /// First render. Returns the wallet picker, or `None` in the fatal state,
    /// in which case the connector is never asked for wallets.
    pub fn initialize(&self) -> Option<WalletListView> {
        self.render();
        if self.state.borrow().phase == Phase::Fatal {
            error!("no session id in page URL");
            return None;
        }
        let wallets = self.connector.list_wallets();
        info!(count = wallets.len(), "wallet extensions detected");
        Some(WalletListView::project(&wallets))
    }

    pub async fn dispatch(&self, action: Action) {
        match action {
            Action::Connect(name) => self.connect(&name).await,
            Action::Authorize => self.authorize().await,
        }
    }

    pub async fn connect(&self, name: &str) {
        if !self.begin(Event::ConnectRequested, Phase::Connecting) {
            debug!(wallet = name, "connect ignored");
            return;
        }

        match self.connector.connect(name).await {
            Ok(wallet) => {
                info!(wallet = wallet.name(), "wallet connected");
                self.apply(Event::ConnectSucceeded(wallet));
            }
            Err(e) => {
                warn!(wallet = name, error = %e, "connection failed");
                self.apply(Event::ConnectFailed);
            }
        }
    }

    pub async fn authorize(&self) {
        if !self.begin(Event::AuthorizeRequested, Phase::Authorizing) {
            debug!("authorize ignored");
            return;
        }

        let (wallet, session) = {
            let state = self.state.borrow();
            (state.wallet.clone(), state.session_id.clone())
        };
        let (Some(wallet), Some(session)) = (wallet, session) else {
            self.apply(Event::AuthorizeFailed(messages::PRECONDITION.to_string()));
            return;
        };

        match self.run_authorize(wallet.as_ref(), &session).await {
            Ok(()) => {
                info!(session = %session, "authorization relayed");
                self.apply(Event::AuthorizeSucceeded);
            }
            Err(e) => {
                warn!(error = %e, "authorization failed");
                self.apply(Event::AuthorizeFailed(e.to_string()));
            }
        }
    }

    /// Terms -> first address -> signature -> relay. Any step error ends it.
    async fn run_authorize(&self, wallet: &dyn WalletHandle, session: &SessionId) -> Result<(), AuthorizeError> {
        let terms = self.http.get_text(&self.config.terms_url).await?;
        if !terms.is_success() {
            return Err(AuthorizeError::TermsUnavailable);
        }

        // Always the first address the wallet reports.
        let address = wallet
            .used_addresses()
            .await?
            .into_iter()
            .next()
            .ok_or(AuthorizeError::NoAddresses)?;

        let signed = wallet.sign_data(&address, &hex::encode(terms.body.as_bytes())).await?;

        let payload = AuthorizePayload::new(session, address, signed);
        let body = serde_json::to_value(&payload).map_err(HttpError::from)?;
        debug!(payload = %body, "relaying credentials");

        let relay = self.http.post_json(&self.config.backend_url, &body).await?;
        if !relay.is_success() {
            return Err(AuthorizeError::Backend { status: relay.status, body: relay.body });
        }
        Ok(())
    }

    /// Feed a request event; true if it actually moved the machine to `target`.
    fn begin(&self, event: Event, target: Phase) -> bool {
        let before = self.state.borrow().phase;
        let after = self.apply(event).phase;
        before != target && after == target
    }

    fn apply(&self, event: Event) -> AppState {
        let next = transition(&self.state.borrow(), event);
        *self.state.borrow_mut() = next.clone();
        self.render();
        next
    }
}
