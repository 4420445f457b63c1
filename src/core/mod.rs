//! Platform-free core: constants, session resolution, state machine, view.

pub mod constants;
pub mod payload;
pub mod session;
pub mod state;
pub mod view;

pub use payload::{AuthorizePayload, Credentials};
pub use session::{resolve_session_id, SessionId};
pub use state::{transition, AppState, Event, Phase};
pub use view::{Action, Panel, View, WalletEntry, WalletListView};
