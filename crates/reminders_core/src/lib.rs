//! Reminder list state and the self-dismissing ticker, driven by one
//! cooperative event loop.

pub mod draft;
pub mod error;
pub mod session;
pub mod store;
pub mod ticker;

pub use draft::AddReminderDraft;
pub use error::SessionError;
pub use session::{ReminderSession, SessionHandle};
pub use store::ReminderStore;
pub use ticker::{Generation, TickerController, TickerState, TICKER_DISPLAY_DURATION};
