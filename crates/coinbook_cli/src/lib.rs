//! Console front end for the coin store.

pub mod menu;
pub mod session;

pub use menu::Selection;
pub use session::{run_session, ExitReason, InputError};
