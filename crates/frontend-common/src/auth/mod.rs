//! Authentication module

pub mod session;

pub use session::{check_session, logout, SessionStatus};
