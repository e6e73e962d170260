//! fontpair CLI library.

pub mod cli;
pub mod session;

pub use session::{Command, SessionMode, run_session};
