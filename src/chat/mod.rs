//! Live chat session against the assistant backend.

pub mod session;

pub use session::{ChatSession, SessionSnapshot, GREETING};
