//! Core types for the assist engine.

pub mod message;

pub use message::{ChatMessage, ChatRole};
