//! Conversation module - caller-owned session state.

mod context;

pub use context::SessionContext;
