//! Q-learning Rock-Paper-Scissors toolkit.
//!
//! This facade crate re-exports the workspace members for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, and shared traits
//! - [`qlearn`] — The learning agent: state encoding, Q-table, policy,
//!   one-step backup, and the per-round protocol

pub use rsb_core as core;
pub use rsb_qlearn as qlearn;

// Re-export commonly used types at the root
pub use rsb_core::*;
pub use rsb_qlearn::*;
