//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod ledger;
pub mod script;

pub use ledger::*;
pub use script::*;
