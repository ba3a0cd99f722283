//! # Ports Layer
//!
//! Trait boundaries between the transition logic and the outside world.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
