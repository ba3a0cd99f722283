//! # state-transition
//!
//! Deterministic state-transition engine for an account-based ledger.
//!
//! Given a transaction, a block context, and access to the account store,
//! the engine validates the transaction (nonce, gas funds, value funds),
//! charges intrinsic gas, transfers value, dispatches contract creation to
//! a pluggable script engine, and commits the touched accounts. The same
//! inputs always produce the same resulting ledger state.
//!
//! ## Architecture
//!
//! Hexagonal: pure domain logic in [`domain`], trait boundaries in
//! [`ports`], swappable implementations in [`adapters`], and the
//! orchestrating [`service`] on top.
//!
//! ## Example
//!
//! ```
//! use state_transition::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), TransitionError> {
//! let service = create_test_service();
//! let sender = Address::new([1u8; 20]);
//! service
//!     .ledger()
//!     .set_balance(sender, U256::from(100))?;
//!
//! let tx = Transaction {
//!     sender,
//!     recipient: Some(Address::new([2u8; 20])),
//!     value: U256::from(10),
//!     nonce: 0,
//!     ..Transaction::default()
//! };
//! let created = service.apply(&tx, &BlockContext::default()).await?;
//! assert!(created.is_none());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryLedger, PassthroughEngine, RejectingEngine};
pub use domain::{
    Account, Address, BlockContext, Bytes, GasMeter, GasSchedule, Hash, Transaction, U256,
};
pub use errors::{LedgerError, ScriptError, TransitionError};
pub use ports::{LedgerStore, ScriptEngine, StateTransitionApi, TransitionReceipt};
pub use service::{create_test_service, ServiceConfig, ServiceStats, TransitionService};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::adapters::{InMemoryLedger, PassthroughEngine, RejectingEngine};
    pub use crate::domain::{
        Account, Address, BlockContext, Bytes, GasMeter, GasSchedule, Hash, Transaction, U256,
    };
    pub use crate::errors::{LedgerError, ScriptError, TransitionError};
    pub use crate::ports::{LedgerStore, ScriptEngine, StateTransitionApi, TransitionReceipt};
    pub use crate::service::{create_test_service, ServiceConfig, ServiceStats, TransitionService};
}

/// Crate version, from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
