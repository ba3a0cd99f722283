//! # Error Types
//!
//! Typed failures for the state-transition engine.
//!
//! Every failure here is fatal to the single transaction it occurred in but
//! non-fatal to the engine: `apply` returns them as values and the caller
//! decides what to do with the rejected transaction. The engine never
//! retries internally.

use crate::domain::value_objects::{Address, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// TRANSITION ERRORS
// =============================================================================

/// Errors that abort a single state transition.
///
/// The atomicity contract: none of these leave a partially applied
/// transition in the ledger store, with one documented exception: the
/// block proposer's fee credit is written through during gas purchase, so
/// `OutOfGas`, `InsufficientValueFunds`, `ContractCreationFailed` and
/// `InitializationFailed` surface with the fee already paid.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionError {
    /// Transaction nonce disagrees with the sender's current nonce.
    #[error("nonce mismatch: expected {expected}, got {got}")]
    NonceMismatch {
        /// The sender account's current nonce.
        expected: u64,
        /// The nonce carried by the transaction.
        got: u64,
    },

    /// Sender cannot cover `gas_limit * gas_price`. Fully atomic: this
    /// check precedes the proposer-credit write-through.
    #[error("insufficient funds to purchase gas: required {required}, available {available}")]
    InsufficientGasFunds {
        /// The full gas purchase amount.
        required: U256,
        /// The sender's balance at the time of the check.
        available: U256,
    },

    /// Cumulative gas consumption exceeded the purchased gas.
    #[error("out of gas: needed {needed}, remaining {remaining}")]
    OutOfGas {
        /// Gas the failing charge asked for.
        needed: u64,
        /// Gas left in the meter (unchanged by the failing charge).
        remaining: u64,
    },

    /// Sender cannot cover the transferred value.
    #[error("insufficient funds to transfer value: required {required}, available {available}")]
    InsufficientValueFunds {
        /// The transaction value.
        required: U256,
        /// The sender's balance after the gas purchase.
        available: U256,
    },

    /// The deterministic creation address is already occupied, or the
    /// store rejected the new account.
    #[error("contract creation failed at {address}: {reason}")]
    ContractCreationFailed {
        /// The creation address derived from (sender, nonce).
        address: Address,
        /// Why instantiation was rejected.
        reason: String,
    },

    /// The script engine reported failure running initialization code.
    #[error("initialization code failed: {0}")]
    InitializationFailed(String),

    /// Catch-all for unexpected internal faults (backend errors,
    /// arithmetic overflow, malformed state). Converted at the `apply`
    /// boundary; nothing new is committed on this path.
    #[error("transition aborted: {0}")]
    Aborted(String),
}

impl From<LedgerError> for TransitionError {
    fn from(err: LedgerError) -> Self {
        Self::Aborted(err.to_string())
    }
}

// =============================================================================
// LEDGER STORE ERRORS
// =============================================================================

/// Backend faults from the ledger store.
///
/// Absence of an account is NOT an error; `LedgerStore::get` materializes
/// a zero-valued account for unknown addresses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The backing store detected corruption.
    #[error("ledger store corruption detected")]
    Corrupted,

    /// The backing store is unreachable or poisoned.
    #[error("ledger store unavailable")]
    Unavailable,

    /// Other backend fault.
    #[error("ledger store error: {0}")]
    Other(String),
}

// =============================================================================
// SCRIPT ENGINE ERRORS
// =============================================================================

/// Failures reported by the script execution engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Initialization code exhausted its gas budget.
    #[error("out of gas")]
    OutOfGas,

    /// Initialization code reverted.
    #[error("initialization reverted: {0}")]
    Reverted(String),

    /// Internal engine fault.
    #[error("script engine fault: {0}")]
    Internal(String),
}

// =============================================================================
// TESTS
// =============================================================================
