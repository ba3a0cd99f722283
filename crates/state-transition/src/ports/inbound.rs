//! # Inbound Ports
//!
//! The API surface callers drive this engine through, plus the per-batch
//! receipt type.

use crate::domain::{Address, BlockContext, Transaction};
use crate::errors::TransitionError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// =============================================================================
// TRANSITION RECEIPT
// =============================================================================

/// Outcome of one transaction within a batch.
///
/// A failed transition is a normal per-transaction result: the block
/// pipeline records it and moves on to the next transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionReceipt {
    /// Success, or the precise rule the transaction violated.
    pub outcome: Result<(), TransitionError>,
    /// Address of the contract account created, when the transaction was
    /// a successful contract creation.
    pub contract_address: Option<Address>,
}

impl TransitionReceipt {
    /// Receipt for a transition that completed and committed.
    #[must_use]
    pub fn success(contract_address: Option<Address>) -> Self {
        Self {
            outcome: Ok(()),
            contract_address,
        }
    }

    /// Receipt for a rejected transition. No state was committed.
    #[must_use]
    pub fn failure(error: TransitionError) -> Self {
        Self {
            outcome: Err(error),
            contract_address: None,
        }
    }

    /// Returns true if the transition committed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

// =============================================================================
// STATE TRANSITION API
// =============================================================================

/// Primary inbound port of the engine.
#[async_trait]
pub trait StateTransitionApi: Send + Sync {
    /// Applies one transaction against the ledger under `block`.
    ///
    /// `Ok` carries the created contract address for creation
    /// transactions and `None` otherwise. Every failure, whether a
    /// violated validation rule or a backend fault, arrives as the
    /// typed [`TransitionError`].
    async fn apply(
        &self,
        tx: &Transaction,
        block: &BlockContext,
    ) -> Result<Option<Address>, TransitionError>;

    /// Applies `txs` in order, collecting one receipt per transaction.
    ///
    /// A rejected transaction does not stop the batch. A backend abort
    /// ends it early and is recorded as the final receipt, so the
    /// returned receipts always show exactly which transactions were
    /// processed and how.
    async fn apply_batch(
        &self,
        txs: &[Transaction],
        block: &BlockContext,
    ) -> Vec<TransitionReceipt>;
}
