//! # State Transition Service
//!
//! Applies transactions to the account ledger: nonce validation, gas
//! purchase and accounting, value transfer, contract creation, and the
//! final commit of touched accounts.
//!
//! ## Atomicity
//!
//! All account mutations happen on local copies. With one deliberate
//! exception, nothing reaches the ledger until the transition has passed
//! every check: the proposer's fee credit is written through at purchase
//! time, so a transaction that fails after buying gas still pays its fee.

use crate::adapters::{InMemoryLedger, PassthroughEngine};
use crate::domain::{
    Account, Address, BlockContext, GasMeter, GasSchedule, Transaction,
};
use crate::errors::TransitionError;
use crate::ports::{LedgerStore, ScriptEngine, StateTransitionApi, TransitionReceipt};

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// State transition service configuration.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Intrinsic gas cost table.
    pub schedule: GasSchedule,
}

/// Statistics for the transition service.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Total transactions applied.
    pub transactions_applied: u64,
    /// Transitions that committed.
    pub succeeded: u64,
    /// Transitions rejected by a validation rule.
    pub failed: u64,
    /// Contract accounts created.
    pub contracts_created: u64,
}

// =============================================================================
// TRANSITION SERVICE
// =============================================================================

/// The state transition engine.
///
/// Generic over the backing ledger and the contract script engine so the
/// transition rules can be exercised against in-memory adapters or wired
/// to production backends unchanged.
pub struct TransitionService<L: LedgerStore, E: ScriptEngine> {
    config: ServiceConfig,
    ledger: Arc<L>,
    engine: Arc<E>,
    stats: Arc<RwLock<ServiceStats>>,
}

impl<L: LedgerStore, E: ScriptEngine> TransitionService<L, E> {
    /// Creates a new transition service.
    pub fn new(ledger: L, engine: E, config: ServiceConfig) -> Self {
        Self {
            config,
            ledger: Arc::new(ledger),
            engine: Arc::new(engine),
            stats: Arc::new(RwLock::new(ServiceStats::default())),
        }
    }

    /// The backing ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Snapshot of the current service statistics.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    /// Applies one transaction, recording the outcome in the stats.
    ///
    /// `Ok` carries the created contract address for creation
    /// transactions; every failure, validation rule or backend fault,
    /// surfaces as the typed error.
    #[instrument(skip(self, tx, block), fields(sender = %tx.sender, nonce = tx.nonce))]
    pub async fn apply(
        &self,
        tx: &Transaction,
        block: &BlockContext,
    ) -> Result<Option<Address>, TransitionError> {
        let result = self.transition(tx, block).await;

        {
            let mut stats = self.stats.write().await;
            stats.transactions_applied += 1;
            match &result {
                Ok(created) => {
                    stats.succeeded += 1;
                    if created.is_some() {
                        stats.contracts_created += 1;
                    }
                }
                Err(_) => stats.failed += 1,
            }
        }

        match &result {
            Ok(created) => debug!(contract = ?created, "transition committed"),
            Err(err @ TransitionError::Aborted(_)) => warn!(error = %err, "transition aborted"),
            Err(err) => info!(error = %err, "transition rejected"),
        }
        result
    }

    /// Runs the transition rules against local account copies and commits
    /// them on success. Returns the created contract address, if any.
    async fn transition(
        &self,
        tx: &Transaction,
        block: &BlockContext,
    ) -> Result<Option<Address>, TransitionError> {
        let mut sender = self.ledger.get(tx.sender).await?;

        // Replay protection: the nonce must match exactly.
        if sender.nonce != tx.nonce {
            return Err(TransitionError::NonceMismatch {
                expected: sender.nonce,
                got: tx.nonce,
            });
        }
        sender.increment_nonce();

        // Gas purchase. The sender pays for the full limit up front; the
        // proposer's credit is written through immediately and stays paid
        // even if a later step rejects the transaction.
        let gas_cost = tx
            .gas_cost()
            .ok_or_else(|| TransitionError::Aborted("gas cost overflows U256".to_string()))?;
        sender
            .debit(gas_cost)
            .map_err(|e| TransitionError::InsufficientGasFunds {
                required: e.required,
                available: e.available,
            })?;
        let mut gas = GasMeter::new();
        gas.purchase(tx.gas_limit);

        if block.proposer == tx.sender {
            // Fee flows back to the payer; settle it locally so the
            // commit below publishes both sides at once.
            sender.credit(gas_cost);
        } else {
            let mut proposer = self.ledger.get(block.proposer).await?;
            proposer.credit(gas_cost);
            self.ledger.update(proposer).await?;
        }

        // Call-path receiver is resolved here, after the fee write-through;
        // the creation path resolves below, once intrinsic gas has fit.
        // None here means recipient == sender: the transfer lands on the
        // sender's own copy.
        let mut receiver = match tx.recipient {
            Some(address) if address != tx.sender => Some(self.ledger.get(address).await?),
            _ => None,
        };

        // Intrinsic gas: flat base cost plus a per-byte payload charge.
        gas.consume(self.config.schedule.tx_base)?;
        let data_gas = self
            .config
            .schedule
            .data_gas(&tx.payload)
            .ok_or_else(|| TransitionError::Aborted("payload gas overflows u64".to_string()))?;
        gas.consume(data_gas)?;

        let mut created = None;
        if tx.is_contract_creation() {
            let address = tx.creation_address();
            let existing = self.ledger.get(address).await?;
            if !existing.is_empty() {
                return Err(TransitionError::ContractCreationFailed {
                    address,
                    reason: "address already occupied".to_string(),
                });
            }
            receiver = Some(Account::new_empty(address));
            created = Some(address);
        }

        // Value transfer.
        debug!(
            from = %tx.sender,
            to = ?tx.recipient,
            value = %tx.value,
            "transferring value"
        );
        sender
            .debit(tx.value)
            .map_err(|e| TransitionError::InsufficientValueFunds {
                required: e.required,
                available: e.available,
            })?;
        match receiver.as_mut() {
            Some(receiver) => receiver.credit(tx.value),
            None => sender.credit(tx.value),
        }

        // Creation: run the initialization code with whatever gas remains
        // and install its output as the contract's code.
        if let (Some(_), Some(contract)) = (created, receiver.as_mut()) {
            let code = self
                .engine
                .run(&tx.payload, contract, gas.remaining(), block)
                .await
                .map_err(|e| TransitionError::InitializationFailed(e.to_string()))?;
            contract.code = code;
        }

        // Commit. Sender first, then the receiver, making both visible.
        self.ledger.update(sender).await?;
        if let Some(receiver) = receiver {
            self.ledger.update(receiver).await?;
        }

        Ok(created)
    }
}

/// Creates a service with in-memory adapters and a zero-cost gas schedule,
/// for tests that assert on exact balances.
#[must_use]
pub fn create_test_service() -> TransitionService<InMemoryLedger, PassthroughEngine> {
    TransitionService::new(
        InMemoryLedger::new(),
        PassthroughEngine,
        ServiceConfig {
            schedule: GasSchedule::free(),
        },
    )
}

// =============================================================================
// StateTransitionApi Implementation
// =============================================================================

#[async_trait]
impl<L: LedgerStore, E: ScriptEngine> StateTransitionApi for TransitionService<L, E> {
    async fn apply(
        &self,
        tx: &Transaction,
        block: &BlockContext,
    ) -> Result<Option<Address>, TransitionError> {
        TransitionService::apply(self, tx, block).await
    }

    async fn apply_batch(
        &self,
        txs: &[Transaction],
        block: &BlockContext,
    ) -> Vec<TransitionReceipt> {
        let mut receipts = Vec::with_capacity(txs.len());
        for tx in txs {
            match TransitionService::apply(self, tx, block).await {
                Ok(created) => receipts.push(TransitionReceipt::success(created)),
                Err(err @ TransitionError::Aborted(_)) => {
                    // A backend fault ends the batch; the abort receipt
                    // marks how far processing got.
                    receipts.push(TransitionReceipt::failure(err));
                    break;
                }
                Err(err) => receipts.push(TransitionReceipt::failure(err)),
            }
        }
        receipts
    }
}

// =============================================================================
// TESTS
// =============================================================================
