//! # Core Domain Entities
//!
//! The three inputs of a state transition: the account ledger entry, the
//! immutable transaction, and the read-only block context.

use crate::domain::services::creation_address;
use crate::domain::value_objects::{Address, Bytes, Hash, StorageKey, StorageValue, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

// =============================================================================
// ACCOUNT (LEDGER ENTRY)
// =============================================================================

/// Raised by [`Account::debit`] when the balance cannot cover the amount.
///
/// The orchestrator refines this into the step-specific transition error
/// (gas purchase vs value transfer).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("insufficient funds: required {required}, available {available}")]
pub struct InsufficientFunds {
    /// The amount the debit asked for.
    pub required: U256,
    /// The balance at the time of the call.
    pub available: U256,
}

/// In-memory representation of one account in the ledger.
///
/// Mutations here are pure and local; visibility to other transactions is
/// controlled entirely by the orchestrator's commit step, never by the
/// entry itself.
///
/// ## Invariants
/// - `balance >= 0` at all observable boundaries (structural via U256 plus
///   the debit guard).
/// - `nonce` only increases within a session; it never decreases or wraps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account's address.
    pub address: Address,
    /// Account balance.
    pub balance: U256,
    /// Replay-protection counter.
    pub nonce: u64,
    /// Contract code; empty for non-contract accounts.
    pub code: Bytes,
    /// Contract storage. Opaque to this engine; only the script engine
    /// mutates it. BTreeMap keeps iteration deterministic for the codec.
    pub storage: BTreeMap<StorageKey, StorageValue>,
}

impl Account {
    /// Creates a fresh zero-valued account at `address`.
    #[must_use]
    pub fn new_empty(address: Address) -> Self {
        Self {
            address,
            balance: U256::zero(),
            nonce: 0,
            code: Bytes::new(),
            storage: BTreeMap::new(),
        }
    }

    /// Decreases the balance. Fails if `amount` exceeds it, leaving the
    /// balance unchanged.
    pub fn debit(&mut self, amount: U256) -> Result<(), InsufficientFunds> {
        if amount > self.balance {
            return Err(InsufficientFunds {
                required: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Increases the balance unconditionally.
    pub fn credit(&mut self, amount: U256) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Advances the nonce by one.
    pub fn increment_nonce(&mut self) {
        self.nonce = self.nonce.saturating_add(1);
    }

    /// Returns true if this account carries contract code.
    #[must_use]
    pub fn is_contract(&self) -> bool {
        !self.code.is_empty()
    }

    /// Returns true if this account holds no value, nonce, code, or
    /// storage. Only an empty slot is a valid target for contract
    /// creation; a storage-bearing account must not be clobbered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balance.is_zero()
            && self.nonce == 0
            && self.code.is_empty()
            && self.storage.is_empty()
    }
}

// =============================================================================
// TRANSACTION (VALUE OBJECT)
// =============================================================================

/// Immutable description of one requested ledger operation.
///
/// The sender identity is already authenticated and the fields already
/// validated for basic well-formedness by the time a transaction reaches
/// this engine; it is never mutated here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sender address (derived from the signature upstream).
    pub sender: Address,
    /// Recipient address; None requests creation of a contract account.
    pub recipient: Option<Address>,
    /// Value transferred to the recipient.
    pub value: U256,
    /// Maximum gas this transaction may consume.
    pub gas_limit: u64,
    /// Price paid per unit of gas.
    pub gas_price: U256,
    /// Call data or contract initialization code.
    pub payload: Bytes,
    /// Must match the sender account's current nonce exactly.
    pub nonce: u64,
}

impl Transaction {
    /// Returns true if this transaction requests contract creation.
    #[must_use]
    pub fn is_contract_creation(&self) -> bool {
        self.recipient.is_none()
    }

    /// The address a created contract account will occupy, derived
    /// deterministically from (sender, nonce).
    #[must_use]
    pub fn creation_address(&self) -> Address {
        creation_address(self.sender, self.nonce)
    }

    /// The full gas purchase amount, `gas_limit * gas_price`.
    /// None on arithmetic overflow.
    #[must_use]
    pub fn gas_cost(&self) -> Option<U256> {
        U256::from(self.gas_limit).checked_mul(self.gas_price)
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            sender: Address::ZERO,
            recipient: None,
            value: U256::zero(),
            gas_limit: 0,
            gas_price: U256::zero(),
            payload: Bytes::new(),
            nonce: 0,
        }
    }
}

// =============================================================================
// BLOCK CONTEXT
// =============================================================================

/// Read-only block-level inputs to a transition.
///
/// Forwarded to the script engine as its environment; never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContext {
    /// Fee recipient for this block.
    pub proposer: Address,
    /// Block number.
    pub number: u64,
    /// Hash of the previous block.
    pub previous_hash: Hash,
    /// Block timestamp (unix seconds).
    pub timestamp: u64,
    /// Block difficulty.
    pub difficulty: U256,
}

impl Default for BlockContext {
    fn default() -> Self {
        Self {
            proposer: Address::ZERO,
            number: 0,
            previous_hash: Hash::ZERO,
            timestamp: 0,
            difficulty: U256::zero(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
