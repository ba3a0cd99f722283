//! # Outbound Ports
//!
//! Interfaces this engine requires from its environment: the backing
//! account store and the contract script engine. Adapters implement these;
//! the transition logic only ever sees the traits.

use crate::domain::{Account, Address, BlockContext, Bytes, U256};
use crate::errors::{LedgerError, ScriptError};
use async_trait::async_trait;

// =============================================================================
// LEDGER STORE PORT
// =============================================================================

/// Access to the persistent account ledger.
///
/// `get` materializes: an address with no stored entry yields a fresh
/// zero-valued [`Account`], never an error. Implementations fail only on
/// genuine backend faults.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Fetches the account at `address`, materializing an empty one if
    /// the ledger has no entry for it.
    async fn get(&self, address: Address) -> Result<Account, LedgerError>;

    /// Writes `account` back to the ledger, keyed by its own address.
    async fn update(&self, account: Account) -> Result<(), LedgerError>;

    /// Convenience: the balance at `address`.
    async fn balance(&self, address: Address) -> Result<U256, LedgerError> {
        Ok(self.get(address).await?.balance)
    }

    /// Convenience: the nonce at `address`.
    async fn nonce(&self, address: Address) -> Result<u64, LedgerError> {
        Ok(self.get(address).await?.nonce)
    }
}

// =============================================================================
// SCRIPT ENGINE PORT
// =============================================================================

/// Executes contract initialization code.
///
/// Invoked on the creation path only, after value transfer, with whatever
/// gas remains in the transaction's budget. The returned bytes become the
/// new contract's installed code.
#[async_trait]
pub trait ScriptEngine: Send + Sync {
    /// Runs `payload` as initialization code in the context of the freshly
    /// created `contract` account, returning the runtime code to install.
    async fn run(
        &self,
        payload: &Bytes,
        contract: &Account,
        gas_budget: u64,
        block: &BlockContext,
    ) -> Result<Bytes, ScriptError>;
}
