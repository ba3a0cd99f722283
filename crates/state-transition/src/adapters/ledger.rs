//! # In-Memory Ledger Adapter
//!
//! HashMap-backed [`LedgerStore`] used by tests and single-node tooling.
//! Production deployments supply a persistent adapter behind the same port.

use crate::domain::{Account, Address, U256};
use crate::errors::LedgerError;
use crate::ports::LedgerStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

// =============================================================================
// IN-MEMORY LEDGER
// =============================================================================

/// Thread-safe in-memory account store.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    accounts: RwLock<HashMap<Address, Account>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `account` directly, bypassing transition rules.
    pub fn set_account(&self, account: Account) -> Result<(), LedgerError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| LedgerError::Unavailable)?;
        accounts.insert(account.address, account);
        Ok(())
    }

    /// Seeds a plain account holding `balance` at `address`.
    pub fn set_balance(&self, address: Address, balance: U256) -> Result<(), LedgerError> {
        let mut account = Account::new_empty(address);
        account.balance = balance;
        self.set_account(account)
    }

    /// Returns true if the ledger holds an entry for `address`.
    pub fn contains(&self, address: Address) -> Result<bool, LedgerError> {
        let accounts = self.accounts.read().map_err(|_| LedgerError::Unavailable)?;
        Ok(accounts.contains_key(&address))
    }

    /// Number of stored entries.
    pub fn len(&self) -> Result<usize, LedgerError> {
        let accounts = self.accounts.read().map_err(|_| LedgerError::Unavailable)?;
        Ok(accounts.len())
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedger {
    async fn get(&self, address: Address) -> Result<Account, LedgerError> {
        let accounts = self.accounts.read().map_err(|_| LedgerError::Unavailable)?;
        Ok(accounts
            .get(&address)
            .cloned()
            .unwrap_or_else(|| Account::new_empty(address)))
    }

    async fn update(&self, account: Account) -> Result<(), LedgerError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| LedgerError::Unavailable)?;
        accounts.insert(account.address, account);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
