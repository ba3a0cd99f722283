//! Backend fault handling: store errors abort the transition instead of
//! surfacing as validation failures.

use async_trait::async_trait;
use primitive_types::U256;
use state_transition::prelude::*;

use super::init_tracing;

/// Ledger whose every operation fails.
struct FailingLedger;

#[async_trait]
impl LedgerStore for FailingLedger {
    async fn get(&self, _address: Address) -> Result<Account, LedgerError> {
        Err(LedgerError::Unavailable)
    }

    async fn update(&self, _account: Account) -> Result<(), LedgerError> {
        Err(LedgerError::Unavailable)
    }
}

/// Ledger that fails any access to one poisoned address and delegates the
/// rest to an in-memory store.
struct PoisonedLedger {
    inner: InMemoryLedger,
    poisoned: Address,
}

#[async_trait]
impl LedgerStore for PoisonedLedger {
    async fn get(&self, address: Address) -> Result<Account, LedgerError> {
        if address == self.poisoned {
            return Err(LedgerError::Corrupted);
        }
        self.inner.get(address).await
    }

    async fn update(&self, account: Account) -> Result<(), LedgerError> {
        if account.address == self.poisoned {
            return Err(LedgerError::Corrupted);
        }
        self.inner.update(account).await
    }
}

/// Ledger that serves reads from an in-memory store but rejects writes.
struct ReadOnlyLedger {
    inner: InMemoryLedger,
}

#[async_trait]
impl LedgerStore for ReadOnlyLedger {
    async fn get(&self, address: Address) -> Result<Account, LedgerError> {
        self.inner.get(address).await
    }

    async fn update(&self, _account: Account) -> Result<(), LedgerError> {
        Err(LedgerError::Other("store is read-only".to_string()))
    }
}

fn transfer(sender: Address, recipient: Address) -> Transaction {
    Transaction {
        sender,
        recipient: Some(recipient),
        value: U256::from(1),
        gas_limit: 21_000,
        gas_price: U256::from(1),
        nonce: 0,
        ..Transaction::default()
    }
}

#[tokio::test]
async fn unreachable_store_aborts_the_transition() {
    init_tracing();
    let service =
        TransitionService::new(FailingLedger, PassthroughEngine, ServiceConfig::default());

    let tx = transfer(Address::new([1u8; 20]), Address::new([2u8; 20]));
    let err = service
        .apply(&tx, &BlockContext::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TransitionError::Aborted(_)));

    let stats = service.stats().await;
    assert_eq!(stats.transactions_applied, 1);
    assert_eq!(stats.failed, 1);
}

#[tokio::test]
async fn write_fault_aborts_before_anything_commits() {
    init_tracing();
    let inner = InMemoryLedger::new();
    let sender = Address::new([1u8; 20]);
    inner.set_balance(sender, U256::from(100_000)).unwrap();

    let service = TransitionService::new(
        ReadOnlyLedger { inner },
        PassthroughEngine,
        ServiceConfig::default(),
    );

    let tx = transfer(sender, Address::new([2u8; 20]));
    let err = service
        .apply(&tx, &BlockContext::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TransitionError::Aborted(_)));
}

#[tokio::test]
async fn aborted_batch_keeps_receipts_up_to_the_fault() {
    init_tracing();
    let inner = InMemoryLedger::new();
    let good_sender = Address::new([1u8; 20]);
    inner.set_balance(good_sender, U256::from(100_000)).unwrap();

    let service = TransitionService::new(
        PoisonedLedger {
            inner,
            poisoned: Address::new([3u8; 20]),
        },
        PassthroughEngine,
        ServiceConfig::default(),
    );

    let txs = vec![
        transfer(good_sender, Address::new([2u8; 20])),
        transfer(Address::new([3u8; 20]), Address::new([4u8; 20])),
        transfer(Address::new([5u8; 20]), Address::new([6u8; 20])),
    ];

    // Unlike a validation failure, an abort ends the batch. The receipts
    // still record every transaction processed, the abort included, so
    // the caller can tell which commits landed.
    let receipts = service.apply_batch(&txs, &BlockContext::default()).await;
    assert_eq!(receipts.len(), 2);
    assert!(receipts[0].is_success());
    assert!(matches!(
        receipts[1].outcome,
        Err(TransitionError::Aborted(_))
    ));

    // The first transaction's commit is visible.
    assert_eq!(service.stats().await.succeeded, 1);
}
