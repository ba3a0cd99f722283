//! # Gas Accounting
//!
//! The gas meter tracks purchased-versus-consumed gas for one transition,
//! and the gas schedule holds the protocol constants the meter charges by.
//!
//! ## Invariants
//!
//! - Gas is purchased exactly once per transition; there is no mechanism to
//!   add gas afterwards.
//! - A charge that would exceed the available gas fails with `OutOfGas` and
//!   leaves the counter at its value before the failing call.
//! - Unused gas is discarded, never refunded. Refund policy belongs to a
//!   collaborator, not this engine.

use crate::domain::value_objects::Bytes;
use crate::errors::TransitionError;

// =============================================================================
// GAS COSTS
// =============================================================================

/// Default gas costs. Protocol constants live in the gas schedule of the
/// surrounding system; these defaults exist so the engine is usable
/// standalone.
pub mod costs {
    /// Base gas charged for every transaction.
    pub const TX_BASE: u64 = 21_000;
    /// Gas charged per byte of transaction payload.
    pub const TX_DATA_PER_BYTE: u64 = 68;
}

// =============================================================================
// GAS SCHEDULE
// =============================================================================

/// Per-operation gas cost table, fixed in advance of execution.
///
/// The data charge is flat per payload byte: `len(payload) * tx_data_per_byte`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GasSchedule {
    /// Fixed cost charged for every transaction.
    pub tx_base: u64,
    /// Cost charged per byte of payload.
    pub tx_data_per_byte: u64,
}

impl Default for GasSchedule {
    fn default() -> Self {
        Self {
            tx_base: costs::TX_BASE,
            tx_data_per_byte: costs::TX_DATA_PER_BYTE,
        }
    }
}

impl GasSchedule {
    /// A schedule with all costs zeroed. Useful for tests that exercise the
    /// balance arithmetic without gas charges interfering.
    #[must_use]
    pub const fn free() -> Self {
        Self {
            tx_base: 0,
            tx_data_per_byte: 0,
        }
    }

    /// Data-proportional gas for a payload. None on arithmetic overflow.
    #[must_use]
    pub fn data_gas(&self, payload: &Bytes) -> Option<u64> {
        (payload.len() as u64).checked_mul(self.tx_data_per_byte)
    }
}

// =============================================================================
// GAS METER
// =============================================================================

/// Tracks gas available to one in-flight transition.
///
/// A fresh meter holds zero gas; `purchase` is called once after the sender
/// has been debited `gas_limit * gas_price` and the proposer credited the
/// same amount.
#[derive(Clone, Copy, Debug, Default)]
pub struct GasMeter {
    /// Total gas purchased for this transition.
    purchased: u64,
    /// Gas still available.
    available: u64,
}

impl GasMeter {
    /// Creates an empty meter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            purchased: 0,
            available: 0,
        }
    }

    /// Adds purchased gas to the counter.
    pub fn purchase(&mut self, amount: u64) {
        self.purchased = self.purchased.saturating_add(amount);
        self.available = self.available.saturating_add(amount);
    }

    /// Consumes gas. Fails with `OutOfGas` if `amount` exceeds the
    /// available counter, leaving the counter untouched.
    pub fn consume(&mut self, amount: u64) -> Result<(), TransitionError> {
        if amount > self.available {
            return Err(TransitionError::OutOfGas {
                needed: amount,
                remaining: self.available,
            });
        }
        self.available -= amount;
        Ok(())
    }

    /// Gas still available to this transition.
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.available
    }

    /// Total gas purchased.
    #[must_use]
    pub const fn purchased(&self) -> u64 {
        self.purchased
    }

    /// Gas consumed so far.
    #[must_use]
    pub const fn used(&self) -> u64 {
        self.purchased - self.available
    }
}

// =============================================================================
// TESTS
// =============================================================================
