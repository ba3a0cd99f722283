//! # Script Engine Adapters
//!
//! Minimal [`ScriptEngine`] implementations for tests and wiring. A real
//! virtual machine plugs in behind the same port.

use crate::domain::{Account, BlockContext, Bytes};
use crate::errors::ScriptError;
use crate::ports::ScriptEngine;
use async_trait::async_trait;

// =============================================================================
// PASSTHROUGH ENGINE
// =============================================================================

/// Engine that installs the initialization payload verbatim as contract
/// code. Suitable for tests exercising the transition pipeline itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughEngine;

#[async_trait]
impl ScriptEngine for PassthroughEngine {
    async fn run(
        &self,
        payload: &Bytes,
        _contract: &Account,
        _gas_budget: u64,
        _block: &BlockContext,
    ) -> Result<Bytes, ScriptError> {
        Ok(payload.clone())
    }
}

// =============================================================================
// REJECTING ENGINE
// =============================================================================

/// Engine that fails every invocation. Used to exercise the
/// initialization-failure path.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectingEngine;

#[async_trait]
impl ScriptEngine for RejectingEngine {
    async fn run(
        &self,
        _payload: &Bytes,
        _contract: &Account,
        _gas_budget: u64,
        _block: &BlockContext,
    ) -> Result<Bytes, ScriptError> {
        Err(ScriptError::Reverted("initialization rejected".to_string()))
    }
}
