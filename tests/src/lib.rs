//! # engine-tests
//!
//! Integration tests for the state-transition engine, exercising the full
//! service against the in-memory adapters.

#[cfg(test)]
mod integration;
