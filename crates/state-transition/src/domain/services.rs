//! # Domain Services
//!
//! Pure, deterministic functions with no side effects. Nothing here does
//! I/O or touches collaborator ports.

use crate::domain::value_objects::{Address, Hash};
use sha3::{Digest, Keccak256};

// =============================================================================
// CREATION ADDRESS
// =============================================================================

/// Derives the address of a contract account created by `sender` at `nonce`.
///
/// Address = keccak256(rlp(\[sender, nonce\]))\[12..\]
///
/// The same (sender, nonce) pair always yields the same address, which is
/// what keeps contract creation deterministic across nodes replaying the
/// same history.
#[must_use]
pub fn creation_address(sender: Address, nonce: u64) -> Address {
    // RLP payload: 20-byte address string followed by the nonce.
    let mut content = Vec::with_capacity(32);
    content.push(0x80 + 20);
    content.extend_from_slice(sender.as_bytes());

    if nonce == 0 {
        content.push(0x80); // empty byte string
    } else if nonce < 0x80 {
        content.push(nonce as u8);
    } else {
        let nonce_bytes = trim_leading_zeros(nonce);
        content.push(0x80 + nonce_bytes.len() as u8);
        content.extend_from_slice(&nonce_bytes);
    }

    // List header; the content can never reach the long-list form
    // (20-byte address + at most 9 nonce bytes).
    let mut encoded = Vec::with_capacity(content.len() + 1);
    encoded.push(0xc0 + content.len() as u8);
    encoded.extend_from_slice(&content);

    let digest = Keccak256::digest(&encoded);
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&digest[12..32]);
    Address::new(addr)
}

/// Big-endian bytes of `value` without leading zeros.
fn trim_leading_zeros(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(7);
    bytes[start..].to_vec()
}

// =============================================================================
// KECCAK256 UTILITY
// =============================================================================

/// Computes the keccak256 hash of arbitrary data.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    let digest = Keccak256::digest(data);
    Hash::new(digest.into())
}

// =============================================================================
// TESTS
// =============================================================================
