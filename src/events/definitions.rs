// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical ERC-20 Transfer event definition
//!
//! # Event Signature
//!
//! - **Transfer**: `Transfer(address,address,uint256)`
//!
//! Indexed parameters become topics in the log:
//! - topic0: event signature hash ([`TRANSFER_SIGNATURE_HASH`])
//! - topic1: `from` address, left-padded to 32 bytes
//! - topic2: `to` address, left-padded to 32 bytes
//!
//! The `value` is ABI-encoded in the log's data field.
//!
//! # Example: Building a log filter
//!
//! ```rust,ignore
//! use transferscan::TRANSFER_SIGNATURE_HASH;
//! use alloy_rpc_types::Filter;
//!
//! let filter = Filter::new()
//!     .event_signature(*TRANSFER_SIGNATURE_HASH)
//!     .from_block(start_block)
//!     .to_block(end_block);
//! ```

use std::fmt::Debug;
use std::sync::LazyLock;

use alloy_primitives::{keccak256, B256};
use alloy_sol_types::sol;

/// The canonical Transfer event signature
pub const TRANSFER_EVENT_SIGNATURE: &str = "Transfer(address,address,uint256)";

/// Keccak-256 hash of [`TRANSFER_EVENT_SIGNATURE`], computed once per process
pub static TRANSFER_SIGNATURE_HASH: LazyLock<B256> =
    LazyLock::new(|| keccak256(TRANSFER_EVENT_SIGNATURE.as_bytes()));

sol! {
    /// ERC-20 Transfer event
    ///
    /// Emitted when tokens are transferred from one address to another.
    /// This includes:
    /// - Regular transfers between users
    /// - Minting (from = 0x0)
    /// - Burning (to = 0x0)
    event Transfer(address indexed from, address indexed to, uint256 value);
}

impl Debug for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transfer(from: {}, to: {}, value: {})",
            self.from, self.to, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;
    use alloy_sol_types::SolEvent;

    #[test]
    fn test_signature_hash_matches_compiled_event() {
        assert_eq!(*TRANSFER_SIGNATURE_HASH, Transfer::SIGNATURE_HASH);
        assert_eq!(Transfer::SIGNATURE, TRANSFER_EVENT_SIGNATURE);
    }

    #[test]
    fn test_signature_hash_well_known_value() {
        assert_eq!(
            *TRANSFER_SIGNATURE_HASH,
            b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
        );
    }
}
