// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for block timestamp resolution.
//!
//! Every variant names the chain and block so that a failed batch can be
//! retried or narrowed by the caller.

use alloy_chains::Chain;
use alloy_primitives::BlockNumber;

/// Errors that can occur while resolving a block's timestamp.
///
/// There is no retry inside the library; callers retry the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The provider answered, but has no such block.
    ///
    /// This can occur if the block number is beyond the chain tip, if there
    /// was a chain reorganization, or if the provider hasn't synced that block.
    #[error("Block {block_number} not found on chain {chain}")]
    BlockNotFound {
        /// Chain the lookup was issued for
        chain: Chain,
        /// The block number that wasn't found
        block_number: BlockNumber,
    },

    /// The provider call itself failed (network, transport, server error).
    #[error("Failed to fetch block {block_number} on chain {chain}")]
    ProviderFailed {
        /// Chain the lookup was issued for
        chain: Chain,
        /// The block number we tried to fetch
        block_number: BlockNumber,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The lookup did not complete before the deadline.
    #[error("Timed out fetching block {block_number} on chain {chain}")]
    TimedOut {
        /// Chain the lookup was issued for
        chain: Chain,
        /// The block number we tried to fetch
        block_number: BlockNumber,
    },

    /// The caller cancelled the operation.
    #[error("Cancelled while fetching block {block_number} on chain {chain}")]
    Cancelled {
        /// Chain the lookup was issued for
        chain: Chain,
        /// The block number we tried to fetch
        block_number: BlockNumber,
    },
}

impl LookupError {
    /// Create a `BlockNotFound` error.
    pub fn block_not_found(chain: Chain, block_number: BlockNumber) -> Self {
        LookupError::BlockNotFound {
            chain,
            block_number,
        }
    }

    /// Helper to create a `ProviderFailed` error from any error type.
    pub fn provider_failed(
        chain: Chain,
        block_number: BlockNumber,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LookupError::ProviderFailed {
            chain,
            block_number,
            source: Box::new(source),
        }
    }

    /// Create a `TimedOut` error.
    pub fn timed_out(chain: Chain, block_number: BlockNumber) -> Self {
        LookupError::TimedOut {
            chain,
            block_number,
        }
    }

    /// Create a `Cancelled` error.
    pub fn cancelled(chain: Chain, block_number: BlockNumber) -> Self {
        LookupError::Cancelled {
            chain,
            block_number,
        }
    }

    /// The block the failed lookup was issued for.
    pub fn block_number(&self) -> BlockNumber {
        match self {
            LookupError::BlockNotFound { block_number, .. }
            | LookupError::ProviderFailed { block_number, .. }
            | LookupError::TimedOut { block_number, .. }
            | LookupError::Cancelled { block_number, .. } => *block_number,
        }
    }
}
