// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for transferscan integration tests
//!
//! Provides a scripted block timestamp provider and log builders so the
//! pipeline can be exercised without a blockchain connection.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use alloy_chains::Chain;
use alloy_primitives::{Address, BlockNumber, B256, U256};
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use transferscan::{BlockTimestampProvider, LookupError, RawLog, Transfer, UnixTimestamp};

/// Mock BlockTimestampProvider for testing the indexer
///
/// Answers from a scripted block table, counts every call, and can be told
/// to fail or stall on specific blocks.
///
/// # Example
///
/// ```rust,ignore
/// let provider = MockBlockProvider::new()
///     .with_block(42, 1_700_000_000)
///     .failing_on(43);
///
/// let indexer = TransferIndexer::new(provider)?;
/// ```
#[derive(Default)]
pub struct MockBlockProvider {
    timestamps: HashMap<BlockNumber, u64>,
    failing: HashSet<BlockNumber>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requested: Mutex<Vec<BlockNumber>>,
}

impl MockBlockProvider {
    /// Create a provider that knows no blocks
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the timestamp returned for `block`
    pub fn with_block(mut self, block: BlockNumber, timestamp: u64) -> Self {
        self.timestamps.insert(block, timestamp);
        self
    }

    /// Script `block` to fail with a provider error
    pub fn failing_on(mut self, block: BlockNumber) -> Self {
        self.failing.insert(block);
        self
    }

    /// Delay every answer by `delay`
    #[allow(dead_code)]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of lookups received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Blocks requested, in call order
    #[allow(dead_code)]
    pub fn requested_blocks(&self) -> Vec<BlockNumber> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlockTimestampProvider for MockBlockProvider {
    async fn block_timestamp(
        &self,
        chain: Chain,
        block_number: BlockNumber,
    ) -> Result<UnixTimestamp, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(block_number);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.contains(&block_number) {
            return Err(LookupError::provider_failed(
                chain,
                block_number,
                std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset"),
            ));
        }

        self.timestamps
            .get(&block_number)
            .copied()
            .map(UnixTimestamp)
            .ok_or_else(|| LookupError::block_not_found(chain, block_number))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Helper to create an encoded ERC-20 transfer log
pub fn transfer_log(
    token: Address,
    from: Address,
    to: Address,
    value: U256,
    block: BlockNumber,
) -> RawLog {
    let event = Transfer { from, to, value };
    RawLog::from_log_data(token, event.encode_log_data(), block)
}

/// Helper to create a log that is not an ERC-20 transfer
#[allow(dead_code)]
pub fn unrelated_log(token: Address, block: BlockNumber) -> RawLog {
    RawLog::new(
        token,
        vec![B256::repeat_byte(0x5a), B256::ZERO],
        vec![0u8; 64],
        block,
    )
}
