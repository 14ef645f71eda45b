// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw event logs as delivered by a chain client

use alloy_primitives::{Address, BlockNumber, Bytes, LogData, TxHash, B256};
use alloy_rpc_types::Log;

use crate::errors::LogConversionError;

/// A single event emission, read-only to the pipeline
///
/// Mirrors the parts of an RPC log that transfer extraction needs. Topics are
/// kept as delivered (0 to 4 entries, the first being the event signature hash
/// for non-anonymous events); the pipeline never validates them on
/// construction, classification decides what to do with them.
///
/// # Examples
///
/// ```rust,ignore
/// use transferscan::RawLog;
///
/// let logs: Vec<RawLog> = provider
///     .get_logs(&filter)
///     .await?
///     .iter()
///     .map(RawLog::try_from)
///     .collect::<Result<_, _>>()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLog {
    /// Contract that emitted the log
    pub address: Address,
    /// Ordered topic hashes
    pub topics: Vec<B256>,
    /// Non-indexed payload
    pub data: Bytes,
    /// Block that produced the log
    pub block_number: BlockNumber,
    /// Transaction that emitted the log, when known
    pub transaction_hash: Option<TxHash>,
    /// Index of the log within its block, when known
    pub log_index: Option<u64>,
}

impl RawLog {
    /// Creates a log without transaction coordinates
    pub fn new(
        address: Address,
        topics: Vec<B256>,
        data: impl Into<Bytes>,
        block_number: BlockNumber,
    ) -> Self {
        Self {
            address,
            topics,
            data: data.into(),
            block_number,
            transaction_hash: None,
            log_index: None,
        }
    }

    /// Creates a log from encoded event data, e.g. the output of
    /// `SolEvent::encode_log_data`
    pub fn from_log_data(address: Address, data: LogData, block_number: BlockNumber) -> Self {
        let (topics, data) = data.split();
        Self::new(address, topics, data, block_number)
    }

    /// Attaches transaction coordinates
    pub fn with_coordinates(mut self, transaction_hash: TxHash, log_index: u64) -> Self {
        self.transaction_hash = Some(transaction_hash);
        self.log_index = Some(log_index);
        self
    }

    /// Topic hashes in emission order
    pub fn topics(&self) -> &[B256] {
        &self.topics
    }
}

impl TryFrom<&Log> for RawLog {
    type Error = LogConversionError;

    /// Fails for pending logs, which carry no block number.
    fn try_from(log: &Log) -> Result<Self, Self::Error> {
        let block_number = log
            .block_number
            .ok_or_else(|| LogConversionError::MissingBlockNumber {
                address: log.inner.address,
                transaction_hash: log.transaction_hash,
            })?;
        Ok(Self {
            address: log.inner.address,
            topics: log.inner.data.topics().to_vec(),
            data: log.inner.data.data.clone(),
            block_number,
            transaction_hash: log.transaction_hash,
            log_index: log.log_index,
        })
    }
}

impl TryFrom<Log> for RawLog {
    type Error = LogConversionError;

    fn try_from(log: Log) -> Result<Self, Self::Error> {
        Self::try_from(&log)
    }
}
