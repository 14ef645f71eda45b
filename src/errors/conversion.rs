// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for converting client logs into pipeline input.

use alloy_primitives::{Address, TxHash};

/// Errors that can occur while converting an RPC log into a
/// [`RawLog`](crate::RawLog).
///
/// Raised before indexing starts, so it never carries a batch position.
#[derive(Debug, thiserror::Error)]
pub enum LogConversionError {
    /// The log is pending and has no block number yet.
    #[error("Log from {address} has no block number (pending log)")]
    MissingBlockNumber {
        /// Contract that emitted the log
        address: Address,
        /// Transaction that emitted the log, when known
        transaction_hash: Option<TxHash>,
    },
}
