// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transfer payload decoding.

use alloy_primitives::Address;

/// Errors that can occur while decoding a transfer log.
///
/// A decode failure is terminal for the log being processed, and through the
/// batch contract of [`TransferIndexer`](crate::TransferIndexer), for the whole
/// batch.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The log does not have the transfer topic shape.
    ///
    /// Only reachable through the single-log entry point; the batch operation
    /// skips such logs without reporting them.
    #[error("Log is not a transfer event ({topic_count} topics)")]
    NotTransferEvent {
        /// Number of topics the log carried
        topic_count: usize,
    },

    /// The log was emitted by a contract outside the configured allow-list.
    #[error("Log emitted by untracked contract {address}")]
    UntrackedContract {
        /// Emitting contract
        address: Address,
    },

    /// The data payload length does not match the event's static layout.
    #[error("Payload length mismatch: expected {expected} bytes, found {actual}")]
    PayloadLength {
        /// Bytes required by the non-indexed parameter layout
        expected: usize,
        /// Bytes present in the log
        actual: usize,
    },

    /// The ABI decoder rejected the payload.
    #[error("Malformed payload")]
    Abi {
        /// The underlying ABI decode error
        #[source]
        source: alloy_dyn_abi::Error,
    },

    /// The payload decoded to a value of the wrong kind.
    #[error("Unexpected decoded value: {details}")]
    UnexpectedValue {
        /// What was found instead of the expected value
        details: String,
    },
}

impl DecodeError {
    /// Create a `PayloadLength` error.
    pub fn payload_length(expected: usize, actual: usize) -> Self {
        DecodeError::PayloadLength { expected, actual }
    }

    /// Create an `UnexpectedValue` error with details.
    pub fn unexpected_value(details: impl Into<String>) -> Self {
        DecodeError::UnexpectedValue {
            details: details.into(),
        }
    }
}

impl From<alloy_dyn_abi::Error> for DecodeError {
    fn from(source: alloy_dyn_abi::Error) -> Self {
        DecodeError::Abi { source }
    }
}
