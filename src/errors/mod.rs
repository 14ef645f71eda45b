// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the transferscan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Stage-specific errors** for fine-grained handling: [`SchemaError`] when the
//!   interface definition is loaded, [`DecodeError`] when a log payload is
//!   decoded, and [`LookupError`] when a block timestamp is resolved
//! - **Unified error type** ([`TransferIndexError`]) returned by the batch and
//!   single-log indexing operations, which also records which log failed
//!
//! [`LogConversionError`] covers turning RPC logs into pipeline input, before
//! any indexing happens.
//!
//! # Examples
//!
//! ```rust,ignore
//! use transferscan::{LookupError, TransferIndexError};
//!
//! match indexer.index_logs(chain, &logs, &ctx).await {
//!     Ok(records) => println!("{} transfers", records.len()),
//!     Err(TransferIndexError::Lookup { position, source: LookupError::TimedOut { .. } }) => {
//!         eprintln!("Block lookup for log {position} timed out, retrying batch");
//!     }
//!     Err(e) => eprintln!("Batch failed: {e}"),
//! }
//! ```

mod conversion;
mod decode;
mod lookup;
mod schema;

use alloy_primitives::BlockNumber;

pub use conversion::LogConversionError;
pub use decode::DecodeError;
pub use lookup::LookupError;
pub use schema::SchemaError;

/// Unified error type for transfer indexing operations.
///
/// A failed batch carries exactly one of these. Decode and lookup failures
/// identify the offending log by its position in the input batch.
#[derive(Debug, thiserror::Error)]
pub enum TransferIndexError {
    /// The interface definition could not be loaded.
    ///
    /// The indexing operations never return this variant: schema failures
    /// surface from [`InterfaceSchema`](crate::InterfaceSchema) and
    /// [`TransferIndexer::new`](crate::TransferIndexer::new) as a bare
    /// [`SchemaError`]. It exists so that callers can load a schema and index
    /// in one function with `?`.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A classified transfer log could not be decoded.
    #[error("Failed to decode log {position} (block {block_number})")]
    Decode {
        /// Position of the offending log in the input batch
        position: usize,
        /// Block that produced the offending log
        block_number: BlockNumber,
        /// The underlying decode failure
        #[source]
        source: DecodeError,
    },

    /// The block timestamp for a transfer log could not be resolved.
    #[error("Failed to resolve timestamp for log {position}")]
    Lookup {
        /// Position of the offending log in the input batch
        position: usize,
        /// The underlying lookup failure (names the block)
        #[source]
        source: LookupError,
    },
}

impl TransferIndexError {
    /// Wrap a [`DecodeError`] with the offending log's coordinates.
    pub fn decode(position: usize, block_number: BlockNumber, source: DecodeError) -> Self {
        TransferIndexError::Decode {
            position,
            block_number,
            source,
        }
    }

    /// Wrap a [`LookupError`] with the offending log's position.
    pub fn lookup(position: usize, source: LookupError) -> Self {
        TransferIndexError::Lookup { position, source }
    }

    /// Position of the offending log in the batch, if the failure was tied to one.
    pub fn position(&self) -> Option<usize> {
        match self {
            TransferIndexError::Schema(_) => None,
            TransferIndexError::Decode { position, .. }
            | TransferIndexError::Lookup { position, .. } => Some(*position),
        }
    }
}
