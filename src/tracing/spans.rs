// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for transferscan operations.
//!
//! Telemetry concerns are kept apart from pipeline logic: instead of
//! `#[instrument]` attributes, each instrumented operation has a span helper
//! here. Async operations attach the span with `Instrument` so that it
//! follows the future across await points.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     self.my_operation_inner(param)
//!         .instrument(spans::my_operation(param_value))
//!         .await
//! }
//! ```

use alloy_chains::Chain;
use alloy_primitives::BlockNumber;
use tracing::{Level, Span};

/// Create span for indexing a batch of logs.
///
/// This is the main public API entry point.
///
/// Parent: None (root span for this operation)
/// Children: process_log spans (one per matching log)
#[inline]
pub(crate) fn index_logs(chain: Chain, log_count: usize) -> Span {
    tracing::span!(
        Level::INFO,
        "transferscan.index_logs",
        chain_id = %chain,
        log_count = log_count,
    )
}

/// Create span for decoding and enriching a single transfer log.
///
/// Parent: index_logs span, or None for single-log calls
/// Children: lookup_block_timestamp span
#[inline]
pub(crate) fn process_log(position: usize, block_number: BlockNumber) -> Span {
    tracing::debug_span!(
        "transferscan.process_log",
        position = position,
        block_number = block_number,
    )
}

/// Create span for fetching a block timestamp.
///
/// Parent: process_log span
/// Children: provider RPC call
#[inline]
pub(crate) fn lookup_block_timestamp(chain: Chain, block_number: BlockNumber) -> Span {
    tracing::trace_span!(
        "transferscan.lookup_block_timestamp",
        chain_id = %chain,
        block_number = block_number,
    )
}
