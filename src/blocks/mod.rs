// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block timestamp enrichment.
//!
//! This module provides functionality for:
//! - Resolving block timestamps through a pluggable provider
//! - Honoring caller deadlines and cancellation on every lookup
//! - Optionally caching timestamps for the duration of one indexing call

pub mod context;
pub mod enricher;
pub mod provider;
pub mod timestamp_cache;

// Re-export public API
pub use context::{CancelHandle, LookupContext};
pub use enricher::RecordEnricher;
pub use provider::{BlockTimestampProvider, RpcBlockProvider};
pub use timestamp_cache::TimestampCacheStats;
