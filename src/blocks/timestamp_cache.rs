// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Request-scoped block timestamp cache
//!
//! Lives for a single indexing call and is dropped with it, so many transfers
//! in one block cost one lookup without any state surviving between calls.

use std::collections::HashMap;
use std::fmt;

use alloy_primitives::BlockNumber;
use serde::{Deserialize, Serialize};

use crate::types::timestamp::UnixTimestamp;

/// Statistics about cache performance over one indexing call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampCacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups resolved by the provider after missing the cache
    ///
    /// Counted when the resolved timestamp is stored, so a lookup that fails
    /// does not count.
    pub misses: u64,
    /// Distinct blocks cached
    pub entries: usize,
}

impl TimestampCacheStats {
    /// Calculates the cache hit rate as a percentage (0.0 to 100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for TimestampCacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, entries={}, hit_rate={:.1}%",
            self.hits,
            self.misses,
            self.entries,
            self.hit_rate()
        )
    }
}

#[derive(Debug, Default)]
pub(crate) struct TimestampCache {
    entries: HashMap<BlockNumber, UnixTimestamp>,
    stats: TimestampCacheStats,
}

impl TimestampCache {
    pub(crate) fn get(&mut self, block_number: BlockNumber) -> Option<UnixTimestamp> {
        let hit = self.entries.get(&block_number).copied();
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub(crate) fn insert(&mut self, block_number: BlockNumber, timestamp: UnixTimestamp) {
        if self.entries.insert(block_number, timestamp).is_none() {
            self.stats.misses += 1;
        }
        self.stats.entries = self.entries.len();
    }

    pub(crate) fn stats(&self) -> TimestampCacheStats {
        self.stats
    }
}
