// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block timestamp resolution for decoded transfers

use std::time::Duration;

use alloy_chains::Chain;
use alloy_primitives::BlockNumber;
use tracing::{debug, Instrument};

use crate::blocks::context::LookupContext;
use crate::blocks::provider::BlockTimestampProvider;
use crate::blocks::timestamp_cache::{TimestampCache, TimestampCacheStats};
use crate::errors::LookupError;
use crate::tracing::spans;
use crate::types::timestamp::UnixTimestamp;

/// Resolves block timestamps for one indexing call
///
/// Each lookup is a single provider round-trip raced against the caller's
/// [`LookupContext`] and the per-chain lookup timeout. There is no retry.
///
/// Without a cache every call reaches the provider, even for a block that was
/// just looked up. [`with_cache`](Self::with_cache) enables a cache owned by
/// this enricher, which is discarded along with it at the end of the call.
pub struct RecordEnricher<'a, B: ?Sized> {
    provider: &'a B,
    chain: Chain,
    timeout: Duration,
    cache: Option<TimestampCache>,
}

impl<'a, B: BlockTimestampProvider + ?Sized> RecordEnricher<'a, B> {
    /// Creates an uncached enricher for `chain`
    pub fn new(provider: &'a B, chain: Chain, timeout: Duration) -> Self {
        Self {
            provider,
            chain,
            timeout,
            cache: None,
        }
    }

    /// Remembers timestamps for the lifetime of this enricher
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(TimestampCache::default());
        self
    }

    /// Returns the timestamp of `block_number`
    ///
    /// # Errors
    ///
    /// - [`LookupError::Cancelled`] if the context is cancelled before or
    ///   during the lookup
    /// - [`LookupError::TimedOut`] if the lookup outlives the context deadline
    ///   or the configured timeout
    /// - any error returned by the provider
    pub async fn block_timestamp(
        &mut self,
        block_number: BlockNumber,
        ctx: &LookupContext,
    ) -> Result<UnixTimestamp, LookupError> {
        if ctx.is_cancelled() {
            return Err(LookupError::cancelled(self.chain, block_number));
        }

        if let Some(timestamp) = self.cache.as_mut().and_then(|c| c.get(block_number)) {
            return Ok(timestamp);
        }

        let timestamp = self
            .lookup(block_number, ctx)
            .instrument(spans::lookup_block_timestamp(self.chain, block_number))
            .await?;

        if let Some(cache) = self.cache.as_mut() {
            cache.insert(block_number, timestamp);
        }

        Ok(timestamp)
    }

    async fn lookup(
        &self,
        block_number: BlockNumber,
        ctx: &LookupContext,
    ) -> Result<UnixTimestamp, LookupError> {
        let chain = self.chain;
        let deadline = ctx.deadline_within(self.timeout);

        tokio::select! {
            biased;
            () = ctx.cancelled() => {
                debug!(chain_id = %chain, block_number, "Block lookup cancelled");
                Err(LookupError::cancelled(chain, block_number))
            }
            outcome = tokio::time::timeout_at(
                deadline,
                self.provider.block_timestamp(chain, block_number),
            ) => {
                outcome.unwrap_or_else(|_| {
                    debug!(
                        chain_id = %chain,
                        block_number,
                        provider = self.provider.name(),
                        "Block lookup timed out"
                    );
                    Err(LookupError::timed_out(chain, block_number))
                })
            }
        }
    }

    /// Cache statistics, if the cache is enabled
    pub fn cache_stats(&self) -> Option<TimestampCacheStats> {
        self.cache.as_ref().map(TimestampCache::stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Timestamp is block number * 12, optionally after a delay
    #[derive(Default)]
    struct SlotClock {
        calls: AtomicUsize,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl BlockTimestampProvider for SlotClock {
        async fn block_timestamp(
            &self,
            _chain: Chain,
            block_number: BlockNumber,
        ) -> Result<UnixTimestamp, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(UnixTimestamp(block_number * 12))
        }
    }

    #[tokio::test]
    async fn test_uncached_lookups_each_reach_provider() {
        let clock = SlotClock::default();
        let mut enricher = RecordEnricher::new(&clock, Chain::mainnet(), Duration::from_secs(5));
        let ctx = LookupContext::new();

        assert_eq!(enricher.block_timestamp(10, &ctx).await.unwrap(), UnixTimestamp(120));
        assert_eq!(enricher.block_timestamp(10, &ctx).await.unwrap(), UnixTimestamp(120));
        assert_eq!(clock.calls.load(Ordering::SeqCst), 2);
        assert!(enricher.cache_stats().is_none());
    }

    #[tokio::test]
    async fn test_cached_lookups_reach_provider_once_per_block() {
        let clock = SlotClock::default();
        let mut enricher =
            RecordEnricher::new(&clock, Chain::mainnet(), Duration::from_secs(5)).with_cache();
        let ctx = LookupContext::new();

        for block in [10, 10, 11, 10] {
            enricher.block_timestamp(block, &ctx).await.unwrap();
        }

        assert_eq!(clock.calls.load(Ordering::SeqCst), 2);
        let stats = enricher.cache_stats().unwrap();
        assert_eq!((stats.hits, stats.misses, stats.entries), (2, 2, 2));
    }

    #[tokio::test]
    async fn test_configured_timeout_applies() {
        let clock = SlotClock {
            delay: Some(Duration::from_secs(10)),
            ..Default::default()
        };
        let mut enricher =
            RecordEnricher::new(&clock, Chain::mainnet(), Duration::from_millis(20));

        let err = enricher
            .block_timestamp(5, &LookupContext::new())
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::TimedOut { block_number: 5, .. }));
    }

    #[tokio::test]
    async fn test_context_deadline_applies() {
        let clock = SlotClock {
            delay: Some(Duration::from_secs(10)),
            ..Default::default()
        };
        let mut enricher = RecordEnricher::new(&clock, Chain::mainnet(), Duration::from_secs(30));
        let ctx = LookupContext::new().with_timeout(Duration::from_millis(20));

        let err = enricher.block_timestamp(5, &ctx).await.unwrap_err();
        assert!(matches!(err, LookupError::TimedOut { .. }));
    }

    #[tokio::test]
    async fn test_cancelled_context_skips_provider() {
        let clock = SlotClock::default();
        let mut enricher = RecordEnricher::new(&clock, Chain::mainnet(), Duration::from_secs(5));
        let (ctx, handle) = LookupContext::cancellable();
        handle.cancel();

        let err = enricher.block_timestamp(5, &ctx).await.unwrap_err();
        assert!(matches!(err, LookupError::Cancelled { block_number: 5, .. }));
        assert_eq!(clock.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cancel_interrupts_pending_lookup() {
        let clock = SlotClock {
            delay: Some(Duration::from_secs(10)),
            ..Default::default()
        };
        let mut enricher = RecordEnricher::new(&clock, Chain::mainnet(), Duration::from_secs(30));
        let (ctx, handle) = LookupContext::cancellable();

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            handle.cancel();
        });

        let err = enricher.block_timestamp(5, &ctx).await.unwrap_err();
        assert!(matches!(err, LookupError::Cancelled { .. }));
        canceller.await.unwrap();
    }
}
