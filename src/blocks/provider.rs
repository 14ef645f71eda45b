// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block metadata providers
//!
//! [`BlockTimestampProvider`] is the capability the indexer depends on to
//! resolve block timestamps. [`RpcBlockProvider`] implements it on top of any
//! Alloy provider with `eth_getBlockByNumber`; tests and callers with their
//! own block store can implement it directly.

use std::sync::Arc;

use alloy_chains::Chain;
use alloy_primitives::BlockNumber;
use alloy_provider::Provider;
use async_trait::async_trait;

use crate::errors::LookupError;
use crate::types::timestamp::UnixTimestamp;

/// Source of block timestamps, keyed by chain and block number
///
/// Implementations perform a single round-trip per call and must not retry;
/// retry policy belongs to the caller of the indexer. Deadlines and
/// cancellation are applied around the call by
/// [`RecordEnricher`](crate::RecordEnricher), so implementations only need to
/// be cancel-safe (dropping the future abandons the request).
#[async_trait]
pub trait BlockTimestampProvider: Send + Sync {
    /// Returns the timestamp of `block_number` on `chain`
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::BlockNotFound`] if the provider has no such block
    /// and [`LookupError::ProviderFailed`] if the call itself failed.
    async fn block_timestamp(
        &self,
        chain: Chain,
        block_number: BlockNumber,
    ) -> Result<UnixTimestamp, LookupError>;

    /// Returns a human-readable name for this provider
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &'static str {
        "custom"
    }
}

#[async_trait]
impl<T: BlockTimestampProvider + ?Sized> BlockTimestampProvider for Arc<T> {
    async fn block_timestamp(
        &self,
        chain: Chain,
        block_number: BlockNumber,
    ) -> Result<UnixTimestamp, LookupError> {
        (**self).block_timestamp(chain, block_number).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Resolves block timestamps with `eth_getBlockByNumber`
///
/// The chain identifier is not checked against the provider's chain ID; it is
/// only carried into errors and logs.
///
/// # Examples
///
/// ```rust,ignore
/// use transferscan::{RpcBlockProvider, TransferIndexer};
/// use alloy_provider::ProviderBuilder;
///
/// let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
/// let indexer = TransferIndexer::new(RpcBlockProvider::new(provider))?;
/// ```
#[derive(Debug, Clone)]
pub struct RpcBlockProvider<P> {
    provider: P,
}

impl<P: Provider> RpcBlockProvider<P> {
    /// Wraps an Alloy provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The wrapped provider
    pub fn inner(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: Provider> BlockTimestampProvider for RpcBlockProvider<P> {
    async fn block_timestamp(
        &self,
        chain: Chain,
        block_number: BlockNumber,
    ) -> Result<UnixTimestamp, LookupError> {
        let block = self
            .provider
            .get_block_by_number(block_number.into())
            .await
            .map_err(|e| LookupError::provider_failed(chain, block_number, e))?
            .ok_or_else(|| LookupError::block_not_found(chain, block_number))?;

        Ok(UnixTimestamp::from_u64(block.header.timestamp))
    }

    fn name(&self) -> &'static str {
        "rpc"
    }
}
