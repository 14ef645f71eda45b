// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer indexing pipeline
//!
//! [`TransferIndexer`] runs every log of a batch through classification,
//! payload decoding and block timestamp enrichment, in input order. Logs that
//! are not ERC-20 transfers are skipped silently. The first decode or lookup
//! failure aborts the batch and no partial result is returned.
//!
//! # Examples
//!
//! ```rust,ignore
//! use alloy_chains::Chain;
//! use alloy_provider::ProviderBuilder;
//! use transferscan::{LookupContext, RpcBlockProvider, TransferIndexer};
//!
//! let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
//! let indexer = TransferIndexer::new(RpcBlockProvider::new(provider))?;
//!
//! let records = indexer
//!     .index_logs(Chain::mainnet(), &logs, &LookupContext::new())
//!     .await?;
//! ```

use std::sync::Arc;

use alloy_chains::Chain;
use async_trait::async_trait;
use tracing::{debug, info, trace, warn, Instrument};

use crate::blocks::{BlockTimestampProvider, LookupContext, RecordEnricher};
use crate::config::IndexerConfig;
use crate::errors::{DecodeError, SchemaError, TransferIndexError};
use crate::events::{is_transfer_log, EventClassifier, PayloadDecoder};
use crate::schema::InterfaceSchema;
use crate::tracing::spans;
use crate::types::{log::RawLog, record::TransferRecord};

/// Batch-indexes transfer logs
///
/// Object-safe seam for code that holds an indexer without caring which block
/// provider backs it.
#[async_trait]
pub trait TransferLogsIndexer: Send + Sync {
    /// Extracts the transfer records of `logs`, in input order
    ///
    /// All-or-nothing: either every matching log yields a record or the call
    /// fails with the first error encountered.
    async fn index_logs(
        &self,
        chain: Chain,
        logs: &[RawLog],
        ctx: &LookupContext,
    ) -> Result<Vec<TransferRecord>, TransferIndexError>;
}

/// Turns raw event logs into timestamped ERC-20 transfer records
///
/// The indexer holds no per-call state, so one instance can serve concurrent
/// calls. Each call builds its own [`RecordEnricher`] (and its own timestamp
/// cache, when enabled in [`IndexerConfig`]).
pub struct TransferIndexer<B> {
    provider: B,
    schema: Arc<InterfaceSchema>,
    classifier: EventClassifier,
    decoder: PayloadDecoder,
    config: IndexerConfig,
}

impl<B: BlockTimestampProvider> TransferIndexer<B> {
    /// Creates an indexer for the bundled ERC-20 interface with default config
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the bundled interface fails to load.
    pub fn new(provider: B) -> Result<Self, SchemaError> {
        let schema = Arc::new(InterfaceSchema::erc20()?);
        Ok(Self::with_schema(provider, schema, IndexerConfig::default()))
    }

    /// Creates an indexer for an injected interface and config
    pub fn with_schema(provider: B, schema: Arc<InterfaceSchema>, config: IndexerConfig) -> Self {
        let classifier = match &config.token_addresses {
            Some(tokens) => EventClassifier::new().with_contracts(tokens.clone()),
            None => EventClassifier::new(),
        };
        let decoder = PayloadDecoder::new(Arc::clone(&schema));

        Self {
            provider,
            schema,
            classifier,
            decoder,
            config,
        }
    }

    /// The interface this indexer decodes against
    pub fn schema(&self) -> &InterfaceSchema {
        &self.schema
    }

    /// The active configuration
    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// The block timestamp provider
    pub fn provider(&self) -> &B {
        &self.provider
    }

    /// Extracts the transfer records of `logs`, in input order
    ///
    /// # Errors
    ///
    /// - [`TransferIndexError::Decode`] if a matching log has a malformed payload
    /// - [`TransferIndexError::Lookup`] if a block timestamp cannot be
    ///   resolved, including timeout and cancellation through `ctx`
    ///
    /// Both carry the position of the offending log in `logs`.
    pub async fn index_logs(
        &self,
        chain: Chain,
        logs: &[RawLog],
        ctx: &LookupContext,
    ) -> Result<Vec<TransferRecord>, TransferIndexError> {
        self.index_logs_inner(chain, logs, ctx)
            .instrument(spans::index_logs(chain, logs.len()))
            .await
    }

    async fn index_logs_inner(
        &self,
        chain: Chain,
        logs: &[RawLog],
        ctx: &LookupContext,
    ) -> Result<Vec<TransferRecord>, TransferIndexError> {
        let mut enricher = self.enricher(chain);
        let mut records = Vec::new();

        for (position, log) in logs.iter().enumerate() {
            if !self.classifier.matches(log) {
                trace!(
                    position,
                    address = %log.address,
                    topic_count = log.topics.len(),
                    "Skipping non-transfer log"
                );
                continue;
            }

            let record = self
                .extract(&mut enricher, position, log, ctx)
                .instrument(spans::process_log(position, log.block_number))
                .await
                .inspect_err(|e| {
                    warn!(
                        chain_id = %chain,
                        position,
                        block_number = log.block_number,
                        extracted = records.len(),
                        error = %e,
                        "Aborting transfer batch"
                    );
                })?;

            records.push(record);
        }

        if let Some(stats) = enricher.cache_stats() {
            debug!(chain_id = %chain, %stats, "Block timestamp cache statistics");
        }

        info!(
            chain_id = %chain,
            log_count = logs.len(),
            transfer_count = records.len(),
            "Indexed transfer logs"
        );

        Ok(records)
    }

    /// Decodes and enriches a single log
    ///
    /// Same failure contract as [`index_logs`](Self::index_logs), scoped to
    /// one log. A log the batch operation would skip is an error here.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::NotTransferEvent`] if the log is not a transfer
    /// - [`DecodeError::UntrackedContract`] if the emitting contract is
    ///   outside the configured allow-list
    /// - otherwise as for [`index_logs`](Self::index_logs)
    ///
    /// The reported position is always 0.
    pub async fn process_log(
        &self,
        chain: Chain,
        log: &RawLog,
        ctx: &LookupContext,
    ) -> Result<TransferRecord, TransferIndexError> {
        if !is_transfer_log(log) {
            let source = DecodeError::NotTransferEvent {
                topic_count: log.topics.len(),
            };
            return Err(TransferIndexError::decode(0, log.block_number, source));
        }
        if !self.classifier.tracks(&log.address) {
            let source = DecodeError::UntrackedContract {
                address: log.address,
            };
            return Err(TransferIndexError::decode(0, log.block_number, source));
        }

        let mut enricher = self.enricher(chain);
        self.extract(&mut enricher, 0, log, ctx)
            .instrument(spans::process_log(0, log.block_number))
            .await
    }

    async fn extract(
        &self,
        enricher: &mut RecordEnricher<'_, B>,
        position: usize,
        log: &RawLog,
        ctx: &LookupContext,
    ) -> Result<TransferRecord, TransferIndexError> {
        let transfer = self
            .decoder
            .decode(log)
            .map_err(|source| TransferIndexError::decode(position, log.block_number, source))?;

        let timestamp = enricher
            .block_timestamp(log.block_number, ctx)
            .await
            .map_err(|source| TransferIndexError::lookup(position, source))?;

        trace!(
            position,
            from = %transfer.from,
            to = %transfer.to,
            value = %transfer.value,
            %timestamp,
            "Extracted transfer"
        );

        Ok(transfer.at(timestamp))
    }

    fn enricher(&self, chain: Chain) -> RecordEnricher<'_, B> {
        let enricher =
            RecordEnricher::new(&self.provider, chain, self.config.get_lookup_timeout(chain));
        if self.config.cache_block_timestamps {
            enricher.with_cache()
        } else {
            enricher
        }
    }
}

#[async_trait]
impl<B: BlockTimestampProvider> TransferLogsIndexer for TransferIndexer<B> {
    async fn index_logs(
        &self,
        chain: Chain,
        logs: &[RawLog],
        ctx: &LookupContext,
    ) -> Result<Vec<TransferRecord>, TransferIndexError> {
        TransferIndexer::index_logs(self, chain, logs, ctx).await
    }
}
