// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # Transferscan
//!
//! Extracts ERC-20 token transfers from raw EVM event logs.
//!
//! For every log in a batch, the indexer:
//!
//! - **Classifies** it: only logs with exactly three topics whose first topic
//!   is the `Transfer(address,address,uint256)` signature hash are transfers
//! - **Decodes** sender and recipient from the indexed topics and the amount
//!   from the data payload, against a JSON ABI interface schema
//! - **Enriches** the result with the containing block's timestamp, fetched
//!   through a [`BlockTimestampProvider`]
//!
//! Output records keep the relative order of their source logs. A batch is
//! all-or-nothing: the first decode or lookup failure is returned and no
//! partial result is produced.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use alloy_chains::Chain;
//! use alloy_provider::ProviderBuilder;
//! use transferscan::{LookupContext, RawLog, RpcBlockProvider, TransferIndexer};
//!
//! let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
//! let indexer = TransferIndexer::new(RpcBlockProvider::new(provider))?;
//!
//! let logs: Vec<RawLog> = fetched.iter().map(RawLog::try_from).collect::<Result<_, _>>()?;
//! let records = indexer
//!     .index_logs(Chain::mainnet(), &logs, &LookupContext::new())
//!     .await?;
//!
//! for record in records {
//!     println!("{} -> {}: {} at {}", record.from, record.to, record.value, record.timestamp);
//! }
//! ```
//!
//! ## Configuration
//!
//! Lookup timeouts (global and per chain), the request-scoped block timestamp
//! cache, and a token contract allow-list are set through [`IndexerConfig`]:
//!
//! ```rust
//! use transferscan::IndexerConfigBuilder;
//! use std::time::Duration;
//!
//! let config = IndexerConfigBuilder::new()
//!     .lookup_timeout(Duration::from_secs(10))
//!     .cache_block_timestamps(true)
//!     .build();
//! ```
//!
//! ## Observability
//!
//! The library emits `tracing` spans and events (`transferscan.*`) but never
//! installs a subscriber; that is up to the application.

pub mod blocks;
pub mod config;
pub mod errors;
pub mod events;
pub mod indexer;
pub mod schema;
mod tracing;
pub mod types;

pub use blocks::{
    BlockTimestampProvider, CancelHandle, LookupContext, RecordEnricher, RpcBlockProvider,
    TimestampCacheStats,
};
pub use config::{ChainConfig, IndexerConfig, IndexerConfigBuilder, DEFAULT_LOOKUP_TIMEOUT};
pub use errors::{DecodeError, LogConversionError, LookupError, SchemaError, TransferIndexError};
pub use events::{
    is_transfer_log, EventClassifier, PayloadDecoder, Transfer, TRANSFER_EVENT_SIGNATURE,
    TRANSFER_SIGNATURE_HASH, TRANSFER_TOPIC_COUNT,
};
pub use indexer::{TransferIndexer, TransferLogsIndexer};
pub use schema::{InterfaceSchema, TransferLayout, ERC20_ABI};
pub use types::{
    log::RawLog,
    record::{DecodedTransfer, TransferRecord},
    timestamp::UnixTimestamp,
};
