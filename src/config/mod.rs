// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for transfer indexing
//!
//! This module controls block lookup timeouts, the request-scoped timestamp
//! cache, and which token contracts are indexed.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use transferscan::IndexerConfig;
//!
//! // 30 second lookup timeout, no cache, every contract indexed
//! let config = IndexerConfig::default();
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use transferscan::IndexerConfigBuilder;
//! use alloy_chains::Chain;
//! use std::time::Duration;
//!
//! let config = IndexerConfigBuilder::new()
//!     .lookup_timeout(Duration::from_secs(10))
//!     .chain_timeout(Chain::from_id(43114), Duration::from_secs(60))
//!     .cache_block_timestamps(true)
//!     .build();
//! ```

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use alloy_chains::Chain;
use alloy_primitives::Address;

/// Default time allowed for a single block lookup
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`TransferIndexer`](crate::TransferIndexer)
///
/// Use [`IndexerConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    /// Timeout for a single block lookup
    /// Default: 30 seconds (prevents hanging on unresponsive providers)
    pub lookup_timeout: Duration,

    /// Cache block timestamps for the duration of one indexing call
    /// Default: false (every matching log issues its own lookup)
    pub cache_block_timestamps: bool,

    /// Token contracts to index; `None` indexes every contract
    /// Default: None
    pub token_addresses: Option<HashSet<Address>>,

    /// Chain-specific overrides
    pub chain_overrides: HashMap<Chain, ChainConfig>,
}

/// Chain-specific configuration overrides
#[derive(Debug, Clone, Default)]
pub struct ChainConfig {
    /// Override lookup timeout for this chain
    pub lookup_timeout: Option<Duration>,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            cache_block_timestamps: false,
            token_addresses: None,
            chain_overrides: HashMap::new(),
        }
    }
}

impl IndexerConfig {
    /// Tight settings for local nodes and tests
    ///
    /// Shorter lookup timeout, no cache, every contract indexed.
    pub fn minimal() -> Self {
        Self {
            lookup_timeout: Duration::from_secs(5),
            cache_block_timestamps: false,
            token_addresses: None,
            chain_overrides: HashMap::new(),
        }
    }

    /// Get effective lookup timeout for a specific chain
    ///
    /// Returns chain-specific override if set, otherwise returns global default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transferscan::{ChainConfig, IndexerConfig};
    /// use alloy_chains::Chain;
    /// use std::time::Duration;
    ///
    /// let mut config = IndexerConfig::default();
    /// config.set_chain_override(
    ///     Chain::from_id(10),
    ///     ChainConfig { lookup_timeout: Some(Duration::from_secs(5)) },
    /// );
    ///
    /// assert_eq!(config.get_lookup_timeout(Chain::from_id(10)), Duration::from_secs(5));
    /// assert_eq!(config.get_lookup_timeout(Chain::mainnet()), Duration::from_secs(30));
    /// ```
    pub fn get_lookup_timeout(&self, chain: Chain) -> Duration {
        self.chain_overrides
            .get(&chain)
            .and_then(|c| c.lookup_timeout)
            .unwrap_or(self.lookup_timeout)
    }

    /// Set chain-specific override
    pub fn set_chain_override(&mut self, chain: Chain, config: ChainConfig) {
        self.chain_overrides.insert(chain, config);
    }
}

/// Builder for [`IndexerConfig`]
///
/// # Example
///
/// ```rust
/// use transferscan::IndexerConfigBuilder;
/// use alloy_primitives::address;
///
/// let usdc = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
/// let config = IndexerConfigBuilder::new()
///     .token_address(usdc)
///     .build();
///
/// assert!(config.token_addresses.unwrap().contains(&usdc));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IndexerConfigBuilder {
    config: IndexerConfig,
}

impl IndexerConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set global lookup timeout
    pub fn lookup_timeout(mut self, timeout: Duration) -> Self {
        self.config.lookup_timeout = timeout;
        self
    }

    /// Enable or disable the request-scoped timestamp cache
    pub fn cache_block_timestamps(mut self, enabled: bool) -> Self {
        self.config.cache_block_timestamps = enabled;
        self
    }

    /// Add a token contract to index
    ///
    /// The first call switches the indexer from "every contract" to an
    /// allow-list.
    pub fn token_address(mut self, token: Address) -> Self {
        self.config
            .token_addresses
            .get_or_insert_with(HashSet::new)
            .insert(token);
        self
    }

    /// Add several token contracts to index
    pub fn token_addresses(mut self, tokens: impl IntoIterator<Item = Address>) -> Self {
        self.config
            .token_addresses
            .get_or_insert_with(HashSet::new)
            .extend(tokens);
        self
    }

    /// Add chain-specific configuration
    pub fn chain_config(mut self, chain: Chain, config: ChainConfig) -> Self {
        self.config.set_chain_override(chain, config);
        self
    }

    /// Convenience: set lookup timeout for a specific chain
    pub fn chain_timeout(mut self, chain: Chain, timeout: Duration) -> Self {
        self.config.set_chain_override(
            chain,
            ChainConfig {
                lookup_timeout: Some(timeout),
            },
        );
        self
    }

    /// Build the final configuration
    pub fn build(self) -> IndexerConfig {
        self.config
    }
}
