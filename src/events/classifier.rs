// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer log classification
//!
//! A log is a transfer when it carries exactly three topics (signature plus
//! the two indexed addresses) and its first topic is the transfer signature
//! hash. Anything else, including ERC-721 transfers which share the signature
//! but index a fourth topic, is skipped.

use std::collections::HashSet;

use alloy_primitives::Address;

use crate::events::definitions::TRANSFER_SIGNATURE_HASH;
use crate::types::log::RawLog;

/// Number of topics on an ERC-20 transfer log
pub const TRANSFER_TOPIC_COUNT: usize = 3;

/// Returns true iff the log has the ERC-20 transfer topic shape
///
/// # Examples
///
/// ```
/// use alloy_primitives::{Address, B256};
/// use transferscan::{is_transfer_log, RawLog, TRANSFER_SIGNATURE_HASH};
///
/// let topics = vec![*TRANSFER_SIGNATURE_HASH, B256::ZERO, B256::ZERO];
/// let log = RawLog::new(Address::ZERO, topics, vec![0u8; 32], 1);
/// assert!(is_transfer_log(&log));
///
/// let log = RawLog::new(Address::ZERO, vec![*TRANSFER_SIGNATURE_HASH], vec![], 1);
/// assert!(!is_transfer_log(&log));
/// ```
pub fn is_transfer_log(log: &RawLog) -> bool {
    log.topics.len() == TRANSFER_TOPIC_COUNT && log.topics[0] == *TRANSFER_SIGNATURE_HASH
}

/// Decides which logs the indexer turns into transfer records
///
/// Applies the topic-shape rule and, when configured, restricts matches to a
/// set of token contracts.
#[derive(Debug, Clone, Default)]
pub struct EventClassifier {
    contracts: Option<HashSet<Address>>,
}

impl EventClassifier {
    /// Classifier accepting transfers from any contract
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts matches to logs emitted by the given contracts
    pub fn with_contracts(mut self, contracts: HashSet<Address>) -> Self {
        self.contracts = Some(contracts);
        self
    }

    /// Returns true iff the log has the transfer shape and comes from a tracked contract
    pub fn matches(&self, log: &RawLog) -> bool {
        is_transfer_log(log) && self.tracks(&log.address)
    }

    /// Returns true if logs from `address` are in scope
    pub fn tracks(&self, address: &Address) -> bool {
        self.contracts
            .as_ref()
            .is_none_or(|contracts| contracts.contains(address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::B256;

    fn log_with_topics(topics: Vec<B256>) -> RawLog {
        RawLog::new(Address::repeat_byte(0xaa), topics, vec![0u8; 32], 1)
    }

    #[test]
    fn test_accepts_transfer_shape() {
        let log = log_with_topics(vec![
            *TRANSFER_SIGNATURE_HASH,
            B256::repeat_byte(1),
            B256::repeat_byte(2),
        ]);
        assert!(is_transfer_log(&log));
        assert!(EventClassifier::new().matches(&log));
    }

    #[test]
    fn test_rejects_erc721_shape() {
        // Same signature, tokenId indexed as a fourth topic
        let log = log_with_topics(vec![
            *TRANSFER_SIGNATURE_HASH,
            B256::repeat_byte(1),
            B256::repeat_byte(2),
            B256::repeat_byte(3),
        ]);
        assert!(!is_transfer_log(&log));
    }

    #[test]
    fn test_rejects_empty_topics() {
        assert!(!is_transfer_log(&log_with_topics(vec![])));
    }

    #[test]
    fn test_rejects_other_signature() {
        let log = log_with_topics(vec![
            B256::repeat_byte(0xff),
            B256::repeat_byte(1),
            B256::repeat_byte(2),
        ]);
        assert!(!is_transfer_log(&log));
    }

    #[test]
    fn test_contract_allow_list() {
        let log = log_with_topics(vec![
            *TRANSFER_SIGNATURE_HASH,
            B256::repeat_byte(1),
            B256::repeat_byte(2),
        ]);

        let tracked = EventClassifier::new()
            .with_contracts(HashSet::from([Address::repeat_byte(0xaa)]));
        assert!(tracked.matches(&log));

        let untracked = EventClassifier::new()
            .with_contracts(HashSet::from([Address::repeat_byte(0xbb)]));
        assert!(!untracked.matches(&log));
    }
}
