// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer records produced by the pipeline

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::timestamp::UnixTimestamp;

/// Sender, recipient and amount decoded from a transfer log
///
/// Intermediate result of payload decoding, before block enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedTransfer {
    /// Address tokens were transferred from (zero for mints)
    pub from: Address,
    /// Address tokens were transferred to (zero for burns)
    pub to: Address,
    /// Raw token amount, not adjusted for decimals
    pub value: U256,
}

impl DecodedTransfer {
    /// Attaches the containing block's timestamp
    pub fn at(self, timestamp: UnixTimestamp) -> TransferRecord {
        TransferRecord {
            from: self.from,
            to: self.to,
            value: self.value,
            timestamp,
        }
    }
}

/// A single ERC-20 transfer, enriched with its block timestamp
///
/// # Units
///
/// `value` is the raw token amount. To get the human-readable amount, divide
/// by 10^decimals for the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Address tokens were transferred from
    pub from: Address,
    /// Address tokens were transferred to
    pub to: Address,
    /// Raw token amount (unsigned, never negative)
    pub value: U256,
    /// Unix timestamp of the block containing the transfer
    pub timestamp: UnixTimestamp,
}
