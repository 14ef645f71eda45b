// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer payload decoding
//!
//! Addresses are read straight from the indexed topics: each topic is a
//! 32-byte word holding the address in its low-order 20 bytes. The high-order
//! 12 bytes are padding and are discarded without validation. The amount is
//! decoded from the data field against the non-indexed layout of the schema.

use std::sync::Arc;

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, U256};

use crate::errors::DecodeError;
use crate::schema::InterfaceSchema;
use crate::types::{log::RawLog, record::DecodedTransfer};

/// Decodes classified transfer logs into sender, recipient and amount
#[derive(Debug, Clone)]
pub struct PayloadDecoder {
    schema: Arc<InterfaceSchema>,
}

impl PayloadDecoder {
    /// Creates a decoder for the given interface
    pub fn new(schema: Arc<InterfaceSchema>) -> Self {
        Self { schema }
    }

    /// Decodes a log already known to have the transfer shape
    ///
    /// # Errors
    ///
    /// - [`DecodeError::NotTransferEvent`] if the log does not carry exactly
    ///   three topics
    /// - [`DecodeError::PayloadLength`] if the data is shorter or longer than
    ///   the encoded amount
    /// - [`DecodeError::Abi`] or [`DecodeError::UnexpectedValue`] if the data
    ///   does not decode to an unsigned integer
    pub fn decode(&self, log: &RawLog) -> Result<DecodedTransfer, DecodeError> {
        let [_, from, to] = log.topics() else {
            return Err(DecodeError::NotTransferEvent {
                topic_count: log.topics.len(),
            });
        };

        let value = self.decode_value(&log.data)?;

        Ok(DecodedTransfer {
            from: Address::from_word(*from),
            to: Address::from_word(*to),
            value,
        })
    }

    fn decode_value(&self, data: &[u8]) -> Result<U256, DecodeError> {
        let layout = self.schema.transfer();

        if let Some(expected) = layout.body_len() {
            if data.len() != expected {
                return Err(DecodeError::payload_length(expected, data.len()));
            }
        }

        match layout.body().abi_decode_sequence(data)? {
            DynSolValue::Tuple(values) => match values.as_slice() {
                [DynSolValue::Uint(value, _)] => Ok(*value),
                other => Err(DecodeError::unexpected_value(format!(
                    "expected a single unsigned integer, found {other:?}"
                ))),
            },
            other => Err(DecodeError::unexpected_value(format!(
                "expected a tuple, found {other:?}"
            ))),
        }
    }
}
