// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for transfer classification and decoding
//!
//! These tests use proptest to validate the topic-shape rule and the payload
//! decoding laws across arbitrary addresses, amounts and malformed inputs.

use std::sync::Arc;

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::SolEvent;
use proptest::prelude::*;
use transferscan::{
    is_transfer_log, DecodeError, InterfaceSchema, PayloadDecoder, RawLog, Transfer,
    TRANSFER_SIGNATURE_HASH,
};

fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

fn arb_word() -> impl Strategy<Value = B256> {
    any::<[u8; 32]>().prop_map(B256::from)
}

fn arb_u256() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(U256::from_limbs)
}

fn decoder() -> PayloadDecoder {
    PayloadDecoder::new(Arc::new(InterfaceSchema::erc20().unwrap()))
}

proptest! {
    /// Property: Logs without exactly three topics are never transfers
    #[test]
    fn prop_wrong_topic_count_never_matches(
        topics in prop::collection::vec(arb_word(), 0..=4),
        data in prop::collection::vec(any::<u8>(), 0..96),
    ) {
        prop_assume!(topics.len() != 3);

        let mut topics = topics;
        if let Some(first) = topics.first_mut() {
            // Even with the right signature in place
            *first = *TRANSFER_SIGNATURE_HASH;
        }

        let log = RawLog::new(Address::ZERO, topics, data, 1);
        prop_assert!(!is_transfer_log(&log));
    }

    /// Property: Three topics with a foreign signature are never transfers
    #[test]
    fn prop_wrong_signature_never_matches(
        signature in arb_word(),
        from in arb_word(),
        to in arb_word(),
    ) {
        prop_assume!(signature != *TRANSFER_SIGNATURE_HASH);

        let log = RawLog::new(Address::ZERO, vec![signature, from, to], vec![0u8; 32], 1);
        prop_assert!(!is_transfer_log(&log));
    }

    /// Property: Encoding a transfer as a log and decoding it yields the encoded triple
    #[test]
    fn prop_encoded_transfer_decodes(
        token in arb_address(),
        from in arb_address(),
        to in arb_address(),
        value in arb_u256(),
        block in any::<u64>(),
    ) {
        let event = Transfer { from, to, value };
        let log = RawLog::from_log_data(token, event.encode_log_data(), block);

        prop_assert!(is_transfer_log(&log));

        let decoded = decoder().decode(&log).unwrap();
        prop_assert_eq!(decoded.from, from);
        prop_assert_eq!(decoded.to, to);
        prop_assert_eq!(decoded.value, value);
    }

    /// Property: Address padding in the topic words is ignored
    #[test]
    fn prop_topic_padding_is_discarded(
        from in arb_word(),
        to in arb_word(),
        value in arb_u256(),
    ) {
        let log = RawLog::new(
            Address::ZERO,
            vec![*TRANSFER_SIGNATURE_HASH, from, to],
            value.to_be_bytes::<32>().to_vec(),
            1,
        );

        let decoded = decoder().decode(&log).unwrap();
        prop_assert_eq!(decoded.from.as_slice(), &from[12..]);
        prop_assert_eq!(decoded.to.as_slice(), &to[12..]);
        prop_assert_eq!(decoded.value, value);
    }

    /// Property: Any payload shorter than one word is a decode error
    #[test]
    fn prop_short_payload_is_rejected(
        data in prop::collection::vec(any::<u8>(), 0..32),
        from in arb_word(),
        to in arb_word(),
    ) {
        let len = data.len();
        let log = RawLog::new(Address::ZERO, vec![*TRANSFER_SIGNATURE_HASH, from, to], data, 1);

        let err = decoder().decode(&log).unwrap_err();
        prop_assert!(
            matches!(err, DecodeError::PayloadLength { expected: 32, actual } if actual == len),
            "unexpected error: {err:?}"
        );
    }
}
