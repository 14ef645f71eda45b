// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Event processing for ERC-20 transfers.
//!
//! This module handles:
//! - The Transfer event definition and its signature hash
//! - Classification of raw logs by topic shape
//! - Decoding of transfer payloads against the interface schema

pub mod classifier;
pub mod decoder;
pub mod definitions;

// Re-export public types
pub use classifier::{is_transfer_log, EventClassifier, TRANSFER_TOPIC_COUNT};
pub use decoder::PayloadDecoder;
pub use definitions::{Transfer, TRANSFER_EVENT_SIGNATURE, TRANSFER_SIGNATURE_HASH};
