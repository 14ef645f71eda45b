// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for the transfer pipeline.
//!
//! This module provides the pipeline's input and output shapes:
//! - Raw event logs as delivered by a chain client
//! - Decoded and enriched transfer records
//! - Block timestamps

pub mod log;
pub mod record;
pub mod timestamp;

// Note: Public types are re-exported from lib.rs, not here
