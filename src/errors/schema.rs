// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading the contract interface definition.

use alloy_primitives::B256;

/// Errors that can occur while loading an [`InterfaceSchema`](crate::InterfaceSchema).
///
/// These are raised once, at construction, and are fatal to the component:
/// an indexer cannot be built from a schema that fails to load.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The interface definition is not a valid JSON ABI document.
    #[error("Interface definition is not a valid JSON ABI")]
    InvalidJson {
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The interface does not declare the requested event.
    #[error("Interface does not declare event {event}")]
    EventMissing {
        /// Name of the event that was looked up
        event: String,
    },

    /// The interface declares several overloads of the requested event.
    #[error("Interface declares {count} overloads of event {event}")]
    AmbiguousEvent {
        /// Name of the overloaded event
        event: String,
        /// Number of overloads found
        count: usize,
    },

    /// The event's parameters do not have the transfer shape.
    #[error("Unexpected shape for event {event}: {details}")]
    UnexpectedShape {
        /// Name of the offending event
        event: String,
        /// What is wrong with the parameter list
        details: String,
    },

    /// A parameter type string could not be resolved to an ABI type.
    #[error("Unresolvable parameter type {ty}")]
    UnresolvableType {
        /// The Solidity type string from the ABI
        ty: String,
        /// The underlying resolution error
        #[source]
        source: alloy_dyn_abi::Error,
    },

    /// The event's selector differs from the transfer signature hash.
    #[error("Event selector {actual} does not match transfer signature {expected}")]
    SignatureMismatch {
        /// The canonical transfer signature hash
        expected: B256,
        /// The selector computed from the schema's event
        actual: B256,
    },
}

impl SchemaError {
    /// Create an `EventMissing` error.
    pub fn event_missing(event: impl Into<String>) -> Self {
        SchemaError::EventMissing {
            event: event.into(),
        }
    }

    /// Create an `UnexpectedShape` error.
    pub fn unexpected_shape(event: impl Into<String>, details: impl Into<String>) -> Self {
        SchemaError::UnexpectedShape {
            event: event.into(),
            details: details.into(),
        }
    }

    /// Create an `UnresolvableType` error.
    pub fn unresolvable_type(ty: impl Into<String>, source: alloy_dyn_abi::Error) -> Self {
        SchemaError::UnresolvableType {
            ty: ty.into(),
            source,
        }
    }
}
