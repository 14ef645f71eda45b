// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Contract interface schema
//!
//! The schema is the JSON ABI of the token contract, parsed once and shared
//! read-only by every indexing call. Loading it resolves the `Transfer` event
//! and checks that it has the shape the decoder relies on: two indexed
//! `address` parameters followed by a single non-indexed `uint256`.
//!
//! The ERC-20 ABI is bundled ([`ERC20_ABI`]). A different definition can be
//! injected with [`InterfaceSchema::from_json`], e.g. the ABI of a specific
//! token that also declares extra functions.
//!
//! # Examples
//!
//! ```
//! use transferscan::InterfaceSchema;
//!
//! let schema = InterfaceSchema::erc20().unwrap();
//! assert_eq!(schema.transfer().event().signature(), "Transfer(address,address,uint256)");
//! assert_eq!(schema.transfer().body_len(), Some(32));
//! ```

use alloy_dyn_abi::{DynSolType, Specifier};
use alloy_json_abi::{Event, JsonAbi};
use tracing::debug;

use crate::errors::SchemaError;
use crate::events::definitions::TRANSFER_SIGNATURE_HASH;

/// JSON ABI of the ERC-20 token standard
pub const ERC20_ABI: &str = include_str!("erc20.json");

const TRANSFER_EVENT_NAME: &str = "Transfer";

/// ABI word size in bytes
const WORD_SIZE: usize = 32;

/// Parsed contract interface with the resolved transfer event
#[derive(Debug, Clone)]
pub struct InterfaceSchema {
    abi: JsonAbi,
    transfer: TransferLayout,
}

impl InterfaceSchema {
    /// Loads the bundled ERC-20 interface
    pub fn erc20() -> Result<Self, SchemaError> {
        Self::from_json(ERC20_ABI)
    }

    /// Parses a JSON ABI document
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the text is not a JSON ABI, or if its
    /// `Transfer` event is missing, overloaded, or not shaped like the ERC-20
    /// event.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let abi: JsonAbi =
            serde_json::from_str(json).map_err(|source| SchemaError::InvalidJson { source })?;
        Self::from_abi(abi)
    }

    /// Builds a schema from an already parsed ABI
    pub fn from_abi(abi: JsonAbi) -> Result<Self, SchemaError> {
        let transfer = TransferLayout::resolve(&abi)?;

        debug!(
            functions = abi.functions.len(),
            events = abi.events.len(),
            transfer_selector = %transfer.event.selector(),
            "Loaded interface schema"
        );

        Ok(Self { abi, transfer })
    }

    /// The full parsed interface
    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Layout of the transfer event
    pub fn transfer(&self) -> &TransferLayout {
        &self.transfer
    }
}

/// Resolved layout of the transfer event
///
/// Topics carry the signature and the two indexed addresses; the data field
/// carries the non-indexed parameters, ABI-encoded as a tuple.
#[derive(Debug, Clone)]
pub struct TransferLayout {
    event: Event,
    body: DynSolType,
    body_len: Option<usize>,
}

impl TransferLayout {
    fn resolve(abi: &JsonAbi) -> Result<Self, SchemaError> {
        let overloads = abi
            .event(TRANSFER_EVENT_NAME)
            .ok_or_else(|| SchemaError::event_missing(TRANSFER_EVENT_NAME))?;

        let event = match overloads.as_slice() {
            [event] => event.clone(),
            _ => {
                return Err(SchemaError::AmbiguousEvent {
                    event: TRANSFER_EVENT_NAME.to_string(),
                    count: overloads.len(),
                })
            }
        };

        if event.anonymous {
            return Err(SchemaError::unexpected_shape(
                TRANSFER_EVENT_NAME,
                "event is anonymous, topic0 would not carry the signature",
            ));
        }

        let selector = event.selector();
        if selector != *TRANSFER_SIGNATURE_HASH {
            return Err(SchemaError::SignatureMismatch {
                expected: *TRANSFER_SIGNATURE_HASH,
                actual: selector,
            });
        }

        let mut indexed = Vec::new();
        let mut body = Vec::new();
        for param in &event.inputs {
            let ty = param
                .resolve()
                .map_err(|e| SchemaError::unresolvable_type(&param.ty, e))?;
            if param.indexed {
                indexed.push(ty);
            } else {
                body.push(ty);
            }
        }

        if !matches!(indexed.as_slice(), [DynSolType::Address, DynSolType::Address]) {
            return Err(SchemaError::unexpected_shape(
                TRANSFER_EVENT_NAME,
                format!("expected two indexed address parameters, found {indexed:?}"),
            ));
        }
        if !matches!(body.as_slice(), [DynSolType::Uint(256)]) {
            return Err(SchemaError::unexpected_shape(
                TRANSFER_EVENT_NAME,
                format!("expected a single non-indexed uint256, found {body:?}"),
            ));
        }

        let body = DynSolType::Tuple(body);
        let body_len = static_size(&body);

        Ok(Self {
            event,
            body,
            body_len,
        })
    }

    /// The event definition as declared in the ABI
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Tuple type of the non-indexed parameters
    pub fn body(&self) -> &DynSolType {
        &self.body
    }

    /// Exact encoded size of the data field, if the body has no dynamic types
    pub fn body_len(&self) -> Option<usize> {
        self.body_len
    }
}

/// Encoded size in bytes of a statically sized type, `None` for dynamic types
fn static_size(ty: &DynSolType) -> Option<usize> {
    match ty {
        DynSolType::Bool
        | DynSolType::Int(_)
        | DynSolType::Uint(_)
        | DynSolType::FixedBytes(_)
        | DynSolType::Address
        | DynSolType::Function => Some(WORD_SIZE),
        DynSolType::FixedArray(inner, len) => static_size(inner).map(|size| size * len),
        DynSolType::Tuple(types) => types.iter().map(static_size).sum(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NON_INDEXED_FROM: &str = r#"[{
        "type": "event",
        "name": "Transfer",
        "inputs": [
            { "name": "from", "type": "address", "indexed": false },
            { "name": "to", "type": "address", "indexed": true },
            { "name": "value", "type": "uint256", "indexed": true }
        ],
        "anonymous": false
    }]"#;

    const NARROW_VALUE: &str = r#"[{
        "type": "event",
        "name": "Transfer",
        "inputs": [
            { "name": "from", "type": "address", "indexed": true },
            { "name": "to", "type": "address", "indexed": true },
            { "name": "value", "type": "uint128", "indexed": false }
        ],
        "anonymous": false
    }]"#;

    const ANONYMOUS: &str = r#"[{
        "type": "event",
        "name": "Transfer",
        "inputs": [
            { "name": "from", "type": "address", "indexed": true },
            { "name": "to", "type": "address", "indexed": true },
            { "name": "value", "type": "uint256", "indexed": false }
        ],
        "anonymous": true
    }]"#;

    #[test]
    fn test_bundled_erc20_schema_loads() {
        let schema = InterfaceSchema::erc20().unwrap();

        assert_eq!(schema.transfer().event().selector(), *TRANSFER_SIGNATURE_HASH);
        assert_eq!(
            schema.transfer().body(),
            &DynSolType::Tuple(vec![DynSolType::Uint(256)])
        );
        assert_eq!(schema.transfer().body_len(), Some(32));
        assert!(schema.abi().function("transferFrom").is_some());
        assert!(schema.abi().event("Approval").is_some());
    }

    #[test]
    fn test_invalid_json_is_schema_error() {
        let err = InterfaceSchema::from_json("not an abi").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidJson { .. }));
    }

    #[test]
    fn test_missing_transfer_event() {
        let err = InterfaceSchema::from_json("[]").unwrap_err();
        assert!(matches!(err, SchemaError::EventMissing { ref event } if event == "Transfer"));
    }

    #[test]
    fn test_wrong_indexing_rejected() {
        let err = InterfaceSchema::from_json(NON_INDEXED_FROM).unwrap_err();
        assert!(matches!(err, SchemaError::UnexpectedShape { .. }));
    }

    #[test]
    fn test_narrow_value_type_changes_signature() {
        let err = InterfaceSchema::from_json(NARROW_VALUE).unwrap_err();
        assert!(matches!(err, SchemaError::SignatureMismatch { .. }));
    }

    #[test]
    fn test_anonymous_event_rejected() {
        let err = InterfaceSchema::from_json(ANONYMOUS).unwrap_err();
        assert!(matches!(err, SchemaError::UnexpectedShape { .. }));
    }

    #[test]
    fn test_static_size() {
        assert_eq!(static_size(&DynSolType::Uint(8)), Some(32));
        assert_eq!(
            static_size(&DynSolType::FixedArray(Box::new(DynSolType::Address), 3)),
            Some(96)
        );
        assert_eq!(
            static_size(&DynSolType::Tuple(vec![DynSolType::Bool, DynSolType::Bytes])),
            None
        );
    }
}
