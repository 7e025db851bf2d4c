//! Binary datatypes: xsd:hexBinary and xsd:base64Binary.
//!
//! Both share the `Vec<u8>` value space and differ only in lexical form.
//! Canonical hex is uppercase; canonical base64 is the padded standard
//! alphabet without whitespace.

use super::{ComparableDatatype, Datatype, LiteralValue};
use crate::error::ParseError;
use crate::ident::{tags, LiteralTag};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::cmp::Ordering;

/// xsd:hexBinary
pub struct HexBinary;

impl Datatype for HexBinary {
    const IRI: &'static str = termstore_vocab::xsd::HEX_BINARY;
    const TAG: LiteralTag = tags::HEX_BINARY;
    type Value = Vec<u8>;

    fn parse(lexical: &str) -> Result<Vec<u8>, ParseError> {
        hex::decode(lexical).map_err(|_| ParseError::new(Self::IRI, lexical))
    }

    fn canonical(value: &Vec<u8>) -> String {
        hex::encode_upper(value)
    }

    fn wrap(value: Vec<u8>) -> LiteralValue {
        LiteralValue::Bytes(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<Vec<u8>> {
        match value {
            LiteralValue::Bytes(b) => Some(b.clone()),
            _ => None,
        }
    }
}

impl ComparableDatatype for HexBinary {
    fn compare(a: &Vec<u8>, b: &Vec<u8>) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

/// xsd:base64Binary
pub struct Base64Binary;

impl Datatype for Base64Binary {
    const IRI: &'static str = termstore_vocab::xsd::BASE64_BINARY;
    const TAG: LiteralTag = tags::BASE64_BINARY;
    type Value = Vec<u8>;

    fn parse(lexical: &str) -> Result<Vec<u8>, ParseError> {
        // XSD permits interior whitespace
        let compact: String = lexical.split_whitespace().collect();
        BASE64
            .decode(compact.as_bytes())
            .map_err(|_| ParseError::new(Self::IRI, lexical))
    }

    fn canonical(value: &Vec<u8>) -> String {
        BASE64.encode(value)
    }

    fn wrap(value: Vec<u8>) -> LiteralValue {
        LiteralValue::Bytes(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<Vec<u8>> {
        match value {
            LiteralValue::Bytes(b) => Some(b.clone()),
            _ => None,
        }
    }
}

impl ComparableDatatype for Base64Binary {
    fn compare(a: &Vec<u8>, b: &Vec<u8>) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}
