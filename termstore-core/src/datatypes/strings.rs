//! String-valued datatypes: xsd:string, rdf:langString, xsd:anyURI.
//!
//! All three store their lexical form verbatim; the lexical space is the
//! value space. `rdf:langString` values additionally carry a language tag,
//! which must be well-formed per BCP 47's basic shape (checked structurally,
//! not against the language subtag registry).

use super::{ComparableDatatype, Datatype, LiteralValue, Logical};
use crate::error::ParseError;
use crate::ident::{tags, LiteralTag};
use std::cmp::Ordering;

/// xsd:string
pub struct XsdString;

impl Datatype for XsdString {
    const IRI: &'static str = termstore_vocab::xsd::STRING;
    const TAG: LiteralTag = tags::STRING;
    type Value = String;

    fn parse(lexical: &str) -> Result<String, ParseError> {
        Ok(lexical.to_owned())
    }

    fn canonical(value: &String) -> String {
        value.clone()
    }

    fn wrap(value: String) -> LiteralValue {
        LiteralValue::String(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<String> {
        match value {
            LiteralValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl Logical for XsdString {
    fn ebv(value: &String) -> bool {
        !value.is_empty()
    }
}

impl ComparableDatatype for XsdString {
    fn compare(a: &String, b: &String) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

/// rdf:langString: a string plus a language tag.
///
/// The lexical form alone is not enough to construct a value; the parse
/// entry point accepts `value@lang` only for registry uniformity. Handles
/// construct lang strings through
/// [`Literal::new_lang`](crate::node::Literal::new_lang).
pub struct LangString;

/// Check the basic BCP 47 shape: alphanumeric subtags of 1..=8 chars
/// separated by '-', first subtag alphabetic.
pub(crate) fn is_well_formed_lang_tag(tag: &str) -> bool {
    if tag.is_empty() {
        return false;
    }
    for (i, subtag) in tag.split('-').enumerate() {
        if subtag.is_empty() || subtag.len() > 8 {
            return false;
        }
        let ok = if i == 0 {
            subtag.bytes().all(|b| b.is_ascii_alphabetic())
        } else {
            subtag.bytes().all(|b| b.is_ascii_alphanumeric())
        };
        if !ok {
            return false;
        }
    }
    true
}

impl Datatype for LangString {
    const IRI: &'static str = termstore_vocab::rdf::LANG_STRING;
    const TAG: LiteralTag = tags::LANG_STRING;
    type Value = (String, String);

    fn parse(lexical: &str) -> Result<(String, String), ParseError> {
        let (value, lang) = lexical
            .rsplit_once('@')
            .ok_or_else(|| ParseError::new(Self::IRI, lexical))?;
        if !is_well_formed_lang_tag(lang) {
            return Err(ParseError::new(Self::IRI, lexical));
        }
        Ok((value.to_owned(), lang.to_ascii_lowercase()))
    }

    fn canonical(value: &(String, String)) -> String {
        // canonical form of the *value* part; the tag is serialized by writers
        value.0.clone()
    }

    fn wrap(value: (String, String)) -> LiteralValue {
        LiteralValue::LangString(value.0, value.1)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<(String, String)> {
        match value {
            LiteralValue::LangString(s, l) => Some((s.clone(), l.clone())),
            _ => None,
        }
    }
}

impl Logical for LangString {
    fn ebv(value: &(String, String)) -> bool {
        !value.0.is_empty()
    }
}

impl ComparableDatatype for LangString {
    fn compare(a: &(String, String), b: &(String, String)) -> Option<Ordering> {
        // language tag first so same-language runs sort together
        Some(a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
    }
}

/// xsd:anyURI. Stored verbatim; only whitespace-free-ness is checked.
pub struct AnyUri;

impl Datatype for AnyUri {
    const IRI: &'static str = termstore_vocab::xsd::ANY_URI;
    const TAG: LiteralTag = tags::ANY_URI;
    type Value = String;

    fn parse(lexical: &str) -> Result<String, ParseError> {
        if lexical.chars().any(char::is_whitespace) {
            return Err(ParseError::new(Self::IRI, lexical));
        }
        Ok(lexical.to_owned())
    }

    fn canonical(value: &String) -> String {
        value.clone()
    }

    fn wrap(value: String) -> LiteralValue {
        LiteralValue::String(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<String> {
        match value {
            LiteralValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl ComparableDatatype for AnyUri {
    fn compare(a: &String, b: &String) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}
