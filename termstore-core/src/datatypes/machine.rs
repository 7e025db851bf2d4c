//! Machine-width integer subtypes: xsd:long/int/short/byte and the
//! unsigned variants.
//!
//! These are numeric stubs: they carry their own bounded representation but
//! forward arithmetic to `xsd:integer` (see the registry). Each type casts
//! to its XSD supertype, forming the chains
//! `byte < short < int < long < integer` and
//! `unsignedByte < … < unsignedLong < nonNegativeInteger`.

use super::numbers::{Integer, NonNegativeInteger};
use super::{
    ComparableDatatype, Datatype, Inlineable, LiteralValue, Logical, SubtypeOf, inline,
};
use crate::error::{CastError, ParseError};
use crate::ident::{tags, LiteralTag};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::cmp::Ordering;

fn check_integer_lexical(iri: &'static str, lexical: &str) -> Result<(), ParseError> {
    let digits = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(iri, lexical));
    }
    Ok(())
}

macro_rules! machine_int {
    ($name:ident, $repr:ty, $iri:expr, $tag:expr, $variant:ident,
     try_inline: $try_inline:expr, from_inlined: $from_inlined:expr) => {
        pub struct $name;

        impl Datatype for $name {
            const IRI: &'static str = $iri;
            const TAG: LiteralTag = $tag;
            type Value = $repr;

            fn parse(lexical: &str) -> Result<$repr, ParseError> {
                check_integer_lexical(Self::IRI, lexical)?;
                // range errors surface here as parse failures
                lexical
                    .trim_start_matches('+')
                    .parse::<$repr>()
                    .map_err(|_| ParseError::new(Self::IRI, lexical))
            }

            fn canonical(value: &$repr) -> String {
                value.to_string()
            }

            fn wrap(value: $repr) -> LiteralValue {
                LiteralValue::$variant(value)
            }

            fn try_unwrap(value: &LiteralValue) -> Option<$repr> {
                match value {
                    LiteralValue::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }

        impl Logical for $name {
            fn ebv(value: &$repr) -> bool {
                *value != 0
            }
        }

        impl ComparableDatatype for $name {
            fn compare(a: &$repr, b: &$repr) -> Option<Ordering> {
                Some(a.cmp(b))
            }
        }

        impl Inlineable for $name {
            fn try_inline(value: &$repr) -> Option<u64> {
                let f: fn(&$repr) -> Option<u64> = $try_inline;
                f(value)
            }

            fn from_inlined(bits: u64) -> $repr {
                let f: fn(u64) -> $repr = $from_inlined;
                f(bits)
            }
        }
    };
}

machine_int!(Long, i64, termstore_vocab::xsd::LONG, tags::LONG, I64,
    try_inline: |v| inline::try_pack_signed(*v),
    from_inlined: |b| inline::unpack_signed(b));
machine_int!(Int, i32, termstore_vocab::xsd::INT, tags::INT, I32,
    try_inline: |v| inline::try_pack_signed(*v as i64),
    from_inlined: |b| inline::unpack_signed(b) as i32);
machine_int!(Short, i16, termstore_vocab::xsd::SHORT, tags::SHORT, I16,
    try_inline: |v| inline::try_pack_signed(*v as i64),
    from_inlined: |b| inline::unpack_signed(b) as i16);
machine_int!(Byte, i8, termstore_vocab::xsd::BYTE, tags::BYTE, I8,
    try_inline: |v| inline::try_pack_signed(*v as i64),
    from_inlined: |b| inline::unpack_signed(b) as i8);

machine_int!(UnsignedLong, u64, termstore_vocab::xsd::UNSIGNED_LONG, tags::UNSIGNED_LONG, U64,
    try_inline: |v| inline::try_pack_unsigned(*v),
    from_inlined: |b| inline::unpack_unsigned(b));
machine_int!(UnsignedInt, u32, termstore_vocab::xsd::UNSIGNED_INT, tags::UNSIGNED_INT, U32,
    try_inline: |v| inline::try_pack_unsigned(*v as u64),
    from_inlined: |b| inline::unpack_unsigned(b) as u32);
machine_int!(UnsignedShort, u16, termstore_vocab::xsd::UNSIGNED_SHORT, tags::UNSIGNED_SHORT, U16,
    try_inline: |v| inline::try_pack_unsigned(*v as u64),
    from_inlined: |b| inline::unpack_unsigned(b) as u16);
machine_int!(UnsignedByte, u8, termstore_vocab::xsd::UNSIGNED_BYTE, tags::UNSIGNED_BYTE, U8,
    try_inline: |v| inline::try_pack_unsigned(*v as u64),
    from_inlined: |b| inline::unpack_unsigned(b) as u8);

// ---- Subtype chains ----

macro_rules! widening_subtype {
    ($name:ident => $sup:ident, $sub_repr:ty, $sup_repr:ty) => {
        impl SubtypeOf for $name {
            type Super = $sup;

            fn into_super(value: $sub_repr) -> $sup_repr {
                value as $sup_repr
            }

            fn try_from_super(value: &$sup_repr) -> Result<$sub_repr, CastError> {
                <$sub_repr>::try_from(*value).map_err(|_| CastError {
                    target: Self::IRI,
                    value: value.to_string(),
                })
            }
        }
    };
}

widening_subtype!(Byte => Short, i8, i16);
widening_subtype!(Short => Int, i16, i32);
widening_subtype!(Int => Long, i32, i64);
widening_subtype!(UnsignedByte => UnsignedShort, u8, u16);
widening_subtype!(UnsignedShort => UnsignedInt, u16, u32);
widening_subtype!(UnsignedInt => UnsignedLong, u32, u64);

impl SubtypeOf for Long {
    type Super = Integer;

    fn into_super(value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn try_from_super(value: &BigInt) -> Result<i64, CastError> {
        value.to_i64().ok_or_else(|| CastError {
            target: Self::IRI,
            value: value.to_string(),
        })
    }
}

impl SubtypeOf for UnsignedLong {
    type Super = NonNegativeInteger;

    fn into_super(value: u64) -> BigInt {
        BigInt::from(value)
    }

    fn try_from_super(value: &BigInt) -> Result<u64, CastError> {
        value.to_u64().ok_or_else(|| CastError {
            target: Self::IRI,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_respects_machine_range() {
        assert_eq!(Byte::parse("127"), Ok(127));
        assert!(Byte::parse("128").is_err());
        assert_eq!(Byte::parse("-128"), Ok(-128));
        assert!(Byte::parse("-129").is_err());

        assert!(UnsignedByte::parse("-1").is_err());
        assert_eq!(UnsignedByte::parse("255"), Ok(255));
    }

    #[test]
    fn test_parse_accepts_plus_and_leading_zeros() {
        assert_eq!(Int::parse("+042"), Ok(42));
        assert_eq!(Int::canonical(&42), "42");
    }

    #[test]
    fn test_small_types_always_inline() {
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            let bits = Int::try_inline(&v).unwrap();
            assert_eq!(Int::from_inlined(bits), v);
        }
        for v in [0u32, 1, u32::MAX] {
            let bits = UnsignedInt::try_inline(&v).unwrap();
            assert_eq!(UnsignedInt::from_inlined(bits), v);
        }
    }

    #[test]
    fn test_wide_types_inline_only_when_fitting() {
        assert!(Long::try_inline(&((1 << 41) - 1)).is_some());
        assert!(Long::try_inline(&(1 << 41)).is_none());
        assert!(Long::try_inline(&i64::MIN).is_none());

        assert!(UnsignedLong::try_inline(&((1 << 42) - 1)).is_some());
        assert!(UnsignedLong::try_inline(&(1 << 42)).is_none());
    }

    #[test]
    fn test_long_inline_round_trip() {
        for v in [-(1i64 << 41), -5, 0, 5, (1 << 41) - 1] {
            let bits = Long::try_inline(&v).unwrap();
            assert_eq!(Long::from_inlined(bits), v);
        }
    }

    #[test]
    fn test_subtype_chain_casts() {
        assert_eq!(Byte::into_super(-5i8), -5i16);
        assert_eq!(Byte::try_from_super(&100i16), Ok(100i8));
        assert!(Byte::try_from_super(&1000i16).is_err());

        assert_eq!(Long::into_super(7), BigInt::from(7));
        assert_eq!(Long::try_from_super(&BigInt::from(7)), Ok(7i64));
        let too_big = BigInt::from(i64::MAX) + 1;
        assert!(Long::try_from_super(&too_big).is_err());

        assert_eq!(UnsignedLong::try_from_super(&BigInt::from(-1)).ok(), None);
    }
}
