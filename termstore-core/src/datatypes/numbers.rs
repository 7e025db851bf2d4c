//! Arbitrary-precision and floating-point numeric datatypes.
//!
//! The `xsd:integer` family (including the four sign-constrained subtypes)
//! shares a `BigInt` representation; the sign-constrained types validate
//! their constraint on parse and on typed construction, and cast to/from
//! their supertype. `xsd:float`/`xsd:double` are IEEE 754 with the XSD
//! special lexical forms (`INF`, `-INF`, `NaN`); `xsd:decimal` and
//! `owl:real` use `BigDecimal`.

use super::{
    ComparableDatatype, Datatype, Inlineable, LiteralValue, Logical, SubtypeOf, inline,
};
use crate::error::{CastError, ParseError};
use crate::ident::{tags, LiteralTag};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::str::FromStr;

// ============================================================================
// Integer family (BigInt-backed)
// ============================================================================

fn parse_bigint(iri: &'static str, lexical: &str) -> Result<BigInt, ParseError> {
    // XSD integer: optional sign, one or more digits. BigInt's FromStr
    // accepts exactly that (plus nothing else we need to exclude).
    let digits = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(iri, lexical));
    }
    BigInt::from_str(lexical).map_err(|_| ParseError::new(iri, lexical))
}

fn bigint_try_inline(value: &BigInt) -> Option<u64> {
    inline::try_pack_signed(value.to_i64()?)
}

fn bigint_from_inlined(bits: u64) -> BigInt {
    BigInt::from(inline::unpack_signed(bits))
}

macro_rules! bigint_datatype {
    ($name:ident, $iri:expr, $tag:expr, $valid:expr) => {
        pub struct $name;

        impl Datatype for $name {
            const IRI: &'static str = $iri;
            const TAG: LiteralTag = $tag;
            type Value = BigInt;

            fn parse(lexical: &str) -> Result<BigInt, ParseError> {
                let value = parse_bigint(Self::IRI, lexical)?;
                if !Self::validate(&value) {
                    return Err(ParseError::new(Self::IRI, lexical));
                }
                Ok(value)
            }

            fn validate(value: &BigInt) -> bool {
                let valid: fn(&BigInt) -> bool = $valid;
                valid(value)
            }

            fn canonical(value: &BigInt) -> String {
                value.to_string()
            }

            fn wrap(value: BigInt) -> LiteralValue {
                LiteralValue::BigInt(value)
            }

            fn try_unwrap(value: &LiteralValue) -> Option<BigInt> {
                match value {
                    LiteralValue::BigInt(v) => Some(v.clone()),
                    _ => None,
                }
            }
        }

        impl Logical for $name {
            fn ebv(value: &BigInt) -> bool {
                !value.is_zero()
            }
        }

        impl ComparableDatatype for $name {
            fn compare(a: &BigInt, b: &BigInt) -> Option<Ordering> {
                Some(a.cmp(b))
            }
        }

        impl Inlineable for $name {
            fn try_inline(value: &BigInt) -> Option<u64> {
                bigint_try_inline(value)
            }

            fn from_inlined(bits: u64) -> BigInt {
                bigint_from_inlined(bits)
            }
        }
    };
}

bigint_datatype!(Integer, termstore_vocab::xsd::INTEGER, tags::INTEGER, |_| true);
bigint_datatype!(
    NonNegativeInteger,
    termstore_vocab::xsd::NON_NEGATIVE_INTEGER,
    tags::NON_NEGATIVE_INTEGER,
    |v| !v.is_negative()
);
bigint_datatype!(
    PositiveInteger,
    termstore_vocab::xsd::POSITIVE_INTEGER,
    tags::POSITIVE_INTEGER,
    |v| v.is_positive()
);
bigint_datatype!(
    NonPositiveInteger,
    termstore_vocab::xsd::NON_POSITIVE_INTEGER,
    tags::NON_POSITIVE_INTEGER,
    |v| !v.is_positive()
);
bigint_datatype!(
    NegativeInteger,
    termstore_vocab::xsd::NEGATIVE_INTEGER,
    tags::NEGATIVE_INTEGER,
    |v| v.is_negative()
);

macro_rules! bigint_subtype {
    ($name:ident, $sup:ident) => {
        impl SubtypeOf for $name {
            type Super = $sup;

            fn into_super(value: BigInt) -> BigInt {
                value
            }

            fn try_from_super(value: &BigInt) -> Result<BigInt, CastError> {
                if Self::validate(value) {
                    Ok(value.clone())
                } else {
                    Err(CastError {
                        target: Self::IRI,
                        value: value.to_string(),
                    })
                }
            }
        }
    };
}

bigint_subtype!(NonNegativeInteger, Integer);
bigint_subtype!(NonPositiveInteger, Integer);
bigint_subtype!(PositiveInteger, NonNegativeInteger);
bigint_subtype!(NegativeInteger, NonPositiveInteger);

// ============================================================================
// Float / Double
// ============================================================================

fn parse_special_float(lexical: &str) -> Option<f64> {
    match lexical {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ => None,
    }
}

/// Reject Rust-isms XSD does not allow ("inf", "infinity", "nan", hex).
fn is_xsd_float_lexical(lexical: &str) -> bool {
    !lexical.is_empty()
        && lexical
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

/// Canonical scientific notation: mantissa with a decimal point, `E`,
/// exponent without leading zeros (`1.0E2`, `-4.2E-3`, `0.0E0`).
fn canonical_scientific(formatted: String) -> String {
    match formatted.split_once('E') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{}.0E{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// xsd:float
pub struct Float;

impl Datatype for Float {
    const IRI: &'static str = termstore_vocab::xsd::FLOAT;
    const TAG: LiteralTag = tags::FLOAT;
    type Value = f32;

    fn parse(lexical: &str) -> Result<f32, ParseError> {
        if let Some(v) = parse_special_float(lexical) {
            return Ok(v as f32);
        }
        if !is_xsd_float_lexical(lexical) {
            return Err(ParseError::new(Self::IRI, lexical));
        }
        f32::from_str(lexical).map_err(|_| ParseError::new(Self::IRI, lexical))
    }

    fn canonical(value: &f32) -> String {
        if value.is_nan() {
            "NaN".into()
        } else if value.is_infinite() {
            if *value > 0.0 { "INF".into() } else { "-INF".into() }
        } else {
            canonical_scientific(format!("{:E}", value))
        }
    }

    fn wrap(value: f32) -> LiteralValue {
        LiteralValue::F32(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<f32> {
        match value {
            LiteralValue::F32(v) => Some(*v),
            _ => None,
        }
    }
}

impl Logical for Float {
    fn ebv(value: &f32) -> bool {
        !value.is_nan() && *value != 0.0
    }
}

impl ComparableDatatype for Float {
    fn compare(a: &f32, b: &f32) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

impl Inlineable for Float {
    fn try_inline(value: &f32) -> Option<u64> {
        // 32 value bits always fit in the 42 payload bits
        Some(value.to_bits() as u64)
    }

    fn from_inlined(bits: u64) -> f32 {
        f32::from_bits(bits as u32)
    }
}

/// xsd:double
pub struct Double;

impl Datatype for Double {
    const IRI: &'static str = termstore_vocab::xsd::DOUBLE;
    const TAG: LiteralTag = tags::DOUBLE;
    type Value = f64;

    fn parse(lexical: &str) -> Result<f64, ParseError> {
        if let Some(v) = parse_special_float(lexical) {
            return Ok(v);
        }
        if !is_xsd_float_lexical(lexical) {
            return Err(ParseError::new(Self::IRI, lexical));
        }
        f64::from_str(lexical).map_err(|_| ParseError::new(Self::IRI, lexical))
    }

    fn canonical(value: &f64) -> String {
        if value.is_nan() {
            "NaN".into()
        } else if value.is_infinite() {
            if *value > 0.0 { "INF".into() } else { "-INF".into() }
        } else {
            canonical_scientific(format!("{:E}", value))
        }
    }

    fn wrap(value: f64) -> LiteralValue {
        LiteralValue::F64(value)
    }

    fn try_unwrap(value: &LiteralValue) -> Option<f64> {
        match value {
            LiteralValue::F64(v) => Some(*v),
            _ => None,
        }
    }
}

impl Logical for Double {
    fn ebv(value: &f64) -> bool {
        !value.is_nan() && *value != 0.0
    }
}

impl ComparableDatatype for Double {
    fn compare(a: &f64, b: &f64) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

// ============================================================================
// Decimal / owl:real
// ============================================================================

fn parse_decimal(iri: &'static str, lexical: &str) -> Result<BigDecimal, ParseError> {
    // XSD decimal: optional sign, digits with at most one decimal point,
    // no exponent.
    let body = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
    let mut digits = 0usize;
    let mut dots = 0usize;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return Err(ParseError::new(iri, lexical)),
        }
    }
    if digits == 0 || dots > 1 {
        return Err(ParseError::new(iri, lexical));
    }
    BigDecimal::from_str(lexical).map_err(|_| ParseError::new(iri, lexical))
}

/// Canonical decimal form: normalized digits with a mandatory decimal point
/// (`2.5`, `1.0`, `-0.5`).
fn canonical_decimal(value: &BigDecimal) -> String {
    let s = value.normalized().to_string();
    if s.contains('.') { s } else { format!("{}.0", s) }
}

macro_rules! decimal_datatype {
    ($name:ident, $iri:expr, $tag:expr) => {
        pub struct $name;

        impl Datatype for $name {
            const IRI: &'static str = $iri;
            const TAG: LiteralTag = $tag;
            type Value = BigDecimal;

            fn parse(lexical: &str) -> Result<BigDecimal, ParseError> {
                parse_decimal(Self::IRI, lexical)
            }

            fn canonical(value: &BigDecimal) -> String {
                canonical_decimal(value)
            }

            fn wrap(value: BigDecimal) -> LiteralValue {
                LiteralValue::Decimal(value)
            }

            fn try_unwrap(value: &LiteralValue) -> Option<BigDecimal> {
                match value {
                    LiteralValue::Decimal(v) => Some(v.clone()),
                    _ => None,
                }
            }
        }

        impl Logical for $name {
            fn ebv(value: &BigDecimal) -> bool {
                !value.is_zero()
            }
        }

        impl ComparableDatatype for $name {
            fn compare(a: &BigDecimal, b: &BigDecimal) -> Option<Ordering> {
                Some(a.cmp(b))
            }
        }
    };
}

decimal_datatype!(Decimal, termstore_vocab::xsd::DECIMAL, tags::DECIMAL);
decimal_datatype!(OwlReal, termstore_vocab::owl::REAL, tags::OWL_REAL);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_parse_and_canonical() {
        let v = Integer::parse("0042").unwrap();
        assert_eq!(Integer::canonical(&v), "42");
        let v = Integer::parse("+7").unwrap();
        assert_eq!(Integer::canonical(&v), "7");
        let v = Integer::parse("-0").unwrap();
        assert_eq!(Integer::canonical(&v), "0");
        assert!(Integer::parse("").is_err());
        assert!(Integer::parse("1.5").is_err());
        assert!(Integer::parse("ten").is_err());
    }

    #[test]
    fn test_integer_beyond_machine_range() {
        let v = Integer::parse("123456789012345678901234567890").unwrap();
        assert_eq!(
            Integer::canonical(&v),
            "123456789012345678901234567890"
        );
        // far outside the inlinable range
        assert_eq!(Integer::try_inline(&v), None);
    }

    #[test]
    fn test_sign_constrained_parse() {
        assert!(NegativeInteger::parse("-1").is_ok());
        assert!(NegativeInteger::parse("0").is_err());
        assert!(NegativeInteger::parse("1").is_err());

        assert!(PositiveInteger::parse("1").is_ok());
        assert!(PositiveInteger::parse("0").is_err());

        assert!(NonNegativeInteger::parse("0").is_ok());
        assert!(NonNegativeInteger::parse("-1").is_err());

        assert!(NonPositiveInteger::parse("0").is_ok());
        assert!(NonPositiveInteger::parse("1").is_err());
    }

    #[test]
    fn test_sign_constrained_validate() {
        assert!(NegativeInteger::validate(&BigInt::from(-1)));
        assert!(!NegativeInteger::validate(&BigInt::from(1)));
        assert!(Integer::validate(&BigInt::from(1)));
    }

    #[test]
    fn test_subtype_casts() {
        let ok = NegativeInteger::try_from_super(&BigInt::from(-5)).unwrap();
        assert_eq!(ok, BigInt::from(-5));
        let err = NegativeInteger::try_from_super(&BigInt::from(5)).unwrap_err();
        assert_eq!(err.target, termstore_vocab::xsd::NEGATIVE_INTEGER);

        assert_eq!(
            PositiveInteger::into_super(BigInt::from(3)),
            BigInt::from(3)
        );
    }

    #[test]
    fn test_bigint_inline_round_trip() {
        for v in [0i64, 1, -1, (1 << 41) - 1, -(1 << 41)] {
            let big = BigInt::from(v);
            let bits = Integer::try_inline(&big).unwrap();
            assert_eq!(Integer::from_inlined(bits), big);
        }
        assert_eq!(Integer::try_inline(&BigInt::from(1i64 << 41)), None);
    }

    #[test]
    fn test_double_specials() {
        assert!(Double::parse("NaN").unwrap().is_nan());
        assert_eq!(Double::parse("INF").unwrap(), f64::INFINITY);
        assert_eq!(Double::parse("-INF").unwrap(), f64::NEG_INFINITY);
        assert!(Double::parse("inf").is_err());
        assert!(Double::parse("nan").is_err());

        assert_eq!(Double::canonical(&f64::NAN), "NaN");
        assert_eq!(Double::canonical(&f64::INFINITY), "INF");
        assert_eq!(Double::canonical(&f64::NEG_INFINITY), "-INF");
    }

    #[test]
    fn test_double_canonical_round_trip() {
        for &v in &[0.0f64, 1.0, -1.0, 0.5, 100.0, -4.2e-3, 1.7976931348623157e308] {
            let canon = Double::canonical(&v);
            assert!(canon.contains('E'), "canonical {} missing exponent", canon);
            let back = Double::parse(&canon).unwrap();
            assert_eq!(back.to_bits(), v.to_bits(), "round-trip failed for {}", v);
            // canonicalization is idempotent
            assert_eq!(Double::canonical(&back), canon);
        }
    }

    #[test]
    fn test_float_inline_round_trip() {
        for &v in &[0.0f32, 1.5, -2.25, f32::NAN, f32::INFINITY] {
            let bits = Float::try_inline(&v).unwrap();
            assert_eq!(Float::from_inlined(bits).to_bits(), v.to_bits());
        }
    }

    #[test]
    fn test_decimal_parse_and_canonical() {
        let v = Decimal::parse("2.50").unwrap();
        assert_eq!(Decimal::canonical(&v), "2.5");
        let v = Decimal::parse("1").unwrap();
        assert_eq!(Decimal::canonical(&v), "1.0");
        let v = Decimal::parse("-0.5").unwrap();
        assert_eq!(Decimal::canonical(&v), "-0.5");
        assert!(Decimal::parse("1e5").is_err());
        assert!(Decimal::parse("1.2.3").is_err());
        assert!(Decimal::parse(".").is_err());
    }

    #[test]
    fn test_decimal_equality_ignores_scale() {
        let a = Decimal::parse("2.50").unwrap();
        let b = Decimal::parse("2.5").unwrap();
        assert_eq!(a, b);
        assert_eq!(Decimal::compare(&a, &b), Some(Ordering::Equal));
    }

    #[test]
    fn test_numeric_ebv() {
        assert!(!Integer::ebv(&BigInt::from(0)));
        assert!(Integer::ebv(&BigInt::from(-3)));
        assert!(!Double::ebv(&0.0));
        assert!(!Double::ebv(&f64::NAN));
        assert!(Double::ebv(&1.5));
        assert!(!Decimal::ebv(&BigDecimal::from(0)));
    }

    #[test]
    fn test_float_compare_nan_unordered() {
        assert_eq!(Double::compare(&f64::NAN, &1.0), None);
        assert_eq!(Double::compare(&1.0, &2.0), Some(Ordering::Less));
    }
}
