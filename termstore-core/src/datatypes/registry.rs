//! Runtime datatype registry.
//!
//! Maps datatype IRIs (and fixed tags) to [`DatatypeEntry`] descriptors: the
//! dynamic-dispatch counterpart of the capability traits, built once into a
//! process-wide table. Call sites that know the concrete datatype at compile
//! time should use the traits directly; the registry serves handle methods
//! that only hold a tag or an IRI string.
//!
//! Lookup is a binary search over a sorted slice (by IRI) or a direct index
//! (by tag) — no string hashing on the hot path.

use super::{
    AnyUri, Base64Binary, BinOp, Boolean, Byte, ComparableDatatype, Datatype, Date, DateTime,
    DateTimeStamp, DayTimeDuration, Decimal, Double, Duration, Float, GDay, GMonth, GMonthDay,
    GYear, GYearMonth, HexBinary, Inlineable, Int, Integer, LangString, LiteralValue, Logical,
    Long, NegativeInteger, NonNegativeInteger, NonPositiveInteger, OwlReal, PositiveInteger,
    Short, Time, UnOp, UnsignedByte, UnsignedInt, UnsignedLong, UnsignedShort, XsdString,
    YearMonthDuration,
};
use crate::error::{NumericError, ParseError};
use crate::ident::{tags, LiteralTag, NodeId};
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::sync::OnceLock;

// ============================================================================
// Entry
// ============================================================================

/// Canonical numeric computation kind, ordered by promotion rank
/// (`Integer < Decimal < Float < Double < Real`).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum NumericKind {
    Integer,
    Decimal,
    Float,
    Double,
    Real,
}

impl NumericKind {
    /// Tag of the datatype results of this kind carry.
    pub fn tag(self) -> LiteralTag {
        match self {
            NumericKind::Integer => tags::INTEGER,
            NumericKind::Decimal => tags::DECIMAL,
            NumericKind::Float => tags::FLOAT,
            NumericKind::Double => tags::DOUBLE,
            NumericKind::Real => tags::OWL_REAL,
        }
    }
}

/// Numeric capability of an entry: the canonical kind computations are
/// carried out in, and the conversion into that kind's value repr.
///
/// Numeric stubs (machine ints, sign-constrained integers) point at
/// `Integer` here — that is the whole "forward computations to the
/// supertype" mechanism.
#[derive(Copy, Clone)]
pub struct NumericInfo {
    pub kind: NumericKind,
    pub to_kind: fn(&LiteralValue) -> LiteralValue,
}

/// Function-pointer descriptor of one fixed datatype.
#[derive(Copy, Clone)]
pub struct DatatypeEntry {
    /// Datatype IRI
    pub iri: &'static str,
    /// Reserved tag
    pub tag: LiteralTag,
    /// Parse a lexical form into a value
    pub parse: fn(&str) -> Result<LiteralValue, ParseError>,
    /// Canonical lexical form of a value (never fails)
    pub canonical: fn(&LiteralValue) -> String,
    /// Value-space check for typed construction
    pub validate: fn(&LiteralValue) -> bool,
    /// SPARQL effective boolean value, if the datatype has one
    pub ebv: Option<fn(&LiteralValue) -> bool>,
    /// Three-way comparison, if the datatype is ordered
    pub compare: Option<fn(&LiteralValue, &LiteralValue) -> Option<Ordering>>,
    /// Inlining: pack into 42 bits (None when the value does not fit)
    pub try_inline: Option<fn(&LiteralValue) -> Option<u64>>,
    /// Inlining: unpack from 42 bits
    pub from_inlined: Option<fn(u64) -> LiteralValue>,
    /// Numeric capability
    pub numeric: Option<NumericInfo>,
    /// IRI of the designated supertype, for subtype walking
    pub supertype: Option<&'static str>,
    /// Whether the reference storage keeps a value-keyed table for this tag
    pub specialized: bool,
}

// ---- generic trait-to-fn adapters ----

fn parse_dyn<T: Datatype>(lexical: &str) -> Result<LiteralValue, ParseError> {
    T::parse(lexical).map(T::wrap)
}

fn canonical_dyn<T: Datatype>(value: &LiteralValue) -> String {
    let typed = T::try_unwrap(value).expect("literal value repr does not match datatype");
    T::canonical(&typed)
}

fn validate_dyn<T: Datatype>(value: &LiteralValue) -> bool {
    match T::try_unwrap(value) {
        Some(typed) => T::validate(&typed),
        None => false,
    }
}

fn ebv_dyn<T: Logical>(value: &LiteralValue) -> bool {
    let typed = T::try_unwrap(value).expect("literal value repr does not match datatype");
    T::ebv(&typed)
}

fn compare_dyn<T: ComparableDatatype>(a: &LiteralValue, b: &LiteralValue) -> Option<Ordering> {
    let a = T::try_unwrap(a)?;
    let b = T::try_unwrap(b)?;
    T::compare(&a, &b)
}

fn try_inline_dyn<T: Inlineable>(value: &LiteralValue) -> Option<u64> {
    T::try_inline(&T::try_unwrap(value)?)
}

fn from_inlined_dyn<T: Inlineable>(bits: u64) -> LiteralValue {
    T::wrap(T::from_inlined(bits))
}

impl DatatypeEntry {
    fn new<T: Datatype>() -> Self {
        Self {
            iri: T::IRI,
            tag: T::TAG,
            parse: parse_dyn::<T>,
            canonical: canonical_dyn::<T>,
            validate: validate_dyn::<T>,
            ebv: None,
            compare: None,
            try_inline: None,
            from_inlined: None,
            numeric: None,
            supertype: None,
            specialized: false,
        }
    }

    fn logical<T: Logical>(mut self) -> Self {
        self.ebv = Some(ebv_dyn::<T>);
        self
    }

    fn comparable<T: ComparableDatatype>(mut self) -> Self {
        self.compare = Some(compare_dyn::<T>);
        self
    }

    fn inlineable<T: Inlineable>(mut self) -> Self {
        self.try_inline = Some(try_inline_dyn::<T>);
        self.from_inlined = Some(from_inlined_dyn::<T>);
        self
    }

    fn numeric(mut self, kind: NumericKind, to_kind: fn(&LiteralValue) -> LiteralValue) -> Self {
        self.numeric = Some(NumericInfo { kind, to_kind });
        self
    }

    fn subtype_of(mut self, supertype: &'static str) -> Self {
        self.supertype = Some(supertype);
        self
    }

    fn specialized(mut self) -> Self {
        self.specialized = true;
        self
    }
}

// ---- numeric conversion helpers ----

fn identity_value(value: &LiteralValue) -> LiteralValue {
    value.clone()
}

/// Widen any machine-int variant into the BigInt computation repr.
fn int_to_bigint(value: &LiteralValue) -> LiteralValue {
    let big = match value {
        LiteralValue::BigInt(v) => v.clone(),
        LiteralValue::I64(v) => BigInt::from(*v),
        LiteralValue::I32(v) => BigInt::from(*v),
        LiteralValue::I16(v) => BigInt::from(*v),
        LiteralValue::I8(v) => BigInt::from(*v),
        LiteralValue::U64(v) => BigInt::from(*v),
        LiteralValue::U32(v) => BigInt::from(*v),
        LiteralValue::U16(v) => BigInt::from(*v),
        LiteralValue::U8(v) => BigInt::from(*v),
        other => panic!("not an integer value: {:?}", other),
    };
    LiteralValue::BigInt(big)
}

// ============================================================================
// Table construction
// ============================================================================

fn build_entries() -> Vec<DatatypeEntry> {
    use termstore_vocab::xsd;

    let mut entries = vec![
        DatatypeEntry::new::<XsdString>()
            .logical::<XsdString>()
            .comparable::<XsdString>(),
        DatatypeEntry::new::<LangString>()
            .logical::<LangString>()
            .comparable::<LangString>(),
        DatatypeEntry::new::<AnyUri>().comparable::<AnyUri>(),
        DatatypeEntry::new::<Boolean>()
            .logical::<Boolean>()
            .comparable::<Boolean>()
            .inlineable::<Boolean>(),
        // big integer family
        DatatypeEntry::new::<Integer>()
            .logical::<Integer>()
            .comparable::<Integer>()
            .inlineable::<Integer>()
            .numeric(NumericKind::Integer, identity_value)
            .specialized(),
        DatatypeEntry::new::<NonNegativeInteger>()
            .logical::<NonNegativeInteger>()
            .comparable::<NonNegativeInteger>()
            .inlineable::<NonNegativeInteger>()
            .numeric(NumericKind::Integer, identity_value)
            .subtype_of(xsd::INTEGER)
            .specialized(),
        DatatypeEntry::new::<PositiveInteger>()
            .logical::<PositiveInteger>()
            .comparable::<PositiveInteger>()
            .inlineable::<PositiveInteger>()
            .numeric(NumericKind::Integer, identity_value)
            .subtype_of(xsd::NON_NEGATIVE_INTEGER)
            .specialized(),
        DatatypeEntry::new::<NonPositiveInteger>()
            .logical::<NonPositiveInteger>()
            .comparable::<NonPositiveInteger>()
            .inlineable::<NonPositiveInteger>()
            .numeric(NumericKind::Integer, identity_value)
            .subtype_of(xsd::INTEGER)
            .specialized(),
        DatatypeEntry::new::<NegativeInteger>()
            .logical::<NegativeInteger>()
            .comparable::<NegativeInteger>()
            .inlineable::<NegativeInteger>()
            .numeric(NumericKind::Integer, identity_value)
            .subtype_of(xsd::NON_POSITIVE_INTEGER)
            .specialized(),
        // machine ints (numeric stubs: compute in Integer)
        DatatypeEntry::new::<Long>()
            .logical::<Long>()
            .comparable::<Long>()
            .inlineable::<Long>()
            .numeric(NumericKind::Integer, int_to_bigint)
            .subtype_of(xsd::INTEGER)
            .specialized(),
        DatatypeEntry::new::<Int>()
            .logical::<Int>()
            .comparable::<Int>()
            .inlineable::<Int>()
            .numeric(NumericKind::Integer, int_to_bigint)
            .subtype_of(xsd::LONG),
        DatatypeEntry::new::<Short>()
            .logical::<Short>()
            .comparable::<Short>()
            .inlineable::<Short>()
            .numeric(NumericKind::Integer, int_to_bigint)
            .subtype_of(xsd::INT),
        DatatypeEntry::new::<Byte>()
            .logical::<Byte>()
            .comparable::<Byte>()
            .inlineable::<Byte>()
            .numeric(NumericKind::Integer, int_to_bigint)
            .subtype_of(xsd::SHORT),
        DatatypeEntry::new::<UnsignedLong>()
            .logical::<UnsignedLong>()
            .comparable::<UnsignedLong>()
            .inlineable::<UnsignedLong>()
            .numeric(NumericKind::Integer, int_to_bigint)
            .subtype_of(xsd::NON_NEGATIVE_INTEGER)
            .specialized(),
        DatatypeEntry::new::<UnsignedInt>()
            .logical::<UnsignedInt>()
            .comparable::<UnsignedInt>()
            .inlineable::<UnsignedInt>()
            .numeric(NumericKind::Integer, int_to_bigint)
            .subtype_of(xsd::UNSIGNED_LONG),
        DatatypeEntry::new::<UnsignedShort>()
            .logical::<UnsignedShort>()
            .comparable::<UnsignedShort>()
            .inlineable::<UnsignedShort>()
            .numeric(NumericKind::Integer, int_to_bigint)
            .subtype_of(xsd::UNSIGNED_INT),
        DatatypeEntry::new::<UnsignedByte>()
            .logical::<UnsignedByte>()
            .comparable::<UnsignedByte>()
            .inlineable::<UnsignedByte>()
            .numeric(NumericKind::Integer, int_to_bigint)
            .subtype_of(xsd::UNSIGNED_SHORT),
        // floating point and decimals
        DatatypeEntry::new::<Float>()
            .logical::<Float>()
            .comparable::<Float>()
            .inlineable::<Float>()
            .numeric(NumericKind::Float, identity_value),
        DatatypeEntry::new::<Double>()
            .logical::<Double>()
            .comparable::<Double>()
            .numeric(NumericKind::Double, identity_value)
            .specialized(),
        DatatypeEntry::new::<Decimal>()
            .logical::<Decimal>()
            .comparable::<Decimal>()
            .numeric(NumericKind::Decimal, identity_value)
            .specialized(),
        DatatypeEntry::new::<OwlReal>()
            .logical::<OwlReal>()
            .comparable::<OwlReal>()
            .numeric(NumericKind::Real, identity_value)
            .subtype_of(termstore_vocab::owl::RATIONAL)
            .specialized(),
        // temporal
        DatatypeEntry::new::<Date>()
            .comparable::<Date>()
            .inlineable::<Date>(),
        DatatypeEntry::new::<Time>()
            .comparable::<Time>()
            .inlineable::<Time>(),
        DatatypeEntry::new::<DateTime>()
            .comparable::<DateTime>()
            .specialized(),
        DatatypeEntry::new::<DateTimeStamp>()
            .comparable::<DateTimeStamp>()
            .subtype_of(xsd::DATE_TIME)
            .specialized(),
        DatatypeEntry::new::<GYear>()
            .comparable::<GYear>()
            .inlineable::<GYear>(),
        DatatypeEntry::new::<GMonth>()
            .comparable::<GMonth>()
            .inlineable::<GMonth>(),
        DatatypeEntry::new::<GDay>()
            .comparable::<GDay>()
            .inlineable::<GDay>(),
        DatatypeEntry::new::<GYearMonth>()
            .comparable::<GYearMonth>()
            .inlineable::<GYearMonth>(),
        DatatypeEntry::new::<GMonthDay>()
            .comparable::<GMonthDay>()
            .inlineable::<GMonthDay>(),
        DatatypeEntry::new::<Duration>()
            .comparable::<Duration>()
            .specialized(),
        DatatypeEntry::new::<YearMonthDuration>()
            .comparable::<YearMonthDuration>()
            .inlineable::<YearMonthDuration>()
            .subtype_of(xsd::DURATION)
            .specialized(),
        DatatypeEntry::new::<DayTimeDuration>()
            .comparable::<DayTimeDuration>()
            .inlineable::<DayTimeDuration>()
            .subtype_of(xsd::DURATION)
            .specialized(),
        // binary
        DatatypeEntry::new::<Base64Binary>()
            .comparable::<Base64Binary>()
            .specialized(),
        DatatypeEntry::new::<HexBinary>()
            .comparable::<HexBinary>()
            .specialized(),
    ];

    entries.sort_unstable_by_key(|e| e.iri);
    entries
}

/// The registry: entries sorted by IRI plus a direct tag index.
pub struct Registry {
    entries: Vec<DatatypeEntry>,
    by_tag: [Option<u16>; 64],
}

impl Registry {
    fn build() -> Self {
        let entries = build_entries();
        let mut by_tag = [None; 64];
        for (idx, entry) in entries.iter().enumerate() {
            let slot = &mut by_tag[entry.tag.as_u8() as usize];
            debug_assert!(slot.is_none(), "duplicate tag {:?}", entry.tag);
            *slot = Some(idx as u16);
        }
        Self { entries, by_tag }
    }

    /// Look up an entry by datatype IRI. `None` for non-fixed datatypes.
    pub fn find_by_iri(&self, iri: &str) -> Option<&DatatypeEntry> {
        self.entries
            .binary_search_by(|e| e.iri.cmp(iri))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Look up an entry by fixed tag.
    pub fn find_by_tag(&self, tag: LiteralTag) -> Option<&DatatypeEntry> {
        self.by_tag[tag.as_u8() as usize].map(|idx| &self.entries[idx as usize])
    }

    /// All fixed datatype entries.
    pub fn entries(&self) -> &[DatatypeEntry] {
        &self.entries
    }
}

/// Process-wide registry instance.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::build)
}

/// Reserved IRIs seeded into every storage's IRI table at construction:
/// every fixed datatype IRI plus the default-graph IRI and rdf:type, each at
/// the node id equal to its tag.
pub fn reserved_iris() -> impl Iterator<Item = (&'static str, NodeId)> {
    registry()
        .entries()
        .iter()
        .map(|e| (e.iri, NodeId::new(e.tag.as_u8() as u64)))
        .chain([
            (
                termstore_vocab::DEFAULT_GRAPH,
                NodeId::new(tags::DEFAULT_GRAPH.as_u8() as u64),
            ),
            (
                termstore_vocab::rdf::TYPE,
                NodeId::new(tags::RDF_TYPE.as_u8() as u64),
            ),
        ])
}

// ============================================================================
// Numeric dispatch
// ============================================================================

fn numeric_info(tag: LiteralTag) -> Result<NumericInfo, NumericError> {
    let entry = registry()
        .find_by_tag(tag)
        .ok_or(NumericError::NotNumeric("unknown"))?;
    entry.numeric.ok_or(NumericError::NotNumeric(entry.iri))
}

/// Convert a value already in `from`'s repr into `to`'s repr.
fn promote(
    value: LiteralValue,
    from: NumericKind,
    to: NumericKind,
) -> Result<LiteralValue, NumericError> {
    use NumericKind::*;
    if from == to {
        return Ok(value);
    }
    Ok(match (value, to) {
        (LiteralValue::BigInt(v), Decimal | Real) => LiteralValue::Decimal(BigDecimal::from(v)),
        (LiteralValue::BigInt(v), Float) => {
            LiteralValue::F32(v.to_f64().unwrap_or(f64::NAN) as f32)
        }
        (LiteralValue::BigInt(v), Double) => LiteralValue::F64(v.to_f64().unwrap_or(f64::NAN)),
        (LiteralValue::Decimal(v), Float) => {
            LiteralValue::F32(v.to_f64().unwrap_or(f64::NAN) as f32)
        }
        (LiteralValue::Decimal(v), Double) => LiteralValue::F64(v.to_f64().unwrap_or(f64::NAN)),
        (LiteralValue::Decimal(v), Real) => LiteralValue::Decimal(v),
        (LiteralValue::F32(v), Double) => LiteralValue::F64(v as f64),
        (LiteralValue::F32(v), Real) => LiteralValue::Decimal(
            BigDecimal::try_from(v as f64).map_err(|_| NumericError::Overflow)?,
        ),
        (LiteralValue::F64(v), Real) => {
            LiteralValue::Decimal(BigDecimal::try_from(v).map_err(|_| NumericError::Overflow)?)
        }
        (value, to) => panic!("invalid promotion {:?} -> {:?}", value, to),
    })
}

fn compute_binop(
    op: BinOp,
    kind: NumericKind,
    a: LiteralValue,
    b: LiteralValue,
) -> Result<LiteralValue, NumericError> {
    match kind {
        NumericKind::Integer => {
            let (LiteralValue::BigInt(a), LiteralValue::BigInt(b)) = (a, b) else {
                unreachable!("integer kind carries BigInt values");
            };
            Ok(LiteralValue::BigInt(match op {
                BinOp::Add => a + b,
                BinOp::Sub => a - b,
                BinOp::Mul => a * b,
                BinOp::Div => unreachable!("integer division promotes to decimal"),
            }))
        }
        NumericKind::Decimal | NumericKind::Real => {
            let (LiteralValue::Decimal(a), LiteralValue::Decimal(b)) = (a, b) else {
                unreachable!("decimal kind carries BigDecimal values");
            };
            Ok(LiteralValue::Decimal(match op {
                BinOp::Add => a + b,
                BinOp::Sub => a - b,
                BinOp::Mul => a * b,
                BinOp::Div => {
                    if b.is_zero() {
                        return Err(NumericError::DivideByZero);
                    }
                    a / b
                }
            }))
        }
        NumericKind::Float => {
            let (LiteralValue::F32(a), LiteralValue::F32(b)) = (a, b) else {
                unreachable!("float kind carries f32 values");
            };
            // IEEE semantics: division by zero yields INF/NaN, not an error
            Ok(LiteralValue::F32(match op {
                BinOp::Add => a + b,
                BinOp::Sub => a - b,
                BinOp::Mul => a * b,
                BinOp::Div => a / b,
            }))
        }
        NumericKind::Double => {
            let (LiteralValue::F64(a), LiteralValue::F64(b)) = (a, b) else {
                unreachable!("double kind carries f64 values");
            };
            Ok(LiteralValue::F64(match op {
                BinOp::Add => a + b,
                BinOp::Sub => a - b,
                BinOp::Mul => a * b,
                BinOp::Div => a / b,
            }))
        }
    }
}

fn compute_unop(
    op: UnOp,
    kind: NumericKind,
    value: LiteralValue,
) -> Result<LiteralValue, NumericError> {
    match kind {
        NumericKind::Integer => {
            let LiteralValue::BigInt(v) = value else {
                unreachable!("integer kind carries BigInt values");
            };
            Ok(LiteralValue::BigInt(match op {
                UnOp::Neg => -v,
                UnOp::Abs => v.abs(),
                // integers are already whole
                UnOp::Round | UnOp::Floor | UnOp::Ceil => v,
            }))
        }
        NumericKind::Decimal | NumericKind::Real => {
            let LiteralValue::Decimal(v) = value else {
                unreachable!("decimal kind carries BigDecimal values");
            };
            Ok(LiteralValue::Decimal(match op {
                UnOp::Neg => -v,
                UnOp::Abs => v.abs(),
                // round half toward positive infinity, per the XPath rules
                UnOp::Round => {
                    (v + BigDecimal::new(5.into(), 1)).with_scale_round(0, RoundingMode::Floor)
                }
                UnOp::Floor => v.with_scale_round(0, RoundingMode::Floor),
                UnOp::Ceil => v.with_scale_round(0, RoundingMode::Ceiling),
            }))
        }
        NumericKind::Float => {
            let LiteralValue::F32(v) = value else {
                unreachable!("float kind carries f32 values");
            };
            Ok(LiteralValue::F32(match op {
                UnOp::Neg => -v,
                UnOp::Abs => v.abs(),
                UnOp::Round => v.round(),
                UnOp::Floor => v.floor(),
                UnOp::Ceil => v.ceil(),
            }))
        }
        NumericKind::Double => {
            let LiteralValue::F64(v) = value else {
                unreachable!("double kind carries f64 values");
            };
            Ok(LiteralValue::F64(match op {
                UnOp::Neg => -v,
                UnOp::Abs => v.abs(),
                UnOp::Round => v.round(),
                UnOp::Floor => v.floor(),
                UnOp::Ceil => v.ceil(),
            }))
        }
    }
}

pub(super) fn numeric_binop(
    op: BinOp,
    lhs_tag: LiteralTag,
    lhs: &LiteralValue,
    rhs_tag: LiteralTag,
    rhs: &LiteralValue,
) -> Result<(LiteralTag, LiteralValue), NumericError> {
    let li = numeric_info(lhs_tag)?;
    let ri = numeric_info(rhs_tag)?;

    let mut kind = li.kind.max(ri.kind);
    if op == BinOp::Div && kind == NumericKind::Integer {
        kind = NumericKind::Decimal;
    }

    let a = promote((li.to_kind)(lhs), li.kind, kind)?;
    let b = promote((ri.to_kind)(rhs), ri.kind, kind)?;
    let result = compute_binop(op, kind, a, b)?;
    Ok((kind.tag(), result))
}

pub(super) fn numeric_unop(
    op: UnOp,
    tag: LiteralTag,
    value: &LiteralValue,
) -> Result<(LiteralTag, LiteralValue), NumericError> {
    let info = numeric_info(tag)?;
    let v = (info.to_kind)(value);
    let result = compute_unop(op, info.kind, v)?;
    Ok((info.kind.tag(), result))
}

/// Compare two numeric values of possibly different datatypes by promoting
/// both to their common kind. `None` if either side is not numeric or the
/// comparison is unordered (NaN).
pub fn numeric_compare(
    lhs_tag: LiteralTag,
    lhs: &LiteralValue,
    rhs_tag: LiteralTag,
    rhs: &LiteralValue,
) -> Option<Ordering> {
    let li = numeric_info(lhs_tag).ok()?;
    let ri = numeric_info(rhs_tag).ok()?;
    let kind = li.kind.max(ri.kind);
    let a = promote((li.to_kind)(lhs), li.kind, kind).ok()?;
    let b = promote((ri.to_kind)(rhs), ri.kind, kind).ok()?;
    match (a, b) {
        (LiteralValue::BigInt(a), LiteralValue::BigInt(b)) => Some(a.cmp(&b)),
        (LiteralValue::Decimal(a), LiteralValue::Decimal(b)) => Some(a.cmp(&b)),
        (LiteralValue::F32(a), LiteralValue::F32(b)) => a.partial_cmp(&b),
        (LiteralValue::F64(a), LiteralValue::F64(b)) => a.partial_cmp(&b),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_fixed_datatype() {
        // 35 datatypes: 3 strings, boolean, 5 big ints, 8 machine ints,
        // float/double/decimal/real, 12 temporal, 2 binary
        assert_eq!(registry().entries().len(), 35);
    }

    #[test]
    fn test_find_by_iri() {
        let entry = registry()
            .find_by_iri(termstore_vocab::xsd::BOOLEAN)
            .unwrap();
        assert_eq!(entry.tag, tags::BOOLEAN);
        assert!(registry().find_by_iri("http://example.org/custom").is_none());
    }

    #[test]
    fn test_find_by_tag_round_trips_with_iri() {
        for entry in registry().entries() {
            let by_tag = registry().find_by_tag(entry.tag).unwrap();
            assert_eq!(by_tag.iri, entry.iri);
        }
        assert!(registry().find_by_tag(LiteralTag::OTHER).is_none());
    }

    #[test]
    fn test_dynamic_parse_and_canonical() {
        let entry = registry()
            .find_by_iri(termstore_vocab::xsd::BOOLEAN)
            .unwrap();
        let value = (entry.parse)("1").unwrap();
        assert_eq!((entry.canonical)(&value), "true");
        assert!((entry.parse)("5").is_err());
    }

    #[test]
    fn test_reserved_iris_contains_specials() {
        let reserved: Vec<_> = reserved_iris().collect();
        assert!(reserved.iter().any(|(iri, _)| *iri == ""));
        assert!(reserved
            .iter()
            .any(|(iri, _)| *iri == termstore_vocab::rdf::TYPE));
        // each reserved id below the dynamic threshold, no duplicates
        let mut ids: Vec<u64> = reserved.iter().map(|(_, id)| id.as_u64()).collect();
        ids.sort_unstable();
        let len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len);
        assert!(ids.iter().all(|&id| id < crate::ident::MIN_DYNAMIC_IRI_ID));
    }

    #[test]
    fn test_int_plus_int_stays_integer() {
        let (tag, value) = numeric_binop(
            BinOp::Add,
            tags::INT,
            &LiteralValue::I32(2),
            tags::INT,
            &LiteralValue::I32(3),
        )
        .unwrap();
        assert_eq!(tag, tags::INTEGER);
        assert_eq!(value, LiteralValue::BigInt(BigInt::from(5)));
    }

    #[test]
    fn test_int_plus_double_promotes_to_double() {
        let (tag, value) = numeric_binop(
            BinOp::Add,
            tags::INTEGER,
            &LiteralValue::BigInt(BigInt::from(2)),
            tags::DOUBLE,
            &LiteralValue::F64(0.5),
        )
        .unwrap();
        assert_eq!(tag, tags::DOUBLE);
        assert_eq!(value, LiteralValue::F64(2.5));
    }

    #[test]
    fn test_integer_division_yields_decimal() {
        let (tag, value) = numeric_binop(
            BinOp::Div,
            tags::INTEGER,
            &LiteralValue::BigInt(BigInt::from(1)),
            tags::INTEGER,
            &LiteralValue::BigInt(BigInt::from(2)),
        )
        .unwrap();
        assert_eq!(tag, tags::DECIMAL);
        let LiteralValue::Decimal(d) = value else { panic!() };
        assert_eq!(d, BigDecimal::new(5.into(), 1));
    }

    #[test]
    fn test_decimal_division_by_zero_is_error() {
        let err = numeric_binop(
            BinOp::Div,
            tags::DECIMAL,
            &LiteralValue::Decimal(BigDecimal::from(1)),
            tags::DECIMAL,
            &LiteralValue::Decimal(BigDecimal::from(0)),
        )
        .unwrap_err();
        assert_eq!(err, NumericError::DivideByZero);
    }

    #[test]
    fn test_double_division_by_zero_is_ieee() {
        let (_, value) = numeric_binop(
            BinOp::Div,
            tags::DOUBLE,
            &LiteralValue::F64(1.0),
            tags::DOUBLE,
            &LiteralValue::F64(0.0),
        )
        .unwrap();
        assert_eq!(value, LiteralValue::F64(f64::INFINITY));
    }

    #[test]
    fn test_non_numeric_operand_rejected() {
        let err = numeric_binop(
            BinOp::Add,
            tags::STRING,
            &LiteralValue::String("a".into()),
            tags::INTEGER,
            &LiteralValue::BigInt(BigInt::from(1)),
        )
        .unwrap_err();
        assert!(matches!(err, NumericError::NotNumeric(_)));
    }

    #[test]
    fn test_unops() {
        let (tag, value) = numeric_unop(
            UnOp::Abs,
            tags::BYTE,
            &LiteralValue::I8(-5),
        )
        .unwrap();
        assert_eq!(tag, tags::INTEGER);
        assert_eq!(value, LiteralValue::BigInt(BigInt::from(5)));

        let (_, value) = numeric_unop(
            UnOp::Round,
            tags::DECIMAL,
            &LiteralValue::Decimal(BigDecimal::new(25.into(), 1)), // 2.5
        )
        .unwrap();
        let LiteralValue::Decimal(d) = value else { panic!() };
        assert_eq!(d, BigDecimal::from(3));

        // round half toward positive infinity: -2.5 -> -2
        let (_, value) = numeric_unop(
            UnOp::Round,
            tags::DECIMAL,
            &LiteralValue::Decimal(BigDecimal::new((-25).into(), 1)),
        )
        .unwrap();
        let LiteralValue::Decimal(d) = value else { panic!() };
        assert_eq!(d, BigDecimal::from(-2));
    }

    #[test]
    fn test_numeric_compare_across_types() {
        assert_eq!(
            numeric_compare(
                tags::INT,
                &LiteralValue::I32(2),
                tags::DOUBLE,
                &LiteralValue::F64(2.5)
            ),
            Some(Ordering::Less)
        );
        assert_eq!(
            numeric_compare(
                tags::INTEGER,
                &LiteralValue::BigInt(BigInt::from(3)),
                tags::DECIMAL,
                &LiteralValue::Decimal(BigDecimal::from(3))
            ),
            Some(Ordering::Equal)
        );
        assert_eq!(
            numeric_compare(
                tags::DOUBLE,
                &LiteralValue::F64(f64::NAN),
                tags::DOUBLE,
                &LiteralValue::F64(1.0)
            ),
            None
        );
        assert_eq!(
            numeric_compare(
                tags::STRING,
                &LiteralValue::String("x".into()),
                tags::DOUBLE,
                &LiteralValue::F64(1.0)
            ),
            None
        );
    }
}
