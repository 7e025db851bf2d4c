//! Typed literal system: value representations and capability traits.
//!
//! Every *fixed* datatype (known at compile time, carrying a reserved
//! [`LiteralTag`](crate::ident::LiteralTag)) is a unit struct implementing
//! [`Datatype`] plus an opt-in subset of the capability traits below. The
//! runtime registry ([`registry`]) exposes the same capabilities through a
//! table of function pointers for call sites that only have a datatype IRI.
//!
//! Datatypes not in the fixed set take the generic path: their lexical form,
//! datatype IRI, and language tag are stored verbatim with no structural
//! validation.

pub mod inline;
pub mod registry;

mod binary;
mod boolean;
mod machine;
mod numbers;
mod strings;
mod temporal;

pub use binary::{Base64Binary, HexBinary};
pub use boolean::Boolean;
pub use machine::{
    Byte, Int, Long, Short, UnsignedByte, UnsignedInt, UnsignedLong, UnsignedShort,
};
pub use numbers::{
    Decimal, Double, Float, Integer, NegativeInteger, NonNegativeInteger, NonPositiveInteger,
    OwlReal, PositiveInteger,
};
pub use strings::{AnyUri, LangString, XsdString};
pub(crate) use strings::is_well_formed_lang_tag;
pub use temporal::{
    Date, DateTime, DateTimeStamp, DayTimeDuration, Duration, GDay, GMonth, GMonthDay, GYear,
    GYearMonth, Time, YearMonthDuration,
};

use crate::error::{CastError, NumericError, ParseError};
use crate::ident::LiteralTag;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// In-memory value of a fixed-datatype literal.
///
/// One variant per distinct value representation; several datatypes share a
/// variant (e.g. the sign-constrained integer types all use `BigInt`).
/// Equality and hashing are structural; floats compare by bit pattern so the
/// type is usable as an interning key (NaN == NaN, +0.0 != -0.0).
#[derive(Clone, Debug)]
pub enum LiteralValue {
    Bool(bool),
    /// Unbounded integer (xsd:integer and its sign-constrained subtypes)
    BigInt(BigInt),
    I64(i64),
    I32(i32),
    I16(i16),
    I8(i8),
    U64(u64),
    U32(u32),
    U16(u16),
    U8(u8),
    F32(f32),
    F64(f64),
    /// Arbitrary-precision decimal (xsd:decimal, owl:real)
    Decimal(BigDecimal),
    String(String),
    /// Language-tagged string: (value, language tag)
    LangString(String, String),
    Bytes(Vec<u8>),
    Date(chrono::NaiveDate),
    Time(chrono::NaiveTime),
    /// Local timestamp plus optional UTC offset in seconds
    DateTime(chrono::NaiveDateTime, Option<i32>),
    GYear(i32),
    GMonth(u8),
    GDay(u8),
    /// (year, month)
    GYearMonth(i32, u8),
    /// (month, day)
    GMonthDay(u8, u8),
    /// Full duration: total months and total microseconds
    Duration(i64, i64),
    /// xsd:yearMonthDuration: total months
    YearMonthDuration(i64),
    /// xsd:dayTimeDuration: total microseconds
    DayTimeDuration(i64),
}

impl PartialEq for LiteralValue {
    fn eq(&self, other: &Self) -> bool {
        use LiteralValue::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a == b,
            (BigInt(a), BigInt(b)) => a == b,
            (I64(a), I64(b)) => a == b,
            (I32(a), I32(b)) => a == b,
            (I16(a), I16(b)) => a == b,
            (I8(a), I8(b)) => a == b,
            (U64(a), U64(b)) => a == b,
            (U32(a), U32(b)) => a == b,
            (U16(a), U16(b)) => a == b,
            (U8(a), U8(b)) => a == b,
            (F32(a), F32(b)) => a.to_bits() == b.to_bits(),
            (F64(a), F64(b)) => a.to_bits() == b.to_bits(),
            (Decimal(a), Decimal(b)) => a == b,
            (String(a), String(b)) => a == b,
            (LangString(a, la), LangString(b, lb)) => a == b && la == lb,
            (Bytes(a), Bytes(b)) => a == b,
            (Date(a), Date(b)) => a == b,
            (Time(a), Time(b)) => a == b,
            (DateTime(a, oa), DateTime(b, ob)) => a == b && oa == ob,
            (GYear(a), GYear(b)) => a == b,
            (GMonth(a), GMonth(b)) => a == b,
            (GDay(a), GDay(b)) => a == b,
            (GYearMonth(ya, ma), GYearMonth(yb, mb)) => ya == yb && ma == mb,
            (GMonthDay(ma, da), GMonthDay(mb, db)) => ma == mb && da == db,
            (Duration(ma, ua), Duration(mb, ub)) => ma == mb && ua == ub,
            (YearMonthDuration(a), YearMonthDuration(b)) => a == b,
            (DayTimeDuration(a), DayTimeDuration(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for LiteralValue {}

impl Hash for LiteralValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use LiteralValue::*;
        std::mem::discriminant(self).hash(state);
        match self {
            Bool(v) => v.hash(state),
            BigInt(v) => v.hash(state),
            I64(v) => v.hash(state),
            I32(v) => v.hash(state),
            I16(v) => v.hash(state),
            I8(v) => v.hash(state),
            U64(v) => v.hash(state),
            U32(v) => v.hash(state),
            U16(v) => v.hash(state),
            U8(v) => v.hash(state),
            F32(v) => v.to_bits().hash(state),
            F64(v) => v.to_bits().hash(state),
            Decimal(v) => v.hash(state),
            String(v) => v.hash(state),
            LangString(v, l) => {
                v.hash(state);
                l.hash(state);
            }
            Bytes(v) => v.hash(state),
            Date(v) => v.hash(state),
            Time(v) => v.hash(state),
            DateTime(v, o) => {
                v.hash(state);
                o.hash(state);
            }
            GYear(v) => v.hash(state),
            GMonth(v) => v.hash(state),
            GDay(v) => v.hash(state),
            GYearMonth(y, m) => {
                y.hash(state);
                m.hash(state);
            }
            GMonthDay(m, d) => {
                m.hash(state);
                d.hash(state);
            }
            Duration(m, u) => {
                m.hash(state);
                u.hash(state);
            }
            YearMonthDuration(v) => v.hash(state),
            DayTimeDuration(v) => v.hash(state),
        }
    }
}

// ============================================================================
// Capability traits
// ============================================================================

/// Base capability of every fixed datatype: lexical parsing and canonical
/// serialization.
///
/// `parse` fails with a [`ParseError`] on malformed lexical forms.
/// `canonical` never fails: every representable value has exactly one
/// canonical lexical form (booleans serialize as `"true"`/`"false"` even
/// though `"1"`/`"0"` are accepted on parse).
pub trait Datatype {
    /// Datatype IRI
    const IRI: &'static str;
    /// Reserved tag in the fixed schedule
    const TAG: LiteralTag;
    /// In-memory value representation
    type Value: Clone + PartialEq;

    /// Parse a lexical form
    fn parse(lexical: &str) -> Result<Self::Value, ParseError>;

    /// Check that a programmatically supplied value is inside the datatype's
    /// value space (e.g. sign constraints on xsd:negativeInteger).
    ///
    /// `parse` output is always valid; this hook guards typed construction.
    fn validate(_value: &Self::Value) -> bool {
        true
    }

    /// Serialize a value to its canonical lexical form
    fn canonical(value: &Self::Value) -> String;

    /// Wrap a typed value into the uniform runtime representation
    fn wrap(value: Self::Value) -> LiteralValue;

    /// Recover the typed value from the uniform representation
    ///
    /// Returns `None` if the variant does not match this datatype's repr.
    fn try_unwrap(value: &LiteralValue) -> Option<Self::Value>;
}

/// SPARQL effective boolean value.
///
/// Empty strings, zero, and NaN coerce to false.
pub trait Logical: Datatype {
    fn ebv(value: &Self::Value) -> bool;
}

/// Three-way comparison within the datatype's value space.
///
/// `None` means unordered (e.g. NaN against anything).
pub trait ComparableDatatype: Datatype {
    fn compare(a: &Self::Value, b: &Self::Value) -> Option<Ordering>;
}

/// Bit-packing into the 42 literal-id bits of a node id.
///
/// `try_inline` returns `None` when the value does not fit; the literal then
/// falls back to a normal backend table entry with identical observable
/// behavior. `from_inlined` is the exact inverse for every packed value.
pub trait Inlineable: Datatype {
    fn try_inline(value: &Self::Value) -> Option<u64>;
    fn from_inlined(bits: u64) -> Self::Value;
}

/// Subtype relation to a designated supertype.
///
/// `into_super` always succeeds (widening); `try_from_super` fails with a
/// [`CastError`] when the value is outside the narrower range.
pub trait SubtypeOf: Datatype {
    type Super: Datatype;

    fn into_super(value: Self::Value) -> <Self::Super as Datatype>::Value;
    fn try_from_super(value: &<Self::Super as Datatype>::Value)
        -> Result<Self::Value, CastError>;
}

// ============================================================================
// Numeric dispatch
// ============================================================================

/// Binary numeric operations
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Unary numeric operations
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum UnOp {
    Neg,
    Abs,
    Round,
    Floor,
    Ceil,
}

/// Apply a binary numeric operation to two typed literal values.
///
/// Both operands are identified by their datatype tag. Numeric subtypes
/// forward to their canonical computation type (the integer family computes
/// in `xsd:integer`); mixed-type operands are promoted to the higher-ranked
/// type (`integer < decimal < float < double < owl:real`). Integer division
/// produces a decimal, per the XPath operator mapping.
///
/// Returns the result value together with the tag of the type the
/// computation was carried out in.
pub fn numeric_binop(
    op: BinOp,
    lhs_tag: LiteralTag,
    lhs: &LiteralValue,
    rhs_tag: LiteralTag,
    rhs: &LiteralValue,
) -> Result<(LiteralTag, LiteralValue), NumericError> {
    registry::numeric_binop(op, lhs_tag, lhs, rhs_tag, rhs)
}

/// Apply a unary numeric operation to a typed literal value.
///
/// Subtype forwarding works as in [`numeric_binop`]; the result carries the
/// tag of the canonical computation type.
pub fn numeric_unop(
    op: UnOp,
    tag: LiteralTag,
    value: &LiteralValue,
) -> Result<(LiteralTag, LiteralValue), NumericError> {
    registry::numeric_unop(op, tag, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_values_compare_by_bits() {
        let nan1 = LiteralValue::F64(f64::NAN);
        let nan2 = LiteralValue::F64(f64::NAN);
        assert_eq!(nan1, nan2);

        let pos = LiteralValue::F64(0.0);
        let neg = LiteralValue::F64(-0.0);
        assert_ne!(pos, neg);
    }

    #[test]
    fn test_values_of_different_variants_are_unequal() {
        assert_ne!(LiteralValue::I64(1), LiteralValue::I32(1));
        assert_ne!(
            LiteralValue::String("a".into()),
            LiteralValue::LangString("a".into(), "en".into())
        );
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(LiteralValue::Bool(true));
        set.insert(LiteralValue::Bool(true));
        set.insert(LiteralValue::F64(f64::NAN));
        set.insert(LiteralValue::F64(f64::NAN));
        assert_eq!(set.len(), 2);
    }
}
