//! Bit-packed term identifiers.
//!
//! Every term held by a node storage is addressed by a [`TermId`], a 64-bit
//! packed handle id:
//!
//! ```text
//! [ node_id: 48 ][ kind: 2 ][ inlined: 1 ][ storage: 10 ][ spare: 3 ]
//!   low bits                                                high bits
//! ```
//!
//! - [`NodeId`] is the 48-bit storage-local payload. For literals it is
//!   further split into `[ literal_id: 42 ][ tag: 6 ]` (tag in the high
//!   bits), so a literal's datatype tag is recoverable from the id alone.
//! - [`NodeKind`] is the term kind in SPARQL order
//!   (`Blank < Iri < Literal < Variable`).
//! - The `inlined` bit marks literal ids whose entire value is bit-packed
//!   into the 42 `literal_id` bits; such ids have **no** backend table entry
//!   and decode without touching storage.
//! - [`StorageId`] identifies the owning backend instance.
//!
//! Width invariants are debug-asserted at construction; callers must
//! pre-validate in release builds.

use std::fmt;

// ============================================================================
// LiteralId
// ============================================================================

/// 42-bit index into a literal table (or 42 bits of inlined value payload).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct LiteralId(u64);

impl LiteralId {
    /// Number of bits available for a literal id.
    pub const WIDTH: u32 = 42;

    /// Maximum representable literal id.
    pub const MAX: u64 = (1 << Self::WIDTH) - 1;

    /// The null literal id.
    pub const NULL: Self = Self(0);

    /// First id handed out by a literal table.
    pub const MIN: Self = Self(1);

    /// Construct from a raw value. Must be below 2^42.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        debug_assert!(raw <= Self::MAX);
        Self(raw)
    }

    /// Get the raw value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns `true` for the null id.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Next sequential id. Panics on id-space exhaustion (unrecoverable).
    #[inline]
    pub fn next(self) -> Self {
        assert!(self.0 < Self::MAX, "literal id space exhausted");
        Self(self.0 + 1)
    }
}

impl fmt::Debug for LiteralId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LiteralId({})", self.0)
    }
}

// ============================================================================
// LiteralTag
// ============================================================================

/// 6-bit datatype tag carried inside literal [`NodeId`]s.
///
/// Tag `0` is `OTHER`: the literal's real datatype lives in the backend
/// record and must be looked up there. Non-zero tags identify *fixed*
/// datatypes known at compile time. Bit 5 marks numeric datatypes, so
/// `is_numeric` needs no table lookup.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct LiteralTag(u8);

impl LiteralTag {
    /// Number of bits in a tag.
    pub const WIDTH: u32 = 6;

    /// Position of the numeric tagging bit.
    pub const NUMERIC_BIT: u32 = 5;

    /// The "datatype stored in the backend" tag.
    pub const OTHER: Self = Self(0);

    /// Construct from a raw value. Must be below 2^6.
    #[inline]
    pub const fn from_u8(raw: u8) -> Self {
        debug_assert!(raw & 0b1100_0000 == 0);
        Self(raw)
    }

    /// Compose a tag from the numeric flag and a 5-bit type id.
    ///
    /// Non-numeric tags must have a non-zero type id (zero is reserved for
    /// [`OTHER`](Self::OTHER)).
    #[inline]
    pub const fn from_parts(is_numeric: bool, type_id: u8) -> Self {
        debug_assert!(type_id & 0b1110_0000 == 0);
        debug_assert!(is_numeric || type_id != 0);
        Self(type_id | ((is_numeric as u8) << Self::NUMERIC_BIT))
    }

    /// Returns `true` if this tag identifies a fixed datatype.
    #[inline]
    pub const fn is_fixed(self) -> bool {
        self.0 != 0
    }

    /// Returns `true` if the numeric tagging bit is set.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        self.0 & (1 << Self::NUMERIC_BIT) != 0
    }

    /// The 5-bit type id without the numeric bit.
    #[inline]
    pub const fn type_id(self) -> u8 {
        self.0 & !(1 << Self::NUMERIC_BIT)
    }

    /// Get the raw 6-bit value.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for LiteralTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            write!(f, "LiteralTag::OTHER")
        } else {
            write!(f, "LiteralTag({})", self.0)
        }
    }
}

/// Fixed tag schedule.
///
/// Non-numeric datatypes occupy tags 1..=20, numeric datatypes 32..=48
/// (numeric bit set). The tag value doubles as the reserved IRI [`NodeId`]
/// of the datatype's IRI, see [`iri_id_to_tag`].
pub mod tags {
    use super::LiteralTag;

    /// IRI of the default graph (reserved, not a datatype)
    pub const DEFAULT_GRAPH: LiteralTag = LiteralTag::from_parts(false, 1);
    pub const STRING: LiteralTag = LiteralTag::from_parts(false, 2);
    pub const LANG_STRING: LiteralTag = LiteralTag::from_parts(false, 3);
    pub const BOOLEAN: LiteralTag = LiteralTag::from_parts(false, 4);
    pub const BASE64_BINARY: LiteralTag = LiteralTag::from_parts(false, 5);
    pub const HEX_BINARY: LiteralTag = LiteralTag::from_parts(false, 6);
    pub const DATE: LiteralTag = LiteralTag::from_parts(false, 7);
    pub const TIME: LiteralTag = LiteralTag::from_parts(false, 8);
    pub const DATE_TIME: LiteralTag = LiteralTag::from_parts(false, 9);
    pub const DATE_TIME_STAMP: LiteralTag = LiteralTag::from_parts(false, 10);
    pub const G_YEAR: LiteralTag = LiteralTag::from_parts(false, 11);
    pub const G_MONTH: LiteralTag = LiteralTag::from_parts(false, 12);
    pub const G_DAY: LiteralTag = LiteralTag::from_parts(false, 13);
    pub const G_YEAR_MONTH: LiteralTag = LiteralTag::from_parts(false, 14);
    pub const G_MONTH_DAY: LiteralTag = LiteralTag::from_parts(false, 15);
    pub const DURATION: LiteralTag = LiteralTag::from_parts(false, 16);
    pub const DAY_TIME_DURATION: LiteralTag = LiteralTag::from_parts(false, 17);
    pub const YEAR_MONTH_DURATION: LiteralTag = LiteralTag::from_parts(false, 18);
    /// rdf:type (reserved IRI, not a datatype)
    pub const RDF_TYPE: LiteralTag = LiteralTag::from_parts(false, 19);
    pub const ANY_URI: LiteralTag = LiteralTag::from_parts(false, 20);

    pub const FLOAT: LiteralTag = LiteralTag::from_parts(true, 0);
    pub const DOUBLE: LiteralTag = LiteralTag::from_parts(true, 1);
    pub const DECIMAL: LiteralTag = LiteralTag::from_parts(true, 2);
    pub const INTEGER: LiteralTag = LiteralTag::from_parts(true, 3);
    pub const NON_POSITIVE_INTEGER: LiteralTag = LiteralTag::from_parts(true, 4);
    pub const LONG: LiteralTag = LiteralTag::from_parts(true, 5);
    pub const NON_NEGATIVE_INTEGER: LiteralTag = LiteralTag::from_parts(true, 6);
    pub const NEGATIVE_INTEGER: LiteralTag = LiteralTag::from_parts(true, 7);
    pub const INT: LiteralTag = LiteralTag::from_parts(true, 8);
    pub const UNSIGNED_LONG: LiteralTag = LiteralTag::from_parts(true, 9);
    pub const POSITIVE_INTEGER: LiteralTag = LiteralTag::from_parts(true, 10);
    pub const SHORT: LiteralTag = LiteralTag::from_parts(true, 11);
    pub const UNSIGNED_INT: LiteralTag = LiteralTag::from_parts(true, 12);
    pub const BYTE: LiteralTag = LiteralTag::from_parts(true, 13);
    pub const UNSIGNED_SHORT: LiteralTag = LiteralTag::from_parts(true, 14);
    pub const UNSIGNED_BYTE: LiteralTag = LiteralTag::from_parts(true, 15);
    pub const OWL_REAL: LiteralTag = LiteralTag::from_parts(true, 16);
}

/// First IRI [`NodeId`] value available for dynamically interned IRIs.
///
/// Ids `1..MIN_DYNAMIC_IRI_ID` are reserved for fixed-tag datatype IRIs
/// (plus the default graph IRI and rdf:type); a reserved IRI's id equals its
/// tag value.
pub const MIN_DYNAMIC_IRI_ID: u64 = tags::OWL_REAL.as_u8() as u64 + 1;

// ============================================================================
// NodeKind
// ============================================================================

/// RDF term kind, in SPARQL term order.
///
/// The declared order (`Blank < Iri < Literal < Variable`) is the order
/// used for sorting terms of different kinds; it is preserved by the
/// natural ordering of [`TermId`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum NodeKind {
    Blank = 0,
    Iri = 1,
    Literal = 2,
    Variable = 3,
}

impl NodeKind {
    /// Construct from the low 2 bits of a raw value.
    #[inline]
    pub const fn from_u8(raw: u8) -> Self {
        match raw & 0b11 {
            0 => NodeKind::Blank,
            1 => NodeKind::Iri,
            2 => NodeKind::Literal,
            _ => NodeKind::Variable,
        }
    }

    /// Get the raw 2-bit value.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Blank => "blank node",
            NodeKind::Iri => "IRI",
            NodeKind::Literal => "literal",
            NodeKind::Variable => "variable",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// NodeId
// ============================================================================

/// 48-bit storage-local node id.
///
/// For literals the payload is `[ literal_id: 42 ][ tag: 6 ]` with the tag
/// in bits 42..48. For IRIs, blank nodes, and variables it is a plain
/// sequence number. Id `0` is the null id for every kind.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Number of bits in a node id.
    pub const WIDTH: u32 = 48;

    /// Maximum representable node id.
    pub const MAX: u64 = (1 << Self::WIDTH) - 1;

    /// The null node id.
    pub const NULL: Self = Self(0);

    /// First id handed out for blank nodes.
    pub const MIN_BNODE: Self = Self(1);

    /// First id handed out for variables.
    pub const MIN_VARIABLE: Self = Self(1);

    /// First id handed out for dynamically interned IRIs.
    pub const MIN_IRI: Self = Self(MIN_DYNAMIC_IRI_ID);

    /// Construct from a raw value. Must be below 2^48.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        debug_assert!(raw <= Self::MAX);
        Self(raw)
    }

    /// Compose a literal node id from its table index and datatype tag.
    #[inline]
    pub const fn from_literal_parts(id: LiteralId, tag: LiteralTag) -> Self {
        Self(id.as_u64() | ((tag.as_u8() as u64) << LiteralId::WIDTH))
    }

    /// Extract the literal table index.
    ///
    /// Does not check that this id actually identifies a literal.
    #[inline]
    pub const fn literal_id(self) -> LiteralId {
        LiteralId::new(self.0 & LiteralId::MAX)
    }

    /// Extract the datatype tag.
    ///
    /// Does not check that this id actually identifies a literal.
    #[inline]
    pub const fn literal_tag(self) -> LiteralTag {
        LiteralTag::from_u8((self.0 >> LiteralId::WIDTH) as u8)
    }

    /// Returns `true` for the null id.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Get the raw value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Next sequential id. Panics on id-space exhaustion (unrecoverable).
    #[inline]
    pub fn next(self) -> Self {
        assert!(self.0 < Self::MAX, "node id space exhausted");
        Self(self.0 + 1)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Map a reserved IRI node id to the datatype tag it stands for.
///
/// All id values below [`MIN_DYNAMIC_IRI_ID`] (except null) are reserved for
/// fixed-datatype IRIs whose id equals their tag. Dynamic IRIs map to
/// [`LiteralTag::OTHER`].
///
/// The caller must ensure `id` actually identifies an IRI.
#[inline]
pub const fn iri_id_to_tag(id: NodeId) -> LiteralTag {
    let raw = id.as_u64();
    if raw != 0 && raw < MIN_DYNAMIC_IRI_ID {
        LiteralTag::from_u8(raw as u8)
    } else {
        LiteralTag::OTHER
    }
}

/// Map a fixed datatype tag to the node id of its datatype IRI.
#[inline]
pub const fn tag_to_iri_id(tag: LiteralTag) -> NodeId {
    debug_assert!(tag.is_fixed());
    NodeId::new(tag.as_u8() as u64)
}

// ============================================================================
// StorageId
// ============================================================================

/// 10-bit id of a node storage backend instance.
///
/// Id `0` is the null storage (no backend).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct StorageId(u16);

impl StorageId {
    /// Number of bits in a storage id.
    pub const WIDTH: u32 = 10;

    /// Maximum representable storage id.
    pub const MAX: u16 = (1 << Self::WIDTH) - 1;

    /// The null storage id.
    pub const NULL: Self = Self(0);

    /// Construct from a raw value. Must be below 2^10.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        debug_assert!(raw <= Self::MAX);
        Self(raw)
    }

    /// Get the raw value.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns `true` for the null storage id.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for StorageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StorageId({})", self.0)
    }
}

// ============================================================================
// TermId
// ============================================================================

const NODE_ID_MASK: u64 = NodeId::MAX;
const KIND_SHIFT: u32 = NodeId::WIDTH;
const INLINED_SHIFT: u32 = KIND_SHIFT + 2;
const STORAGE_SHIFT: u32 = INLINED_SHIFT + 1;

/// Packed 64-bit term handle id: node id, kind, inlined bit, storage id.
///
/// Equality is pure bit comparison. Ordering is kind-first (SPARQL term
/// order), then node id, then storage id — so comparing two ids from the
/// same storage never needs a backend lookup and still sorts
/// `Blank < Iri < Literal < Variable`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct TermId(u64);

impl TermId {
    /// The null term id.
    pub const NULL: Self = Self(0);

    /// Compose a term id from its fields.
    #[inline]
    pub const fn new(node_id: NodeId, kind: NodeKind, storage: StorageId, inlined: bool) -> Self {
        Self(
            node_id.as_u64()
                | ((kind.as_u8() as u64) << KIND_SHIFT)
                | ((inlined as u64) << INLINED_SHIFT)
                | ((storage.as_u16() as u64) << STORAGE_SHIFT),
        )
    }

    /// Construct from the raw packed value.
    #[inline]
    pub const fn from_u64(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw packed value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The storage-local node id.
    #[inline]
    pub const fn node_id(self) -> NodeId {
        NodeId::new(self.0 & NODE_ID_MASK)
    }

    /// The term kind.
    #[inline]
    pub const fn kind(self) -> NodeKind {
        NodeKind::from_u8((self.0 >> KIND_SHIFT) as u8)
    }

    /// The owning storage backend id.
    #[inline]
    pub const fn storage_id(self) -> StorageId {
        StorageId::new(((self.0 >> STORAGE_SHIFT) as u16) & StorageId::MAX)
    }

    /// Whether the literal value is inlined in the node id bits.
    ///
    /// An inlined id has no backend table entry; decoding it never touches
    /// storage.
    #[inline]
    pub const fn is_inlined(self) -> bool {
        (self.0 >> INLINED_SHIFT) & 1 != 0
    }

    /// If true, this id identifies no term.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.node_id().is_null()
    }

    /// Kind test: IRI.
    #[inline]
    pub const fn is_iri(self) -> bool {
        matches!(self.kind(), NodeKind::Iri)
    }

    /// Kind test: literal.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self.kind(), NodeKind::Literal)
    }

    /// Kind test: blank node.
    #[inline]
    pub const fn is_blank(self) -> bool {
        matches!(self.kind(), NodeKind::Blank)
    }

    /// Kind test: variable.
    #[inline]
    pub const fn is_variable(self) -> bool {
        matches!(self.kind(), NodeKind::Variable)
    }

    /// The datatype tag of a literal id (OTHER for non-fixed datatypes).
    ///
    /// The caller must ensure this id identifies a literal.
    #[inline]
    pub const fn literal_tag(self) -> LiteralTag {
        self.node_id().literal_tag()
    }

    /// The IRI term id of a fixed-tag literal's datatype, in the same storage.
    ///
    /// The caller must ensure this id identifies a literal with a fixed tag.
    #[inline]
    pub const fn datatype_iri_id(self) -> TermId {
        TermId::new(
            tag_to_iri_id(self.literal_tag()),
            NodeKind::Iri,
            self.storage_id(),
            false,
        )
    }
}

impl Ord for TermId {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.kind()
            .cmp(&other.kind())
            .then_with(|| self.node_id().cmp(&other.node_id()))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for TermId {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "TermId::NULL");
        }
        write!(
            f,
            "TermId({:?}, {:?}, {:?}{})",
            self.kind(),
            self.node_id(),
            self.storage_id(),
            if self.is_inlined() { ", inlined" } else { "" }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_id_bounds() {
        assert_eq!(LiteralId::MAX, (1 << 42) - 1);
        let id = LiteralId::new(LiteralId::MAX);
        assert_eq!(id.as_u64(), LiteralId::MAX);
        assert!(LiteralId::NULL.is_null());
        assert!(!LiteralId::MIN.is_null());
    }

    #[test]
    #[should_panic(expected = "literal id space exhausted")]
    fn test_literal_id_exhaustion_panics() {
        let _ = LiteralId::new(LiteralId::MAX).next();
    }

    #[test]
    fn test_tag_parts() {
        let t = LiteralTag::from_parts(true, 3);
        assert!(t.is_numeric());
        assert!(t.is_fixed());
        assert_eq!(t.type_id(), 3);
        assert_eq!(t.as_u8(), 32 | 3);

        let s = LiteralTag::from_parts(false, 2);
        assert!(!s.is_numeric());
        assert_eq!(s.type_id(), 2);

        assert!(!LiteralTag::OTHER.is_fixed());
        assert!(!LiteralTag::OTHER.is_numeric());
    }

    #[test]
    fn test_tag_schedule_is_unique() {
        let all = [
            tags::DEFAULT_GRAPH,
            tags::STRING,
            tags::LANG_STRING,
            tags::BOOLEAN,
            tags::BASE64_BINARY,
            tags::HEX_BINARY,
            tags::DATE,
            tags::TIME,
            tags::DATE_TIME,
            tags::DATE_TIME_STAMP,
            tags::G_YEAR,
            tags::G_MONTH,
            tags::G_DAY,
            tags::G_YEAR_MONTH,
            tags::G_MONTH_DAY,
            tags::DURATION,
            tags::DAY_TIME_DURATION,
            tags::YEAR_MONTH_DURATION,
            tags::RDF_TYPE,
            tags::ANY_URI,
            tags::FLOAT,
            tags::DOUBLE,
            tags::DECIMAL,
            tags::INTEGER,
            tags::NON_POSITIVE_INTEGER,
            tags::LONG,
            tags::NON_NEGATIVE_INTEGER,
            tags::NEGATIVE_INTEGER,
            tags::INT,
            tags::UNSIGNED_LONG,
            tags::POSITIVE_INTEGER,
            tags::SHORT,
            tags::UNSIGNED_INT,
            tags::BYTE,
            tags::UNSIGNED_SHORT,
            tags::UNSIGNED_BYTE,
            tags::OWL_REAL,
        ];
        let mut raws: Vec<u8> = all.iter().map(|t| t.as_u8()).collect();
        raws.sort_unstable();
        raws.dedup();
        assert_eq!(raws.len(), all.len(), "duplicate tag in schedule");
        assert!(raws.iter().all(|&r| (r as u64) < MIN_DYNAMIC_IRI_ID));
    }

    #[test]
    fn test_numeric_bit_covers_numeric_family() {
        assert!(tags::INTEGER.is_numeric());
        assert!(tags::NEGATIVE_INTEGER.is_numeric());
        assert!(tags::DOUBLE.is_numeric());
        assert!(tags::OWL_REAL.is_numeric());
        assert!(!tags::STRING.is_numeric());
        assert!(!tags::DATE_TIME.is_numeric());
    }

    #[test]
    fn test_node_id_literal_parts_round_trip() {
        for &(id, tag) in &[
            (1u64, tags::BOOLEAN),
            (42, tags::STRING),
            (LiteralId::MAX, tags::INTEGER),
            (0, LiteralTag::OTHER),
        ] {
            let node_id = NodeId::from_literal_parts(LiteralId::new(id), tag);
            assert_eq!(node_id.literal_id().as_u64(), id);
            assert_eq!(node_id.literal_tag(), tag);
        }
    }

    #[test]
    fn test_reserved_iri_id_mapping() {
        assert_eq!(iri_id_to_tag(tag_to_iri_id(tags::BOOLEAN)), tags::BOOLEAN);
        assert_eq!(iri_id_to_tag(tag_to_iri_id(tags::OWL_REAL)), tags::OWL_REAL);
        // null and dynamic ids map to OTHER
        assert_eq!(iri_id_to_tag(NodeId::NULL), LiteralTag::OTHER);
        assert_eq!(
            iri_id_to_tag(NodeId::new(MIN_DYNAMIC_IRI_ID)),
            LiteralTag::OTHER
        );
    }

    #[test]
    fn test_node_kind_sparql_order() {
        assert!(NodeKind::Blank < NodeKind::Iri);
        assert!(NodeKind::Iri < NodeKind::Literal);
        assert!(NodeKind::Literal < NodeKind::Variable);
    }

    #[test]
    fn test_term_id_field_round_trip() {
        let storage = StorageId::new(7);
        for kind in [
            NodeKind::Blank,
            NodeKind::Iri,
            NodeKind::Literal,
            NodeKind::Variable,
        ] {
            for inlined in [false, true] {
                let id = TermId::new(NodeId::new(12345), kind, storage, inlined);
                assert_eq!(id.node_id().as_u64(), 12345);
                assert_eq!(id.kind(), kind);
                assert_eq!(id.storage_id(), storage);
                assert_eq!(id.is_inlined(), inlined);
                assert!(!id.is_null());
            }
        }
    }

    #[test]
    fn test_term_id_max_fields() {
        let id = TermId::new(
            NodeId::new(NodeId::MAX),
            NodeKind::Variable,
            StorageId::new(StorageId::MAX),
            true,
        );
        assert_eq!(id.node_id().as_u64(), NodeId::MAX);
        assert_eq!(id.kind(), NodeKind::Variable);
        assert_eq!(id.storage_id().as_u16(), StorageId::MAX);
        assert!(id.is_inlined());
    }

    #[test]
    fn test_term_id_ordering_is_kind_first() {
        let storage = StorageId::new(1);
        let blank = TermId::new(NodeId::new(999), NodeKind::Blank, storage, false);
        let iri = TermId::new(NodeId::new(5), NodeKind::Iri, storage, false);
        let lit = TermId::new(NodeId::new(2), NodeKind::Literal, storage, false);
        let var = TermId::new(NodeId::new(1), NodeKind::Variable, storage, false);

        assert!(blank < iri);
        assert!(iri < lit);
        assert!(lit < var);
    }

    #[test]
    fn test_term_id_null() {
        assert!(TermId::NULL.is_null());
        let id = TermId::new(NodeId::new(1), NodeKind::Blank, StorageId::new(1), false);
        assert!(!id.is_null());
    }

    #[test]
    fn test_term_id_serde_round_trip() {
        let id = TermId::new(
            NodeId::new(12345),
            NodeKind::Literal,
            StorageId::new(3),
            true,
        );
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, id.as_u64().to_string(), "serializes as the raw u64");

        let parsed: TermId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_datatype_iri_id_of_fixed_literal() {
        let storage = StorageId::new(3);
        let lit = TermId::new(
            NodeId::from_literal_parts(LiteralId::new(10), tags::BOOLEAN),
            NodeKind::Literal,
            storage,
            false,
        );
        let dt = lit.datatype_iri_id();
        assert!(dt.is_iri());
        assert_eq!(dt.storage_id(), storage);
        assert_eq!(iri_id_to_tag(dt.node_id()), tags::BOOLEAN);
    }
}
