//! Backend views: borrowed lookup keys and their owned storage records.
//!
//! A `*View` is an ephemeral key built on the caller's stack for the
//! duration of one lookup/insert call; it borrows the caller's strings and
//! is never stored. The matching `*Record` is the owned, storage-resident
//! representation: it owns its strings behind `Arc` (so resolving an id back
//! to data is a cheap clone) and caches its hash.
//!
//! `*Data` types are what id resolution returns: owned handles onto the
//! record's shared payload.

use crate::datatypes::LiteralValue;
use crate::ident::LiteralTag;
use crate::scope::WeakNodeScope;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

fn fx_hash(f: impl FnOnce(&mut FxHasher)) -> u64 {
    let mut hasher = FxHasher::default();
    f(&mut hasher);
    hasher.finish()
}

/// Owned backend record: constructible from its view, matchable against a
/// view, with a view-compatible cached hash.
///
/// The hash contract is the interning invariant: for every view `v`,
/// `from_view(v).cached_hash() == view_hash(&v)`, and `matches` agrees with
/// view equality.
pub trait BackendRecord: Sized {
    type View<'a>: Clone;

    fn from_view(view: Self::View<'_>) -> Self;
    fn matches(&self, view: &Self::View<'_>) -> bool;
    fn view_hash(view: &Self::View<'_>) -> u64;
    fn cached_hash(&self) -> u64;
}

// ============================================================================
// IRI
// ============================================================================

/// Lookup key for an IRI.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IriView<'a> {
    pub iri: &'a str,
}

/// Owned IRI record.
#[derive(Clone, Debug)]
pub struct IriRecord {
    iri: Arc<str>,
    hash: u64,
}

/// Resolved IRI data.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct IriData {
    pub iri: Arc<str>,
}

impl IriRecord {
    pub fn data(&self) -> IriData {
        IriData {
            iri: Arc::clone(&self.iri),
        }
    }
}

impl BackendRecord for IriRecord {
    type View<'a> = IriView<'a>;

    fn from_view(view: IriView<'_>) -> Self {
        Self {
            iri: Arc::from(view.iri),
            hash: Self::view_hash(&view),
        }
    }

    fn matches(&self, view: &IriView<'_>) -> bool {
        self.iri.as_ref() == view.iri
    }

    fn view_hash(view: &IriView<'_>) -> u64 {
        fx_hash(|h| view.iri.hash(h))
    }

    fn cached_hash(&self) -> u64 {
        self.hash
    }
}

// ============================================================================
// Blank node
// ============================================================================

/// Lookup key for a blank node.
///
/// Two views with the same label but different (or absent) scopes are
/// distinct entries; this is how per-document blank node scoping works
/// without the storage tracking document structure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BNodeView<'a> {
    pub label: &'a str,
    pub scope: Option<WeakNodeScope>,
}

/// Owned blank node record.
///
/// A record referencing a now-dead scope stays valid; the weak reference is
/// never dereferenced by the storage itself.
#[derive(Clone, Debug)]
pub struct BNodeRecord {
    label: Arc<str>,
    scope: Option<WeakNodeScope>,
    hash: u64,
}

/// Resolved blank node data.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BNodeData {
    pub label: Arc<str>,
    pub scope: Option<WeakNodeScope>,
}

impl BNodeRecord {
    pub fn data(&self) -> BNodeData {
        BNodeData {
            label: Arc::clone(&self.label),
            scope: self.scope,
        }
    }
}

impl BackendRecord for BNodeRecord {
    type View<'a> = BNodeView<'a>;

    fn from_view(view: BNodeView<'_>) -> Self {
        Self {
            label: Arc::from(view.label),
            scope: view.scope,
            hash: Self::view_hash(&view),
        }
    }

    fn matches(&self, view: &BNodeView<'_>) -> bool {
        self.label.as_ref() == view.label && self.scope == view.scope
    }

    fn view_hash(view: &BNodeView<'_>) -> u64 {
        fx_hash(|h| {
            view.label.hash(h);
            view.scope.hash(h);
        })
    }

    fn cached_hash(&self) -> u64 {
        self.hash
    }
}

// ============================================================================
// Variable
// ============================================================================

/// Lookup key for a query variable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct VariableView<'a> {
    pub name: &'a str,
    pub anonymous: bool,
}

/// Owned variable record.
#[derive(Clone, Debug)]
pub struct VariableRecord {
    name: Arc<str>,
    anonymous: bool,
    hash: u64,
}

/// Resolved variable data.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct VariableData {
    pub name: Arc<str>,
    pub anonymous: bool,
}

impl VariableRecord {
    pub fn data(&self) -> VariableData {
        VariableData {
            name: Arc::clone(&self.name),
            anonymous: self.anonymous,
        }
    }
}

impl BackendRecord for VariableRecord {
    type View<'a> = VariableView<'a>;

    fn from_view(view: VariableView<'_>) -> Self {
        Self {
            name: Arc::from(view.name),
            anonymous: view.anonymous,
            hash: Self::view_hash(&view),
        }
    }

    fn matches(&self, view: &VariableView<'_>) -> bool {
        self.name.as_ref() == view.name && self.anonymous == view.anonymous
    }

    fn view_hash(view: &VariableView<'_>) -> u64 {
        fx_hash(|h| {
            view.name.hash(h);
            view.anonymous.hash(h);
        })
    }

    fn cached_hash(&self) -> u64 {
        self.hash
    }
}

// ============================================================================
// Literal
// ============================================================================

/// Lookup key for a literal.
///
/// `Lexical` is the generic path: lexical form, datatype IRI, and language
/// tag stored verbatim (used for non-fixed datatypes, and for fixed
/// datatypes with neither inlining nor a specialized table). `Value` is the
/// specialized path keyed by the parsed value.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LiteralView<'a> {
    Lexical {
        /// Tag if the datatype is fixed, OTHER for dynamic datatypes
        tag: LiteralTag,
        datatype_iri: &'a str,
        lexical: &'a str,
        language: Option<&'a str>,
    },
    Value {
        tag: LiteralTag,
        value: &'a LiteralValue,
    },
}

/// Owned record for the fallback lexical literal table.
#[derive(Clone, Debug)]
pub struct LexicalLiteralRecord {
    tag: LiteralTag,
    datatype_iri: Arc<str>,
    lexical: Arc<str>,
    language: Option<Arc<str>>,
    hash: u64,
}

impl BackendRecord for LexicalLiteralRecord {
    type View<'a> = LiteralView<'a>;

    fn from_view(view: LiteralView<'_>) -> Self {
        match view {
            LiteralView::Lexical {
                tag,
                datatype_iri,
                lexical,
                language,
            } => Self {
                tag,
                datatype_iri: Arc::from(datatype_iri),
                lexical: Arc::from(lexical),
                language: language.map(Arc::from),
                hash: Self::view_hash(&view),
            },
            LiteralView::Value { .. } => {
                unreachable!("value views are dispatched to specialized tables")
            }
        }
    }

    fn matches(&self, view: &LiteralView<'_>) -> bool {
        match view {
            LiteralView::Lexical {
                tag,
                datatype_iri,
                lexical,
                language,
            } => {
                self.tag == *tag
                    && self.datatype_iri.as_ref() == *datatype_iri
                    && self.lexical.as_ref() == *lexical
                    && self.language.as_deref() == *language
            }
            LiteralView::Value { .. } => false,
        }
    }

    fn view_hash(view: &LiteralView<'_>) -> u64 {
        match view {
            LiteralView::Lexical {
                datatype_iri,
                lexical,
                language,
                ..
            } => fx_hash(|h| {
                datatype_iri.hash(h);
                lexical.hash(h);
                language.hash(h);
            }),
            LiteralView::Value { .. } => unreachable!(),
        }
    }

    fn cached_hash(&self) -> u64 {
        self.hash
    }
}

impl LexicalLiteralRecord {
    pub fn data(&self) -> LiteralData {
        LiteralData::Lexical {
            tag: self.tag,
            datatype_iri: Arc::clone(&self.datatype_iri),
            lexical: Arc::clone(&self.lexical),
            language: self.language.clone(),
        }
    }
}

/// Owned record for a specialized (value-keyed) literal table.
#[derive(Clone, Debug)]
pub struct ValueLiteralRecord {
    tag: LiteralTag,
    value: Arc<LiteralValue>,
    hash: u64,
}

impl BackendRecord for ValueLiteralRecord {
    type View<'a> = LiteralView<'a>;

    fn from_view(view: LiteralView<'_>) -> Self {
        match view {
            LiteralView::Value { tag, value } => Self {
                tag,
                value: Arc::new(value.clone()),
                hash: Self::view_hash(&view),
            },
            LiteralView::Lexical { .. } => {
                unreachable!("lexical views are dispatched to the fallback table")
            }
        }
    }

    fn matches(&self, view: &LiteralView<'_>) -> bool {
        match view {
            LiteralView::Value { tag, value } => self.tag == *tag && self.value.as_ref() == *value,
            LiteralView::Lexical { .. } => false,
        }
    }

    fn view_hash(view: &LiteralView<'_>) -> u64 {
        match view {
            LiteralView::Value { value, .. } => fx_hash(|h| value.hash(h)),
            LiteralView::Lexical { .. } => unreachable!(),
        }
    }

    fn cached_hash(&self) -> u64 {
        self.hash
    }
}

impl ValueLiteralRecord {
    pub fn data(&self) -> LiteralData {
        LiteralData::Value {
            tag: self.tag,
            value: Arc::clone(&self.value),
        }
    }
}

/// Resolved literal data.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum LiteralData {
    Lexical {
        tag: LiteralTag,
        datatype_iri: Arc<str>,
        lexical: Arc<str>,
        language: Option<Arc<str>>,
    },
    Value {
        tag: LiteralTag,
        value: Arc<LiteralValue>,
    },
}

impl LiteralData {
    /// The datatype tag (OTHER for dynamic datatypes).
    pub fn tag(&self) -> LiteralTag {
        match self {
            LiteralData::Lexical { tag, .. } => *tag,
            LiteralData::Value { tag, .. } => *tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iri_record_round_trip() {
        let view = IriView {
            iri: "http://example.org/x",
        };
        let record = IriRecord::from_view(view);
        assert!(record.matches(&view));
        assert_eq!(record.cached_hash(), IriRecord::view_hash(&view));
        assert_eq!(record.data().iri.as_ref(), "http://example.org/x");

        let other = IriView {
            iri: "http://example.org/y",
        };
        assert!(!record.matches(&other));
    }

    #[test]
    fn test_bnode_scope_distinguishes_records() {
        let unscoped = BNodeView {
            label: "b0",
            scope: None,
        };
        let scoped = BNodeView {
            label: "b0",
            scope: Some(WeakNodeScope::from_parts(1, 1)),
        };
        let record = BNodeRecord::from_view(unscoped);
        assert!(record.matches(&unscoped));
        assert!(!record.matches(&scoped));
        assert_ne!(
            BNodeRecord::view_hash(&unscoped),
            BNodeRecord::view_hash(&scoped)
        );
    }

    #[test]
    fn test_variable_anonymity_distinguishes_records() {
        let named = VariableView {
            name: "x",
            anonymous: false,
        };
        let anon = VariableView {
            name: "x",
            anonymous: true,
        };
        let record = VariableRecord::from_view(named);
        assert!(record.matches(&named));
        assert!(!record.matches(&anon));
    }

    #[test]
    fn test_lexical_literal_record_keys_on_all_fields() {
        let view = LiteralView::Lexical {
            tag: LiteralTag::OTHER,
            datatype_iri: "http://example.org/dt",
            lexical: "payload",
            language: None,
        };
        let record = LexicalLiteralRecord::from_view(view);
        assert!(record.matches(&view));

        let different_dt = LiteralView::Lexical {
            tag: LiteralTag::OTHER,
            datatype_iri: "http://example.org/other",
            lexical: "payload",
            language: None,
        };
        assert!(!record.matches(&different_dt));

        let with_lang = LiteralView::Lexical {
            tag: LiteralTag::OTHER,
            datatype_iri: "http://example.org/dt",
            lexical: "payload",
            language: Some("en"),
        };
        assert!(!record.matches(&with_lang));
    }

    #[test]
    fn test_value_literal_record() {
        use crate::ident::tags;
        let value = LiteralValue::F64(2.5);
        let view = LiteralView::Value {
            tag: tags::DOUBLE,
            value: &value,
        };
        let record = ValueLiteralRecord::from_view(view);
        assert!(record.matches(&view));
        assert_eq!(record.cached_hash(), ValueLiteralRecord::view_hash(&view));

        let other = LiteralValue::F64(3.5);
        assert!(!record.matches(&LiteralView::Value {
            tag: tags::DOUBLE,
            value: &other,
        }));
        assert_eq!(record.data().tag(), tags::DOUBLE);
    }
}
