//! Literal handles: typed construction, lazy resolution, checked
//! arithmetic, and SPARQL-style comparison.

use super::{term_cmp, term_eq};
use crate::datatypes::registry::{numeric_compare, registry};
use crate::datatypes::{BinOp, Datatype, LiteralValue, UnOp, numeric_binop, numeric_unop};
use crate::error::{Error, NumericError, ParseError, Result};
use crate::ident::{tags, LiteralTag, TermId};
use crate::storage::NodeStorage;
use crate::view::{LiteralData, LiteralView};
use std::cmp::Ordering;

/// An interned literal.
///
/// Fixed-datatype literals are parsed and canonicalized at construction;
/// unknown datatypes round-trip their lexical form verbatim. Small values
/// of inlineable datatypes live entirely inside the term id.
#[derive(Clone)]
pub struct Literal {
    id: TermId,
    storage: NodeStorage,
}

impl Literal {
    // ---- construction ----

    /// Create a literal from a lexical form and datatype IRI.
    ///
    /// Fails with a parsing error if the datatype is fixed and the lexical
    /// form is malformed. Unknown datatype IRIs are stored verbatim.
    pub fn new(lexical: &str, datatype_iri: &str, storage: &NodeStorage) -> Result<Self> {
        let id = match registry().find_by_iri(datatype_iri) {
            Some(entry) => {
                let value = (entry.parse)(lexical)?;
                storage.intern_literal(LiteralView::Value {
                    tag: entry.tag,
                    value: &value,
                })
            }
            None => storage.intern_literal(LiteralView::Lexical {
                tag: LiteralTag::OTHER,
                datatype_iri,
                lexical,
                language: None,
            }),
        };
        Ok(Self {
            id,
            storage: storage.clone(),
        })
    }

    /// Create a simple `xsd:string` literal.
    pub fn new_simple(value: &str, storage: &NodeStorage) -> Self {
        let wrapped = LiteralValue::String(value.to_owned());
        let id = storage.intern_literal(LiteralView::Value {
            tag: tags::STRING,
            value: &wrapped,
        });
        Self {
            id,
            storage: storage.clone(),
        }
    }

    /// Create a language-tagged string (`rdf:langString`).
    ///
    /// Fails if the language tag is not well-formed. The tag is lowercased.
    pub fn new_lang(value: &str, language: &str, storage: &NodeStorage) -> Result<Self> {
        if !crate::datatypes::is_well_formed_lang_tag(language) {
            return Err(ParseError::new(
                termstore_vocab::rdf::LANG_STRING,
                format!("{}@{}", value, language),
            )
            .into());
        }
        let wrapped =
            LiteralValue::LangString(value.to_owned(), language.to_ascii_lowercase());
        let id = storage.intern_literal(LiteralView::Value {
            tag: tags::LANG_STRING,
            value: &wrapped,
        });
        Ok(Self {
            id,
            storage: storage.clone(),
        })
    }

    /// Create a literal from a typed value.
    ///
    /// Fails if the value is outside the datatype's value space (e.g. a
    /// non-negative `xsd:negativeInteger`).
    pub fn make<T: Datatype>(value: T::Value, storage: &NodeStorage) -> Result<Self> {
        if !T::validate(&value) {
            return Err(ParseError::new(T::IRI, T::canonical(&value)).into());
        }
        let wrapped = T::wrap(value);
        let id = storage.intern_literal(LiteralView::Value {
            tag: T::TAG,
            value: &wrapped,
        });
        Ok(Self {
            id,
            storage: storage.clone(),
        })
    }

    pub(crate) fn from_parts(id: TermId, storage: NodeStorage) -> Self {
        debug_assert!(id.is_literal());
        Self { id, storage }
    }

    pub(crate) fn into_parts(self) -> (TermId, NodeStorage) {
        (self.id, self.storage)
    }

    fn from_tag_value(tag: LiteralTag, value: LiteralValue, storage: &NodeStorage) -> Self {
        let id = storage.intern_literal(LiteralView::Value { tag, value: &value });
        Self {
            id,
            storage: storage.clone(),
        }
    }

    // ---- accessors ----

    /// The packed term id.
    pub fn id(&self) -> TermId {
        self.id
    }

    /// The storage this handle resolves through.
    pub fn storage(&self) -> &NodeStorage {
        &self.storage
    }

    /// The datatype tag (OTHER for non-fixed datatypes).
    pub fn tag(&self) -> LiteralTag {
        self.id.literal_tag()
    }

    fn data(&self) -> LiteralData {
        self.storage.literal_data(self.id)
    }

    /// The runtime value of a fixed-datatype literal; `None` for dynamic
    /// datatypes. Lexically stored fixed datatypes re-parse on demand.
    fn runtime_value(&self) -> Option<(LiteralTag, LiteralValue)> {
        match self.data() {
            LiteralData::Value { tag, value } => Some((tag, value.as_ref().clone())),
            LiteralData::Lexical {
                tag,
                lexical,
                language,
                ..
            } => {
                if !tag.is_fixed() {
                    return None;
                }
                if tag == tags::LANG_STRING {
                    let language = language.as_deref().unwrap_or_default().to_owned();
                    return Some((tag, LiteralValue::LangString(lexical.to_string(), language)));
                }
                let entry = registry().find_by_tag(tag)?;
                // stored form is canonical, so this cannot fail
                let value = (entry.parse)(&lexical).ok()?;
                Some((tag, value))
            }
        }
    }

    /// The typed value.
    ///
    /// The literal's datatype must be exactly `T`; a mismatch is a type
    /// error, never a reinterpretation.
    pub fn value<T: Datatype>(&self) -> Result<T::Value> {
        if self.tag() != T::TAG {
            return Err(Error::type_mismatch(self.datatype_iri(), T::IRI));
        }
        let (_, value) = self
            .runtime_value()
            .ok_or_else(|| Error::type_mismatch(self.datatype_iri(), T::IRI))?;
        T::try_unwrap(&value).ok_or_else(|| Error::type_mismatch(self.datatype_iri(), T::IRI))
    }

    /// The canonical lexical form.
    pub fn lexical_form(&self) -> String {
        match self.data() {
            LiteralData::Value { tag, value } => {
                let entry = registry()
                    .find_by_tag(tag)
                    .expect("value-stored literals have a fixed tag");
                (entry.canonical)(&value)
            }
            LiteralData::Lexical { lexical, .. } => lexical.to_string(),
        }
    }

    /// The datatype IRI.
    pub fn datatype_iri(&self) -> String {
        match self.data() {
            LiteralData::Value { tag, .. } => registry()
                .find_by_tag(tag)
                .expect("value-stored literals have a fixed tag")
                .iri
                .to_owned(),
            LiteralData::Lexical {
                tag, datatype_iri, ..
            } => {
                if let Some(entry) = registry().find_by_tag(tag) {
                    entry.iri.to_owned()
                } else {
                    datatype_iri.to_string()
                }
            }
        }
    }

    /// The language tag of an `rdf:langString` literal.
    pub fn language_tag(&self) -> Option<String> {
        match self.data() {
            LiteralData::Lexical { language, .. } => language.map(|l| l.to_string()),
            LiteralData::Value { value, .. } => match value.as_ref() {
                LiteralValue::LangString(_, lang) => Some(lang.clone()),
                _ => None,
            },
        }
    }

    /// Whether this literal's value is inlined in its id.
    pub fn is_inlined(&self) -> bool {
        self.id.is_inlined()
    }

    // ---- logic and comparison ----

    /// SPARQL effective boolean value. `None` if the datatype has no EBV.
    pub fn ebv(&self) -> Option<bool> {
        let (tag, value) = self.runtime_value()?;
        let entry = registry().find_by_tag(tag)?;
        entry.ebv.map(|ebv| ebv(&value))
    }

    /// Three-way SPARQL value comparison.
    ///
    /// Same-datatype literals use the datatype's own order; mixed numeric
    /// datatypes compare after promotion; everything else is unordered.
    pub fn compare(&self, other: &Literal) -> Option<Ordering> {
        let (ta, va) = self.runtime_value()?;
        let (tb, vb) = other.runtime_value()?;
        if ta == tb {
            let entry = registry().find_by_tag(ta)?;
            return entry.compare.and_then(|compare| compare(&va, &vb));
        }
        numeric_compare(ta, &va, tb, &vb)
    }

    // ---- checked arithmetic ----

    fn operand(&self) -> std::result::Result<(LiteralTag, LiteralValue), NumericError> {
        self.runtime_value()
            .ok_or(NumericError::NotNumeric("dynamic datatype"))
    }

    fn binop(&self, op: BinOp, other: &Literal) -> std::result::Result<Literal, NumericError> {
        let (ta, va) = self.operand()?;
        let (tb, vb) = other.operand()?;
        let (tag, value) = numeric_binop(op, ta, &va, tb, &vb)?;
        Ok(Literal::from_tag_value(tag, value, &self.storage))
    }

    fn unop(&self, op: UnOp) -> std::result::Result<Literal, NumericError> {
        let (tag, value) = self.operand()?;
        let (tag, value) = numeric_unop(op, tag, &value)?;
        Ok(Literal::from_tag_value(tag, value, &self.storage))
    }

    /// Checked addition with numeric type promotion.
    pub fn checked_add(&self, other: &Literal) -> std::result::Result<Literal, NumericError> {
        self.binop(BinOp::Add, other)
    }

    /// Checked subtraction with numeric type promotion.
    pub fn checked_sub(&self, other: &Literal) -> std::result::Result<Literal, NumericError> {
        self.binop(BinOp::Sub, other)
    }

    /// Checked multiplication with numeric type promotion.
    pub fn checked_mul(&self, other: &Literal) -> std::result::Result<Literal, NumericError> {
        self.binop(BinOp::Mul, other)
    }

    /// Checked division. Integer operands produce a decimal; exact-type
    /// division by zero is [`NumericError::DivideByZero`], floating-point
    /// division follows IEEE.
    pub fn checked_div(&self, other: &Literal) -> std::result::Result<Literal, NumericError> {
        self.binop(BinOp::Div, other)
    }

    /// Checked negation.
    pub fn checked_neg(&self) -> std::result::Result<Literal, NumericError> {
        self.unop(UnOp::Neg)
    }

    /// Absolute value.
    pub fn checked_abs(&self) -> std::result::Result<Literal, NumericError> {
        self.unop(UnOp::Abs)
    }

    /// Round half toward positive infinity.
    pub fn checked_round(&self) -> std::result::Result<Literal, NumericError> {
        self.unop(UnOp::Round)
    }

    /// Round toward negative infinity.
    pub fn checked_floor(&self) -> std::result::Result<Literal, NumericError> {
        self.unop(UnOp::Floor)
    }

    /// Round toward positive infinity.
    pub fn checked_ceil(&self) -> std::result::Result<Literal, NumericError> {
        self.unop(UnOp::Ceil)
    }

    // ---- storage movement ----

    /// Re-intern into another storage.
    pub fn to_storage(&self, target: &NodeStorage) -> Literal {
        if &self.storage == target {
            return self.clone();
        }
        let id = match self.data() {
            LiteralData::Value { tag, value } => target.intern_literal(LiteralView::Value {
                tag,
                value: value.as_ref(),
            }),
            LiteralData::Lexical {
                tag,
                datatype_iri,
                lexical,
                language,
            } => target.intern_literal(LiteralView::Lexical {
                tag,
                datatype_iri: &datatype_iri,
                lexical: &lexical,
                language: language.as_deref(),
            }),
        };
        Literal {
            id,
            storage: target.clone(),
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        term_eq(self.id, &self.storage, other.id, &other.storage)
    }
}

impl Eq for Literal {}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        term_cmp(self.id, &self.storage, other.id, &other.storage)
    }
}

impl std::fmt::Debug for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Literal({})", self)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.lexical_form())?;
        if let Some(lang) = self.language_tag() {
            write!(f, "@{}", lang)
        } else {
            let datatype = self.datatype_iri();
            if datatype != termstore_vocab::xsd::STRING {
                write!(f, "^^<{}>", datatype)
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{Boolean, Integer, NegativeInteger, XsdString};
    use num_bigint::BigInt;

    fn storage() -> NodeStorage {
        NodeStorage::new_sync()
    }

    #[test]
    fn test_boolean_scenario() {
        let s = storage();
        let lit = Literal::make::<Boolean>(true, &s).unwrap();
        assert_eq!(lit.lexical_form(), "true");

        let parsed = Literal::new("1", termstore_vocab::xsd::BOOLEAN, &s).unwrap();
        assert_eq!(parsed.value::<Boolean>().unwrap(), true);
        assert_eq!(parsed, lit, "\"1\" canonicalizes to the same literal");

        let err = Literal::new("5", termstore_vocab::xsd::BOOLEAN, &s).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_negative_integer_inlining_scenario() {
        let s = storage();
        let before = s.size();
        let lit = Literal::make::<NegativeInteger>(BigInt::from(-1), &s).unwrap();
        assert!(lit.is_inlined(), "-1 packs into the id");
        assert_eq!(s.size(), before, "no backend table growth");
        assert_eq!(lit.lexical_form(), "-1");
        assert_eq!(
            lit.value::<NegativeInteger>().unwrap(),
            BigInt::from(-1)
        );

        // non-negative value fails construction
        assert!(Literal::make::<NegativeInteger>(BigInt::from(1), &s).is_err());
    }

    #[test]
    fn test_inlined_and_table_literals_behave_identically() {
        let s = storage();
        let small = Literal::make::<Integer>(BigInt::from(7), &s).unwrap();
        let huge_value = BigInt::from(1i128 << 90);
        let huge = Literal::make::<Integer>(huge_value.clone(), &s).unwrap();

        assert!(small.is_inlined());
        assert!(!huge.is_inlined());
        assert_eq!(small.datatype_iri(), huge.datatype_iri());
        assert_eq!(small.value::<Integer>().unwrap(), BigInt::from(7));
        assert_eq!(huge.value::<Integer>().unwrap(), huge_value);
        assert_eq!(huge.lexical_form(), huge_value.to_string());
    }

    #[test]
    fn test_value_type_mismatch() {
        let s = storage();
        let lit = Literal::make::<Boolean>(true, &s).unwrap();
        let err = lit.value::<Integer>().unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_simple_and_lang_strings() {
        let s = storage();
        let simple = Literal::new_simple("hello", &s);
        assert_eq!(simple.lexical_form(), "hello");
        assert_eq!(simple.datatype_iri(), termstore_vocab::xsd::STRING);
        assert_eq!(simple.language_tag(), None);
        assert_eq!(simple.to_string(), "\"hello\"");

        let lang = Literal::new_lang("bonjour", "FR", &s).unwrap();
        assert_eq!(lang.language_tag().as_deref(), Some("fr"));
        assert_eq!(lang.datatype_iri(), termstore_vocab::rdf::LANG_STRING);
        assert_eq!(lang.to_string(), "\"bonjour\"@fr");

        assert!(Literal::new_lang("x", "not a tag", &s).is_err());
    }

    #[test]
    fn test_unknown_datatype_round_trips_verbatim() {
        let s = storage();
        let lit = Literal::new("anything at all", "http://example.org/custom", &s).unwrap();
        assert_eq!(lit.lexical_form(), "anything at all");
        assert_eq!(lit.datatype_iri(), "http://example.org/custom");
        assert_eq!(lit.ebv(), None);

        let again = Literal::new("anything at all", "http://example.org/custom", &s).unwrap();
        assert_eq!(lit.id(), again.id());
    }

    #[test]
    fn test_parse_canonicalizes_before_interning() {
        let s = storage();
        let a = Literal::new("042", termstore_vocab::xsd::INTEGER, &s).unwrap();
        let b = Literal::new("42", termstore_vocab::xsd::INTEGER, &s).unwrap();
        assert_eq!(a.id(), b.id(), "equal values intern to one entry");
        assert_eq!(a.lexical_form(), "42");
    }

    #[test]
    fn test_ebv() {
        let s = storage();
        assert_eq!(Literal::new_simple("", &s).ebv(), Some(false));
        assert_eq!(Literal::new_simple("x", &s).ebv(), Some(true));
        assert_eq!(
            Literal::make::<Integer>(BigInt::from(0), &s).unwrap().ebv(),
            Some(false)
        );
        assert_eq!(
            Literal::new("NaN", termstore_vocab::xsd::DOUBLE, &s)
                .unwrap()
                .ebv(),
            Some(false)
        );
        assert_eq!(
            Literal::new("2024-01-01", termstore_vocab::xsd::DATE, &s)
                .unwrap()
                .ebv(),
            None
        );
    }

    #[test]
    fn test_mixed_numeric_arithmetic_promotes() {
        let s = storage();
        let int = Literal::new("2", termstore_vocab::xsd::INT, &s).unwrap();
        let double = Literal::new("0.5", termstore_vocab::xsd::DOUBLE, &s).unwrap();
        let sum = int.checked_add(&double).unwrap();
        assert_eq!(sum.datatype_iri(), termstore_vocab::xsd::DOUBLE);
        assert_eq!(sum.value::<crate::datatypes::Double>().unwrap(), 2.5);
    }

    #[test]
    fn test_division_semantics() {
        let s = storage();
        let one = Literal::make::<Integer>(BigInt::from(1), &s).unwrap();
        let two = Literal::make::<Integer>(BigInt::from(2), &s).unwrap();
        let half = one.checked_div(&two).unwrap();
        assert_eq!(half.datatype_iri(), termstore_vocab::xsd::DECIMAL);
        assert_eq!(half.lexical_form(), "0.5");

        let zero = Literal::make::<Integer>(BigInt::from(0), &s).unwrap();
        assert_eq!(one.checked_div(&zero), Err(NumericError::DivideByZero));

        let string = Literal::new_simple("x", &s);
        assert!(matches!(
            one.checked_add(&string),
            Err(NumericError::NotNumeric(_))
        ));
    }

    #[test]
    fn test_compare() {
        let s = storage();
        let two = Literal::make::<Integer>(BigInt::from(2), &s).unwrap();
        let half = Literal::new("2.5", termstore_vocab::xsd::DECIMAL, &s).unwrap();
        assert_eq!(two.compare(&half), Some(Ordering::Less));

        let a = Literal::new_simple("a", &s);
        let b = Literal::new_simple("b", &s);
        assert_eq!(a.compare(&b), Some(Ordering::Less));

        // string vs integer is unordered
        assert_eq!(a.compare(&two), None);

        let nan = Literal::new("NaN", termstore_vocab::xsd::DOUBLE, &s).unwrap();
        let one = Literal::new("1.0E0", termstore_vocab::xsd::DOUBLE, &s).unwrap();
        assert_eq!(nan.compare(&one), None);
    }

    #[test]
    fn test_value_of_lexically_stored_fixed_type() {
        let s = storage();
        // strings are neither inlined nor specialized, so they live in the
        // fallback table but still resolve to typed values
        let lit = Literal::new_simple("round trip", &s);
        assert_eq!(lit.value::<XsdString>().unwrap(), "round trip");
    }

    #[test]
    fn test_to_storage() {
        let s1 = storage();
        let s2 = storage();
        let lit = Literal::make::<Integer>(BigInt::from(1i128 << 90), &s1).unwrap();
        let moved = lit.to_storage(&s2);
        assert_eq!(moved.storage(), &s2);
        assert_eq!(lit, moved);
        assert_eq!(
            moved.value::<Integer>().unwrap(),
            BigInt::from(1i128 << 90)
        );
    }

    #[test]
    fn test_display_typed() {
        let s = storage();
        let lit = Literal::make::<Integer>(BigInt::from(42), &s).unwrap();
        assert_eq!(
            lit.to_string(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }
}
