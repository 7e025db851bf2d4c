//! RDF vocabulary constants for the termstore workspace
//!
//! This crate is the single source of truth for vocabulary IRIs, namespace
//! prefixes, and datatype classification helpers used by the storage engine
//! and the graph containers.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD datatypes (http://www.w3.org/2001/XMLSchema#)
//! - `owl` - OWL vocabulary (http://www.w3.org/2002/07/owl#)
//!
//! Each vocabulary module also exposes `SUFFIXES`, the closed set of local
//! names, used to build closed namespaces in `termstore-core`.

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace prefix
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// rdf:first IRI (RDF list head)
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";

    /// rdf:rest IRI (RDF list tail)
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";

    /// rdf:nil IRI (RDF list terminator)
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

    /// rdf:Property IRI
    pub const PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";

    /// Closed set of local names in the RDF vocabulary
    pub const SUFFIXES: &[&str] = &[
        "Alt",
        "Bag",
        "HTML",
        "JSON",
        "List",
        "PlainLiteral",
        "Property",
        "Seq",
        "Statement",
        "XMLLiteral",
        "direction",
        "first",
        "langString",
        "language",
        "nil",
        "object",
        "predicate",
        "rest",
        "subject",
        "type",
        "value",
    ];
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// RDFS namespace prefix
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:subClassOf IRI
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// rdfs:subPropertyOf IRI
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";

    /// rdfs:domain IRI
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";

    /// rdfs:range IRI
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

    /// Closed set of local names in the RDFS vocabulary
    pub const SUFFIXES: &[&str] = &[
        "Class",
        "Container",
        "ContainerMembershipProperty",
        "Datatype",
        "Literal",
        "Resource",
        "comment",
        "domain",
        "isDefinedBy",
        "label",
        "member",
        "range",
        "seeAlso",
        "subClassOf",
        "subPropertyOf",
    ];
}

/// XSD vocabulary constants
pub mod xsd {
    /// XSD namespace prefix
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:long IRI
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";

    /// xsd:int IRI
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";

    /// xsd:short IRI
    pub const SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";

    /// xsd:byte IRI
    pub const BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";

    /// xsd:unsignedLong IRI
    pub const UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";

    /// xsd:unsignedInt IRI
    pub const UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";

    /// xsd:unsignedShort IRI
    pub const UNSIGNED_SHORT: &str = "http://www.w3.org/2001/XMLSchema#unsignedShort";

    /// xsd:unsignedByte IRI
    pub const UNSIGNED_BYTE: &str = "http://www.w3.org/2001/XMLSchema#unsignedByte";

    /// xsd:nonNegativeInteger IRI
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";

    /// xsd:positiveInteger IRI
    pub const POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";

    /// xsd:nonPositiveInteger IRI
    pub const NON_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonPositiveInteger";

    /// xsd:negativeInteger IRI
    pub const NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#negativeInteger";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:time IRI
    pub const TIME: &str = "http://www.w3.org/2001/XMLSchema#time";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:dateTimeStamp IRI
    pub const DATE_TIME_STAMP: &str = "http://www.w3.org/2001/XMLSchema#dateTimeStamp";

    /// xsd:gYear IRI
    pub const G_YEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";

    /// xsd:gMonth IRI
    pub const G_MONTH: &str = "http://www.w3.org/2001/XMLSchema#gMonth";

    /// xsd:gDay IRI
    pub const G_DAY: &str = "http://www.w3.org/2001/XMLSchema#gDay";

    /// xsd:gYearMonth IRI
    pub const G_YEAR_MONTH: &str = "http://www.w3.org/2001/XMLSchema#gYearMonth";

    /// xsd:gMonthDay IRI
    pub const G_MONTH_DAY: &str = "http://www.w3.org/2001/XMLSchema#gMonthDay";

    /// xsd:duration IRI
    pub const DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";

    /// xsd:dayTimeDuration IRI
    pub const DAY_TIME_DURATION: &str = "http://www.w3.org/2001/XMLSchema#dayTimeDuration";

    /// xsd:yearMonthDuration IRI
    pub const YEAR_MONTH_DURATION: &str = "http://www.w3.org/2001/XMLSchema#yearMonthDuration";

    /// xsd:base64Binary IRI
    pub const BASE64_BINARY: &str = "http://www.w3.org/2001/XMLSchema#base64Binary";

    /// xsd:hexBinary IRI
    pub const HEX_BINARY: &str = "http://www.w3.org/2001/XMLSchema#hexBinary";

    /// xsd:anyURI IRI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";

    /// Closed set of datatype local names in the XSD vocabulary
    pub const SUFFIXES: &[&str] = &[
        "anyURI",
        "base64Binary",
        "boolean",
        "byte",
        "date",
        "dateTime",
        "dateTimeStamp",
        "dayTimeDuration",
        "decimal",
        "double",
        "duration",
        "float",
        "gDay",
        "gMonth",
        "gMonthDay",
        "gYear",
        "gYearMonth",
        "hexBinary",
        "int",
        "integer",
        "long",
        "negativeInteger",
        "nonNegativeInteger",
        "nonPositiveInteger",
        "positiveInteger",
        "short",
        "string",
        "time",
        "unsignedByte",
        "unsignedInt",
        "unsignedLong",
        "unsignedShort",
        "yearMonthDuration",
    ];

    // ========================================================================
    // Datatype Classification Helpers
    // ========================================================================

    /// Check if a datatype IRI is a numeric type
    #[inline]
    pub fn is_numeric_datatype(datatype_iri: &str) -> bool {
        matches!(
            datatype_iri,
            INTEGER
                | LONG
                | INT
                | SHORT
                | BYTE
                | UNSIGNED_LONG
                | UNSIGNED_INT
                | UNSIGNED_SHORT
                | UNSIGNED_BYTE
                | NON_NEGATIVE_INTEGER
                | POSITIVE_INTEGER
                | NON_POSITIVE_INTEGER
                | NEGATIVE_INTEGER
                | DECIMAL
                | FLOAT
                | DOUBLE
        )
    }

    /// Check if a datatype IRI is an integer-family type
    #[inline]
    pub fn is_integer_family(datatype_iri: &str) -> bool {
        matches!(
            datatype_iri,
            INTEGER
                | LONG
                | INT
                | SHORT
                | BYTE
                | UNSIGNED_LONG
                | UNSIGNED_INT
                | UNSIGNED_SHORT
                | UNSIGNED_BYTE
                | NON_NEGATIVE_INTEGER
                | POSITIVE_INTEGER
                | NON_POSITIVE_INTEGER
                | NEGATIVE_INTEGER
        )
    }

    /// Check if a datatype IRI is a temporal type
    #[inline]
    pub fn is_temporal(datatype_iri: &str) -> bool {
        matches!(
            datatype_iri,
            DATE_TIME
                | DATE_TIME_STAMP
                | DATE
                | TIME
                | G_YEAR
                | G_MONTH
                | G_DAY
                | G_YEAR_MONTH
                | G_MONTH_DAY
                | DURATION
                | DAY_TIME_DURATION
                | YEAR_MONTH_DURATION
        )
    }

    // ========================================================================
    // Integer Range Validation
    // ========================================================================

    /// Get the valid range bounds for an integer subtype as (min, max) inclusive.
    ///
    /// Returns `None` for unbounded types (xsd:integer) or non-integer types.
    /// Uses i128 to accommodate the full range of xsd:unsignedLong.
    ///
    /// Sign-constrained types (`positiveInteger`, `nonNegativeInteger`,
    /// `negativeInteger`, `nonPositiveInteger`) only constrain the sign;
    /// their magnitude bound here is the i128 range.
    #[inline]
    pub fn integer_bounds(datatype_iri: &str) -> Option<(i128, i128)> {
        match datatype_iri {
            BYTE => Some((i8::MIN as i128, i8::MAX as i128)),
            SHORT => Some((i16::MIN as i128, i16::MAX as i128)),
            INT => Some((i32::MIN as i128, i32::MAX as i128)),
            LONG => Some((i64::MIN as i128, i64::MAX as i128)),
            UNSIGNED_BYTE => Some((0, u8::MAX as i128)),
            UNSIGNED_SHORT => Some((0, u16::MAX as i128)),
            UNSIGNED_INT => Some((0, u32::MAX as i128)),
            UNSIGNED_LONG => Some((0, u64::MAX as i128)),
            POSITIVE_INTEGER => Some((1, i128::MAX)),
            NON_NEGATIVE_INTEGER => Some((0, i128::MAX)),
            NEGATIVE_INTEGER => Some((i128::MIN, -1)),
            NON_POSITIVE_INTEGER => Some((i128::MIN, 0)),
            _ => None,
        }
    }

    /// Get the local name portion of a datatype IRI (e.g., "integer" from xsd:integer)
    #[inline]
    pub fn local_name(datatype_iri: &str) -> Option<&str> {
        datatype_iri.rsplit('#').next()
    }
}

/// OWL vocabulary constants
pub mod owl {
    /// OWL namespace prefix
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    /// owl:real IRI (datatype)
    pub const REAL: &str = "http://www.w3.org/2002/07/owl#real";

    /// owl:rational IRI (datatype)
    pub const RATIONAL: &str = "http://www.w3.org/2002/07/owl#rational";

    /// owl:sameAs IRI
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";

    /// owl:Class IRI
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";

    /// Closed set of local names in the OWL vocabulary
    pub const SUFFIXES: &[&str] = &[
        "AllDifferent",
        "AnnotationProperty",
        "Class",
        "DatatypeProperty",
        "FunctionalProperty",
        "InverseFunctionalProperty",
        "NamedIndividual",
        "Nothing",
        "ObjectProperty",
        "Ontology",
        "Restriction",
        "SymmetricProperty",
        "Thing",
        "TransitiveProperty",
        "allValuesFrom",
        "cardinality",
        "complementOf",
        "differentFrom",
        "disjointWith",
        "equivalentClass",
        "equivalentProperty",
        "hasValue",
        "intersectionOf",
        "inverseOf",
        "maxCardinality",
        "minCardinality",
        "onProperty",
        "oneOf",
        "rational",
        "real",
        "sameAs",
        "someValuesFrom",
        "unionOf",
    ];
}

/// IRI of the default graph (the empty IRI by convention)
pub const DEFAULT_GRAPH: &str = "";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iri_constants_share_namespace_prefix() {
        assert!(xsd::STRING.starts_with(xsd::NS));
        assert!(xsd::NEGATIVE_INTEGER.starts_with(xsd::NS));
        assert!(rdf::LANG_STRING.starts_with(rdf::NS));
        assert!(owl::REAL.starts_with(owl::NS));
    }

    #[test]
    fn test_integer_classification() {
        assert!(xsd::is_integer_family(xsd::BYTE));
        assert!(xsd::is_integer_family(xsd::NEGATIVE_INTEGER));
        assert!(!xsd::is_integer_family(xsd::DECIMAL));

        assert!(xsd::is_numeric_datatype(xsd::DECIMAL));
        assert!(xsd::is_numeric_datatype(xsd::DOUBLE));
        assert!(!xsd::is_numeric_datatype(xsd::STRING));
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(xsd::integer_bounds(xsd::BYTE), Some((-128, 127)));
        assert_eq!(xsd::integer_bounds(xsd::UNSIGNED_BYTE), Some((0, 255)));
        assert_eq!(
            xsd::integer_bounds(xsd::NEGATIVE_INTEGER).map(|(_, max)| max),
            Some(-1)
        );
        // xsd:integer is unbounded
        assert_eq!(xsd::integer_bounds(xsd::INTEGER), None);
        assert_eq!(xsd::integer_bounds(xsd::STRING), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(xsd::local_name(xsd::INTEGER), Some("integer"));
        assert_eq!(xsd::local_name(xsd::G_YEAR_MONTH), Some("gYearMonth"));
    }

    #[test]
    fn test_suffix_lists_are_sorted() {
        for list in [rdf::SUFFIXES, rdfs::SUFFIXES, xsd::SUFFIXES, owl::SUFFIXES] {
            let mut sorted = list.to_vec();
            sorted.sort_unstable();
            assert_eq!(list, &sorted[..]);
        }
    }

    #[test]
    fn test_temporal_classification() {
        assert!(xsd::is_temporal(xsd::DATE_TIME));
        assert!(xsd::is_temporal(xsd::G_MONTH_DAY));
        assert!(xsd::is_temporal(xsd::YEAR_MONTH_DURATION));
        assert!(!xsd::is_temporal(xsd::STRING));
    }
}
