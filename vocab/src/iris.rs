//! Standard IRI constants used across the workspace.

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// schema.org namespace (canonical https form).
pub const NS_SCHEMA: &str = "https://schema.org/";
/// schema.org namespace (legacy http form, still common in the wild).
pub const NS_SCHEMA_HTTP: &str = "http://schema.org/";
/// GoodRelations namespace — the bundled auxiliary ontology.
pub const NS_GOODRELATIONS: &str = "http://purl.org/goodrelations/v1#";

// Core RDF(S) terms

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:Property`.
pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
/// `rdfs:Class`.
pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
/// `rdfs:subClassOf`.
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
/// `rdfs:label`.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:comment`.
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `rdfs:domain`.
pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
/// `rdfs:range`.
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

// OWL terms

/// `owl:Class`.
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
/// `owl:ObjectProperty`.
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
/// `owl:DatatypeProperty`.
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
/// `owl:Restriction`.
pub const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
/// `owl:onProperty`.
pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
/// `owl:inverseOf`.
pub const OWL_INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";
/// `owl:cardinality` — an exact-cardinality assertion (both min and max).
pub const OWL_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";
/// `owl:maxCardinality`.
pub const OWL_MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
/// `owl:minCardinality`.
pub const OWL_MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";
/// `owl:maxQualifiedCardinality` (OWL 2 qualified form; treated like max).
pub const OWL_MAX_QUALIFIED_CARDINALITY: &str =
    "http://www.w3.org/2002/07/owl#maxQualifiedCardinality";
/// `owl:Thing`.
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";

// schema.org meta-terms

/// `schema:domainIncludes` — schema.org's permissive domain assertion.
pub const SCHEMA_DOMAIN_INCLUDES: &str = "https://schema.org/domainIncludes";
/// `schema:rangeIncludes` — schema.org's permissive range assertion.
pub const SCHEMA_RANGE_INCLUDES: &str = "https://schema.org/rangeIncludes";

// schema.org datatypes (canonical https form)

/// `schema:Text`.
pub const SCHEMA_TEXT: &str = "https://schema.org/Text";
/// `schema:Boolean`.
pub const SCHEMA_BOOLEAN: &str = "https://schema.org/Boolean";
/// `schema:Integer`.
pub const SCHEMA_INTEGER: &str = "https://schema.org/Integer";
/// `schema:Number`.
pub const SCHEMA_NUMBER: &str = "https://schema.org/Number";
/// `schema:Float`.
pub const SCHEMA_FLOAT: &str = "https://schema.org/Float";
/// `schema:Date`.
pub const SCHEMA_DATE: &str = "https://schema.org/Date";
/// `schema:DateTime`.
pub const SCHEMA_DATETIME: &str = "https://schema.org/DateTime";
/// `schema:Time`.
pub const SCHEMA_TIME: &str = "https://schema.org/Time";
/// `schema:URL`.
pub const SCHEMA_URL: &str = "https://schema.org/URL";

// XSD datatypes

/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:boolean`.
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:int`.
pub const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";
/// `xsd:long`.
pub const XSD_LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
/// `xsd:nonNegativeInteger`.
pub const XSD_NON_NEGATIVE_INTEGER: &str =
    "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
/// `xsd:decimal`.
pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
/// `xsd:float`.
pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
/// `xsd:double`.
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
/// `xsd:date`.
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
/// `xsd:dateTime`.
pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
/// `xsd:time`.
pub const XSD_TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
/// `xsd:anyURI`.
pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";

/// Extracts the local name from a full IRI (after the last `/` or `#`).
#[must_use]
pub fn local_name(iri: &str) -> &str {
    let after_slash = iri.rsplit('/').next().unwrap_or(iri);
    after_slash.rsplit('#').next().unwrap_or(after_slash)
}

/// Normalizes a schema.org IRI to its canonical https form.
///
/// Non-schema.org IRIs are returned unchanged.
#[must_use]
pub fn normalize_schema_iri(iri: &str) -> String {
    match iri.strip_prefix(NS_SCHEMA_HTTP) {
        Some(rest) => format!("{NS_SCHEMA}{rest}"),
        None => iri.to_string(),
    }
}
