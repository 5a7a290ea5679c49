//! Graph model types.
//!
//! A [`VocabularyGraph`] is the fully-loaded, read-only view of the base
//! vocabulary: classes and properties keyed by IRI, plus a domain index that
//! preserves the order in which each class's properties were declared in the
//! source document. An [`AuxiliaryGraph`] carries the cardinality
//! restrictions recovered from the auxiliary ontology.
//!
//! All collections are `BTreeMap`/`Vec`, so every iteration over a graph is
//! deterministic regardless of source-document hashing.

use std::collections::BTreeMap;

/// A class resource of the base vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassResource {
    /// Full IRI (e.g. `"https://schema.org/Person"`).
    pub uri: String,
    /// Human-readable label (`rdfs:label`), if declared.
    pub label: Option<String>,
    /// Description (`rdfs:comment`), if declared.
    pub comment: Option<String>,
    /// Full IRIs of parent classes (`rdfs:subClassOf`), declaration order.
    pub sub_class_of: Vec<String>,
}

/// A property resource of the base vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyResource {
    /// Full IRI (e.g. `"https://schema.org/familyName"`).
    pub uri: String,
    /// Human-readable label (`rdfs:label`), if declared.
    pub label: Option<String>,
    /// Description (`rdfs:comment`), if declared.
    pub comment: Option<String>,
    /// Full IRIs of declaring domain classes, declaration order.
    pub domains: Vec<String>,
    /// Full IRIs of declared ranges, declaration order.
    pub ranges: Vec<String>,
}

/// The fully-loaded base vocabulary, immutable for the run.
#[derive(Debug, Clone, Default)]
pub struct VocabularyGraph {
    /// All classes, keyed by IRI.
    pub classes: BTreeMap<String, ClassResource>,
    /// All properties, keyed by IRI.
    pub properties: BTreeMap<String, PropertyResource>,
    /// Class IRI → property IRIs whose domain includes that class, in the
    /// order the domain assertions appeared in the source document.
    pub domain_index: BTreeMap<String, Vec<String>>,
}

impl VocabularyGraph {
    /// Looks up a class by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn class(&self, iri: &str) -> Option<&ClassResource> {
        self.classes.get(iri)
    }

    /// Looks up a property by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn property(&self, iri: &str) -> Option<&PropertyResource> {
        self.properties.get(iri)
    }

    /// Returns the properties declared with `class_iri` in their domain, in
    /// source declaration order. Empty when the class declares none.
    #[must_use]
    pub fn properties_of(&self, class_iri: &str) -> Vec<&PropertyResource> {
        self.domain_index
            .get(class_iri)
            .map(|uris| uris.iter().filter_map(|u| self.properties.get(u)).collect())
            .unwrap_or_default()
    }

    /// Returns the direct superclass IRIs of `class_iri`, declaration order.
    #[must_use]
    pub fn superclasses_of(&self, class_iri: &str) -> &[String] {
        self.classes
            .get(class_iri)
            .map(|c| c.sub_class_of.as_slice())
            .unwrap_or_default()
    }

    /// Returns the total number of classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Returns the total number of properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

/// Cardinality bounds recovered for one auxiliary-ontology property.
///
/// The domain side bounds how many values one subject may carry; the range
/// side bounds how many subjects may point at one value (recovered from
/// restrictions on the inverse property).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardinalityRestriction {
    /// Maximum cardinality asserted on the property itself, if any.
    pub domain_max: Option<u64>,
    /// Maximum cardinality asserted on the inverse direction, if any.
    pub range_max: Option<u64>,
    /// Minimum cardinality asserted on the property itself, if any.
    pub domain_min: Option<u64>,
}

impl CardinalityRestriction {
    /// True when the domain direction is restricted to at most one value.
    #[must_use]
    pub fn domain_is_single(&self) -> bool {
        self.domain_max.is_some_and(|m| m <= 1)
    }

    /// True when the range direction is restricted to at most one value.
    #[must_use]
    pub fn range_is_single(&self) -> bool {
        self.range_max.is_some_and(|m| m <= 1)
    }
}

/// The auxiliary cardinality-bearing ontology, immutable for the run.
#[derive(Debug, Clone, Default)]
pub struct AuxiliaryGraph {
    /// Auxiliary property IRI → recovered cardinality bounds.
    pub restrictions: BTreeMap<String, CardinalityRestriction>,
}

impl AuxiliaryGraph {
    /// Looks up the restriction for an auxiliary property IRI.
    ///
    /// Absence is a normal outcome: not every property has a
    /// cardinality-bearing counterpart.
    #[must_use]
    pub fn restriction(&self, aux_property_iri: &str) -> Option<&CardinalityRestriction> {
        self.restrictions.get(aux_property_iri)
    }

    /// Returns the number of properties with recovered restrictions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.restrictions.len()
    }

    /// True when no restrictions were recovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restrictions.is_empty()
    }
}
