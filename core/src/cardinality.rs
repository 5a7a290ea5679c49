//! Relation cardinality resolution.
//!
//! Classifies a property's multiplicity from the auxiliary ontology's
//! restriction nodes, reached through the [`OntologyBridge`]. Properties
//! without an auxiliary counterpart fall back by range kind.

use schemagen_vocab::AuxiliaryGraph;

use crate::bridge::OntologyBridge;
use crate::model::Cardinality;

/// Resolves relation cardinalities.
#[derive(Debug, Clone, Copy)]
pub struct CardinalityResolver {
    bridge: OntologyBridge,
}

impl CardinalityResolver {
    /// Creates a resolver over the given bridge.
    #[must_use]
    pub fn new(bridge: OntologyBridge) -> Self {
        Self { bridge }
    }

    /// Creates a resolver over the bundled bridge table.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(OntologyBridge::bundled())
    }

    /// Resolves the cardinality of a property.
    ///
    /// When the bridge maps the property and the auxiliary graph carries a
    /// restriction for the counterpart:
    /// - max 1 in both traversal directions → one-to-one;
    /// - max 1 on the domain side only → many-to-one (each owner holds one
    ///   value, many owners may share a target);
    /// - max 1 on the range side only → one-to-many;
    /// - otherwise → many-to-many.
    ///
    /// Without an auxiliary signal the fallback is `Scalar` for datatype
    /// ranges and `ManyToMany` for class ranges. The default-to-many bias
    /// is intentional: absent contrary evidence the generator prefers
    /// richer plural relations over restrictive scalars, even though this
    /// can over-generate plural relations for conceptually scalar
    /// properties.
    #[must_use]
    pub fn resolve(
        &self,
        property_iri: Option<&str>,
        range_is_class: bool,
        aux: &AuxiliaryGraph,
    ) -> Cardinality {
        if let Some(iri) = property_iri {
            if let Some(aux_iri) = self.bridge.lookup(iri) {
                if let Some(restriction) = aux.restriction(aux_iri) {
                    return match (restriction.domain_is_single(), restriction.range_is_single()) {
                        (true, true) => Cardinality::OneToOne,
                        (true, false) => Cardinality::ManyToOne,
                        (false, true) => Cardinality::OneToMany,
                        (false, false) => Cardinality::ManyToMany,
                    };
                }
            }
        }
        if range_is_class {
            Cardinality::ManyToMany
        } else {
            Cardinality::Scalar
        }
    }
}

#[cfg(test)]
mod tests {
    use schemagen_vocab::CardinalityRestriction;

    use super::*;

    fn aux_with(iri: &str, domain_max: Option<u64>, range_max: Option<u64>) -> AuxiliaryGraph {
        let mut aux = AuxiliaryGraph::default();
        aux.restrictions.insert(
            iri.to_string(),
            CardinalityRestriction {
                domain_max,
                range_max,
                domain_min: None,
            },
        );
        aux
    }

    const BRAND: &str = "https://schema.org/brand";
    const BRAND_AUX: &str = "http://purl.org/goodrelations/v1#hasBrand";

    #[test]
    fn max_one_both_sides_is_one_to_one() {
        let aux = aux_with(BRAND_AUX, Some(1), Some(1));
        let resolver = CardinalityResolver::bundled();
        assert_eq!(
            resolver.resolve(Some(BRAND), true, &aux),
            Cardinality::OneToOne
        );
    }

    #[test]
    fn max_one_domain_side_is_many_to_one() {
        let aux = aux_with(BRAND_AUX, Some(1), None);
        let resolver = CardinalityResolver::bundled();
        assert_eq!(
            resolver.resolve(Some(BRAND), true, &aux),
            Cardinality::ManyToOne
        );
    }

    #[test]
    fn max_one_range_side_is_one_to_many() {
        let aux = aux_with(BRAND_AUX, None, Some(1));
        let resolver = CardinalityResolver::bundled();
        assert_eq!(
            resolver.resolve(Some(BRAND), true, &aux),
            Cardinality::OneToMany
        );
    }

    #[test]
    fn permissive_restriction_is_many_to_many() {
        let aux = aux_with(BRAND_AUX, Some(5), Some(3));
        let resolver = CardinalityResolver::bundled();
        assert_eq!(
            resolver.resolve(Some(BRAND), true, &aux),
            Cardinality::ManyToMany
        );
    }

    #[test]
    fn absent_mapping_datatype_range_is_scalar() {
        let aux = AuxiliaryGraph::default();
        let resolver = CardinalityResolver::bundled();
        assert_eq!(
            resolver.resolve(Some("https://schema.org/familyName"), false, &aux),
            Cardinality::Scalar
        );
    }

    #[test]
    fn absent_mapping_class_range_defaults_to_many() {
        let aux = AuxiliaryGraph::default();
        let resolver = CardinalityResolver::bundled();
        assert_eq!(
            resolver.resolve(Some("https://schema.org/knows"), true, &aux),
            Cardinality::ManyToMany
        );
    }

    #[test]
    fn custom_property_without_iri_uses_range_fallback() {
        let aux = AuxiliaryGraph::default();
        let resolver = CardinalityResolver::bundled();
        assert_eq!(resolver.resolve(None, false, &aux), Cardinality::Scalar);
        assert_eq!(resolver.resolve(None, true, &aux), Cardinality::ManyToMany);
    }
}
