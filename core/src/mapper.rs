//! Range-to-value-type mapping.
//!
//! Maps a property's declared range IRIs to a concrete
//! [`ValueType`](crate::model::ValueType) with a deterministic tie-break
//! when more than one candidate exists. The mapper never fails: unknown
//! IRIs degrade to [`ValueType::Untyped`] and ambiguity is resolved, not
//! rejected.

use std::collections::BTreeMap;

use schemagen_vocab::iris;

use crate::model::{PrimitiveKind, ValueType};

/// Outcome of a range resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// The winning value type.
    pub value_type: ValueType,
    /// More than one recognised candidate competed; the caller logs the
    /// ambiguity as a warning.
    pub ambiguous: bool,
}

/// Maps range IRIs to value-type descriptors.
///
/// Holds the set of classes being generated (normalized IRI → class name);
/// a range matching one of them resolves to a reference descriptor.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    known_classes: BTreeMap<String, String>,
}

impl TypeMapper {
    /// Creates a mapper over the given generated-class table
    /// (normalized class IRI → generated class name).
    #[must_use]
    pub fn new(known_classes: BTreeMap<String, String>) -> Self {
        Self { known_classes }
    }

    /// Maps a single IRI to a primitive kind, if it names one.
    ///
    /// Recognises the schema.org datatypes and their XSD equivalents. The
    /// input must already be in canonical (https) schema.org form.
    #[must_use]
    pub fn primitive(iri: &str) -> Option<PrimitiveKind> {
        match iri {
            iris::SCHEMA_TEXT | iris::XSD_STRING => Some(PrimitiveKind::Text),
            iris::SCHEMA_URL | iris::XSD_ANY_URI => Some(PrimitiveKind::Url),
            iris::SCHEMA_BOOLEAN | iris::XSD_BOOLEAN => Some(PrimitiveKind::Boolean),
            iris::SCHEMA_INTEGER
            | iris::XSD_INTEGER
            | iris::XSD_INT
            | iris::XSD_LONG
            | iris::XSD_NON_NEGATIVE_INTEGER => Some(PrimitiveKind::Integer),
            iris::SCHEMA_NUMBER
            | iris::SCHEMA_FLOAT
            | iris::XSD_DECIMAL
            | iris::XSD_FLOAT
            | iris::XSD_DOUBLE => Some(PrimitiveKind::Float),
            iris::SCHEMA_DATE | iris::XSD_DATE => Some(PrimitiveKind::Date),
            iris::SCHEMA_DATETIME | iris::XSD_DATETIME => Some(PrimitiveKind::DateTime),
            iris::SCHEMA_TIME | iris::XSD_TIME => Some(PrimitiveKind::Time),
            _ => None,
        }
    }

    /// Resolves a set of range IRIs to a value type.
    ///
    /// Precedence: a reference to a generated class beats any primitive;
    /// among multiple class references the lexicographically first IRI
    /// wins; among multiple primitives text wins as the most permissive
    /// fallback. Unrecognised IRIs are ignored; when nothing matches the
    /// result is [`ValueType::Untyped`].
    #[must_use]
    pub fn resolve(&self, range_iris: &[String]) -> ResolvedType {
        let mut references: Vec<(String, &str)> = Vec::new();
        let mut primitives: Vec<PrimitiveKind> = Vec::new();

        for iri in range_iris {
            let normalized = iris::normalize_schema_iri(iri);
            if let Some(name) = self.known_classes.get(&normalized) {
                if !references.iter().any(|(u, _)| *u == normalized) {
                    references.push((normalized, name.as_str()));
                }
            } else if let Some(kind) = Self::primitive(&normalized) {
                if !primitives.contains(&kind) {
                    primitives.push(kind);
                }
            }
        }

        let ambiguous = references.len() + primitives.len() > 1;

        let value_type = if !references.is_empty() {
            references.sort();
            ValueType::Reference(references[0].1.to_string())
        } else if primitives.len() == 1 {
            ValueType::Primitive(primitives[0])
        } else if primitives.len() > 1 {
            ValueType::Primitive(PrimitiveKind::Text)
        } else {
            ValueType::Untyped
        };

        ResolvedType {
            value_type,
            ambiguous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> TypeMapper {
        let mut known = BTreeMap::new();
        known.insert(
            "https://schema.org/Person".to_string(),
            "Person".to_string(),
        );
        known.insert(
            "https://schema.org/PostalAddress".to_string(),
            "PostalAddress".to_string(),
        );
        TypeMapper::new(known)
    }

    fn uris(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn empty_range_is_untyped() {
        let resolved = mapper().resolve(&[]);
        assert_eq!(resolved.value_type, ValueType::Untyped);
        assert!(!resolved.ambiguous);
    }

    #[test]
    fn single_primitive() {
        let resolved = mapper().resolve(&uris(&["https://schema.org/Text"]));
        assert_eq!(
            resolved.value_type,
            ValueType::Primitive(PrimitiveKind::Text)
        );
        assert!(!resolved.ambiguous);
    }

    #[test]
    fn xsd_equivalents_map_to_primitives() {
        let m = mapper();
        for (iri, kind) in [
            (iris::XSD_BOOLEAN, PrimitiveKind::Boolean),
            (iris::XSD_INTEGER, PrimitiveKind::Integer),
            (iris::XSD_DECIMAL, PrimitiveKind::Float),
            (iris::XSD_DATE, PrimitiveKind::Date),
            (iris::XSD_DATETIME, PrimitiveKind::DateTime),
            (iris::XSD_TIME, PrimitiveKind::Time),
            (iris::XSD_ANY_URI, PrimitiveKind::Url),
        ] {
            assert_eq!(
                m.resolve(&uris(&[iri])).value_type,
                ValueType::Primitive(kind),
                "for {iri}"
            );
        }
    }

    #[test]
    fn single_known_class_is_a_reference() {
        let resolved = mapper().resolve(&uris(&["https://schema.org/Person"]));
        assert_eq!(
            resolved.value_type,
            ValueType::Reference("Person".to_string())
        );
        assert!(!resolved.ambiguous);
    }

    #[test]
    fn class_beats_primitive_and_is_flagged_ambiguous() {
        let resolved = mapper().resolve(&uris(&[
            "https://schema.org/Person",
            "https://schema.org/Text",
        ]));
        assert_eq!(
            resolved.value_type,
            ValueType::Reference("Person".to_string())
        );
        assert!(resolved.ambiguous);
    }

    #[test]
    fn first_class_iri_wins_lexicographically() {
        let resolved = mapper().resolve(&uris(&[
            "https://schema.org/PostalAddress",
            "https://schema.org/Person",
        ]));
        // "Person" < "PostalAddress" by IRI, regardless of argument order.
        assert_eq!(
            resolved.value_type,
            ValueType::Reference("Person".to_string())
        );
        assert!(resolved.ambiguous);
    }

    #[test]
    fn multiple_primitives_fall_back_to_text() {
        let resolved = mapper().resolve(&uris(&[
            "https://schema.org/Integer",
            "https://schema.org/Date",
        ]));
        assert_eq!(
            resolved.value_type,
            ValueType::Primitive(PrimitiveKind::Text)
        );
        assert!(resolved.ambiguous);
    }

    #[test]
    fn unknown_iris_degrade_to_untyped() {
        let resolved = mapper().resolve(&uris(&["https://schema.org/Vehicle"]));
        assert_eq!(resolved.value_type, ValueType::Untyped);
        assert!(!resolved.ambiguous);
    }

    #[test]
    fn http_form_matches_known_class() {
        let resolved = mapper().resolve(&uris(&["http://schema.org/Person"]));
        assert_eq!(
            resolved.value_type,
            ValueType::Reference("Person".to_string())
        );
    }
}
