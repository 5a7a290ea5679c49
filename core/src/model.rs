//! Resolved model types.
//!
//! [`ClassModel`] and [`PropertyModel`] are the sole output of the core: the
//! generation-ready representation of a type and its members. They are built
//! once per run by the [`crate::builder::ModelBuilder`], handed to the
//! render sink, and never mutated afterwards.
//!
//! Cyclic class references (self-referencing or mutually-referencing types)
//! are represented by name: a [`ValueType::Reference`] carries the
//! referenced class's *name*, never its resolved body, so cyclic graphs
//! resolve without special-casing.

use serde::Deserialize;

/// The multiplicity of a property relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    /// A plain datatype value, no relation semantics.
    Scalar,
    /// Each side holds at most one of the other.
    OneToOne,
    /// One owner, many targets.
    OneToMany,
    /// Many owners, one target each.
    ManyToOne,
    /// Unrestricted in both directions.
    ManyToMany,
}

impl Cardinality {
    /// Returns the configuration-file spelling of this cardinality.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::Scalar => "scalar",
            Cardinality::OneToOne => "one-to-one",
            Cardinality::OneToMany => "one-to-many",
            Cardinality::ManyToOne => "many-to-one",
            Cardinality::ManyToMany => "many-to-many",
        }
    }

    /// True when the owner carries a collection of values.
    #[must_use]
    pub fn is_to_many(self) -> bool {
        matches!(self, Cardinality::OneToMany | Cardinality::ManyToMany)
    }
}

/// A primitive value kind of the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Free-form text.
    Text,
    /// Boolean.
    Boolean,
    /// Integer.
    Integer,
    /// Floating-point number.
    Float,
    /// Calendar date.
    Date,
    /// Date with time.
    DateTime,
    /// Time of day.
    Time,
    /// A URL, carried as a string.
    Url,
}

impl PrimitiveKind {
    /// Returns a short lowercase name for diagnostics and rendering.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Text => "text",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Date => "date",
            PrimitiveKind::DateTime => "date-time",
            PrimitiveKind::Time => "time",
            PrimitiveKind::Url => "url",
        }
    }
}

/// The resolved value type of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    /// No static type could be resolved; rendering emits an untyped member.
    Untyped,
    /// A primitive value.
    Primitive(PrimitiveKind),
    /// A reference to another generated class, by name.
    Reference(String),
}

impl ValueType {
    /// Returns the referenced class name, if this is a reference.
    #[must_use]
    pub fn reference_name(&self) -> Option<&str> {
        match self {
            ValueType::Reference(name) => Some(name),
            _ => None,
        }
    }

    /// Short description for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            ValueType::Untyped => "untyped".to_string(),
            ValueType::Primitive(kind) => kind.as_str().to_string(),
            ValueType::Reference(name) => format!("reference to `{name}`"),
        }
    }
}

/// Which side of a bidirectional relation this property is.
///
/// At most one of the two markers can exist per property; the enum makes
/// the mutual exclusion structural rather than conventional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RelationSide {
    /// Not part of a bidirectional relation.
    #[default]
    None,
    /// Inverse side; the string names the owning property on the referenced
    /// class.
    MappedBy(String),
    /// Owning side; the string names the inverse property on the referenced
    /// class.
    InversedBy(String),
}

/// A resolved property of a [`ClassModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyModel {
    /// Property name, unique within its owning class.
    pub name: String,
    /// Human-readable description from the vocabulary, if any.
    pub description: Option<String>,
    /// Resolved relation multiplicity.
    pub cardinality: Cardinality,
    /// Resolved value type.
    pub value_type: ValueType,
    /// False only when explicit configuration requires the property;
    /// vocabulary-only properties default to nullable.
    pub nullable: bool,
    /// Value must be unique across instances.
    pub unique: bool,
    /// Exposed for reads.
    pub readable: bool,
    /// Exposed for writes.
    pub writable: bool,
    /// Value type is a class marked embeddable, stored inline rather than
    /// referenced.
    pub embedded: bool,
    /// Owning/inverse marker for bidirectional relations.
    pub relation: RelationSide,
    /// Grouping tags, configuration order.
    pub groups: Vec<String>,
    /// Access-control expression, opaque to the core.
    pub access_control: Option<String>,
    /// True for user-defined properties that skip vocabulary resolution.
    pub custom: bool,
    /// Singular form of the name, present for to-many properties; used for
    /// per-element accessor naming downstream.
    pub singular_name: Option<String>,
    /// Arbitrary pass-through rendering hints.
    pub metadata: Option<toml::Value>,
}

impl PropertyModel {
    /// True when the property holds a collection (to-many cardinality).
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.cardinality.is_to_many()
    }
}

/// A resolved class, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModel {
    /// Generated class name.
    pub name: String,
    /// Source vocabulary resource IRI; `None` for purely configured types.
    pub uri: Option<String>,
    /// Parent class name, if the type has a generated parent.
    pub parent: Option<String>,
    /// Human-readable description from the vocabulary, if any.
    pub description: Option<String>,
    /// Resolved properties: vocabulary declaration order first, then
    /// configuration-only properties in configuration order. Names are
    /// unique.
    pub properties: Vec<PropertyModel>,
    /// The class cannot be instantiated directly.
    pub is_abstract: bool,
    /// Instances are stored inline in their owner rather than referenced.
    pub embeddable: bool,
    /// Access-control expression, opaque to the core.
    pub access_control: Option<String>,
    /// Operation declarations, passed through verbatim.
    pub operations: Option<toml::Value>,
    /// Arbitrary pass-through rendering hints.
    pub metadata: Option<toml::Value>,
}

impl ClassModel {
    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyModel> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        cardinality: Cardinality,
    }

    #[test]
    fn cardinality_strings_round_trip() {
        for c in [
            Cardinality::Scalar,
            Cardinality::OneToOne,
            Cardinality::OneToMany,
            Cardinality::ManyToOne,
            Cardinality::ManyToMany,
        ] {
            let toml = format!("cardinality = \"{}\"", c.as_str());
            let parsed: Holder = toml::from_str(&toml).unwrap();
            assert_eq!(parsed.cardinality, c);
        }
    }

    #[test]
    fn to_many_classification() {
        assert!(Cardinality::OneToMany.is_to_many());
        assert!(Cardinality::ManyToMany.is_to_many());
        assert!(!Cardinality::Scalar.is_to_many());
        assert!(!Cardinality::OneToOne.is_to_many());
        assert!(!Cardinality::ManyToOne.is_to_many());
    }

    #[test]
    fn relation_side_default_is_none() {
        assert_eq!(RelationSide::default(), RelationSide::None);
    }

    #[test]
    fn value_type_reference_name() {
        let vt = ValueType::Reference("PostalAddress".to_string());
        assert_eq!(vt.reference_name(), Some("PostalAddress"));
        assert_eq!(ValueType::Untyped.reference_name(), None);
        assert_eq!(
            ValueType::Primitive(PrimitiveKind::Text).reference_name(),
            None
        );
    }
}
