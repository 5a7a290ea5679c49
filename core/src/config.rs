//! User configuration.
//!
//! The configuration is a TOML document. Order-significant sections are
//! arrays of tables (`[[types]]`, `[[types.properties]]`) so declaration
//! order travels in plain `Vec`s; the builder's output order is the
//! configuration's declaration order.
//!
//! Every per-property field is optional: an empty override is a no-op, and
//! unspecified fields keep their vocabulary-derived defaults.

use serde::Deserialize;

use crate::model::Cardinality;

fn default_vocabulary_namespace() -> String {
    schemagen_vocab::iris::NS_SCHEMA.to_string()
}

/// The complete user configuration for one generation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Namespace used to derive a type's IRI from its name when `uri` is not
    /// given. Defaults to the schema.org namespace.
    #[serde(default = "default_vocabulary_namespace")]
    pub vocabulary_namespace: String,
    /// Configured types, declaration order. Output preserves this order.
    #[serde(default)]
    pub types: Vec<TypeConfig>,
}

impl Config {
    /// Parses a configuration from TOML source.
    ///
    /// # Errors
    ///
    /// Returns the TOML deserialization error for malformed documents or
    /// unknown fields.
    pub fn from_toml_str(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }

    /// Looks up a type's configuration by name.
    #[must_use]
    pub fn type_config(&self, name: &str) -> Option<&TypeConfig> {
        self.types.iter().find(|t| t.name == name)
    }

    /// True when `name` is configured and not excluded.
    #[must_use]
    pub fn is_included(&self, name: &str) -> bool {
        self.type_config(name).is_some_and(|t| !t.exclude)
    }
}

/// Per-type configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeConfig {
    /// Generated class name; also the vocabulary local name unless `uri`
    /// overrides it.
    pub name: String,
    /// Explicit vocabulary resource IRI. Defaults to
    /// `vocabulary_namespace` + `name`.
    #[serde(default)]
    pub uri: Option<String>,
    /// Parsed but never generated; references to excluded types degrade.
    #[serde(default)]
    pub exclude: bool,
    /// Parent class override. An empty string forces "no parent" even when
    /// the vocabulary declares a configured superclass.
    #[serde(default)]
    pub parent: Option<String>,
    /// The class cannot be instantiated directly.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// Instances are stored inline in their owner.
    #[serde(default)]
    pub embeddable: bool,
    /// No vocabulary resource exists; the type is entirely user-defined.
    #[serde(default)]
    pub custom: bool,
    /// Access-control expression, passed through verbatim.
    #[serde(default)]
    pub access_control: Option<String>,
    /// Operation declarations, passed through verbatim.
    #[serde(default)]
    pub operations: Option<toml::Value>,
    /// Arbitrary pass-through rendering hints.
    #[serde(default)]
    pub metadata: Option<toml::Value>,
    /// Per-property overrides and additions, declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyConfig>,
}

impl TypeConfig {
    /// Returns the vocabulary IRI for this type, deriving it from the
    /// namespace when no explicit `uri` is configured.
    #[must_use]
    pub fn resolved_uri(&self, namespace: &str) -> String {
        match &self.uri {
            Some(uri) => schemagen_vocab::iris::normalize_schema_iri(uri),
            None => format!("{namespace}{}", self.name),
        }
    }

    /// Looks up a property override by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyConfig> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Per-property configuration. All fields except `name` are optional; an
/// override replaces only the fields it specifies.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyConfig {
    /// Property name (the vocabulary local name for non-custom properties).
    pub name: String,
    /// Explicit range IRI, replacing the vocabulary's declared ranges.
    #[serde(default)]
    pub range: Option<String>,
    /// Cardinality hint, winning over auxiliary-ontology resolution.
    #[serde(default)]
    pub cardinality: Option<Cardinality>,
    /// `true` makes the property non-nullable.
    #[serde(default)]
    pub required: Option<bool>,
    /// Value must be unique across instances.
    #[serde(default)]
    pub unique: Option<bool>,
    /// Exposed for reads (default true).
    #[serde(default)]
    pub readable: Option<bool>,
    /// Exposed for writes (default true).
    #[serde(default)]
    pub writable: Option<bool>,
    /// Grouping tags.
    #[serde(default)]
    pub groups: Vec<String>,
    /// Access-control expression, passed through verbatim.
    #[serde(default)]
    pub access_control: Option<String>,
    /// Marks this property the inverse side; names the owning property on
    /// the referenced class. Mutually exclusive with `inversed_by`.
    #[serde(default)]
    pub mapped_by: Option<String>,
    /// Marks this property the owning side; names the inverse property on
    /// the referenced class. Mutually exclusive with `mapped_by`.
    #[serde(default)]
    pub inversed_by: Option<String>,
    /// Skip vocabulary resolution entirely; the property is user-defined.
    #[serde(default)]
    pub custom: bool,
    /// Store the referenced value inline rather than as a reference.
    /// Defaults to whether the referenced type is marked embeddable.
    #[serde(default)]
    pub embedded: Option<bool>,
    /// Arbitrary pass-through rendering hints (e.g. storage-column options).
    #[serde(default)]
    pub metadata: Option<toml::Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        vocabulary_namespace = "https://schema.org/"

        [[types]]
        name = "Person"
        parent = "Thing"

        [[types.properties]]
        name = "email"
        required = true
        unique = true
        groups = ["contact"]
        access_control = "is_granted('ROLE_ADMIN')"

        [[types.properties]]
        name = "memberOf"
        cardinality = "many-to-one"

        [[types]]
        name = "Thing"

        [[types]]
        name = "Legacy"
        exclude = true
    "#;

    #[test]
    fn parses_ordered_types_and_properties() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        let names: Vec<&str> = config.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Person", "Thing", "Legacy"]);

        let person = config.type_config("Person").unwrap();
        assert_eq!(person.parent.as_deref(), Some("Thing"));
        let email = person.property("email").unwrap();
        assert_eq!(email.required, Some(true));
        assert_eq!(email.unique, Some(true));
        assert_eq!(email.groups, vec!["contact"]);

        let member_of = person.property("memberOf").unwrap();
        assert_eq!(member_of.cardinality, Some(Cardinality::ManyToOne));
    }

    #[test]
    fn excluded_types_are_parsed_but_not_included() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        assert!(config.type_config("Legacy").is_some());
        assert!(!config.is_included("Legacy"));
        assert!(config.is_included("Person"));
        assert!(!config.is_included("Vehicle"));
    }

    #[test]
    fn uri_derivation_and_override() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        let person = config.type_config("Person").unwrap();
        assert_eq!(
            person.resolved_uri(&config.vocabulary_namespace),
            "https://schema.org/Person"
        );

        let explicit = Config::from_toml_str(
            r#"
            [[types]]
            name = "Book"
            uri = "http://schema.org/Book"
            "#,
        )
        .unwrap();
        // Explicit URIs are normalized to the canonical https form.
        assert_eq!(
            explicit.types[0].resolved_uri("https://schema.org/"),
            "https://schema.org/Book"
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_toml_str("[[types]]\nname = \"X\"\ncolour = 3\n");
        assert!(err.is_err());
    }

    #[test]
    fn empty_property_override_is_all_defaults() {
        let config = Config::from_toml_str(
            r#"
            [[types]]
            name = "Person"
            [[types.properties]]
            name = "familyName"
            "#,
        )
        .unwrap();
        let pc = config.types[0].property("familyName").unwrap();
        let defaults = PropertyConfig {
            name: "familyName".to_string(),
            ..PropertyConfig::default()
        };
        // Field-by-field equivalence with the all-default override; the
        // builder treats both identically (idempotent merge).
        assert_eq!(pc.range, defaults.range);
        assert_eq!(pc.cardinality, defaults.cardinality);
        assert_eq!(pc.required, defaults.required);
        assert_eq!(pc.unique, defaults.unique);
        assert_eq!(pc.groups, defaults.groups);
        assert_eq!(pc.custom, defaults.custom);
    }
}
