//! Word inflection seam.
//!
//! The builder needs a singular form of each to-many property name for
//! per-element accessor naming downstream. Inflection is injected; the
//! bundled [`EnglishInflector`] covers the suffix patterns that occur in
//! vocabulary property names without pulling in a lookup-table crate.

/// Singularization service injected into the builder. Pure, stateless.
pub trait Inflector {
    /// Returns the singular form of a plural noun.
    fn singularize(&self, plural: &str) -> String;
}

/// Suffix-rule English singularizer.
///
/// Handles the regular patterns (`ies` → `y`, `es` after sibilants, plain
/// `s`) plus the handful of irregular nouns that actually appear in
/// vocabulary property names.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl Inflector for EnglishInflector {
    fn singularize(&self, plural: &str) -> String {
        match plural {
            "children" => return "child".to_string(),
            "people" => return "person".to_string(),
            "men" => return "man".to_string(),
            "women" => return "woman".to_string(),
            _ => {}
        }

        if let Some(stem) = plural.strip_suffix("ies") {
            if !stem.is_empty() {
                return format!("{stem}y");
            }
        }
        if let Some(stem) = plural.strip_suffix("es") {
            if stem.ends_with("ss")
                || stem.ends_with('x')
                || stem.ends_with('z')
                || stem.ends_with("ch")
                || stem.ends_with("sh")
            {
                return stem.to_string();
            }
        }
        if let Some(stem) = plural.strip_suffix('s') {
            if !stem.is_empty() && !stem.ends_with('s') {
                return stem.to_string();
            }
        }
        plural.to_string()
    }
}

/// Inflector that returns its input unchanged; for tests and callers that
/// do not need per-element accessor names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInflector;

impl Inflector for NoopInflector {
    fn singularize(&self, plural: &str) -> String {
        plural.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_suffixes() {
        let inflector = EnglishInflector;
        assert_eq!(inflector.singularize("members"), "member");
        assert_eq!(inflector.singularize("categories"), "category");
        assert_eq!(inflector.singularize("addresses"), "address");
        assert_eq!(inflector.singularize("boxes"), "box");
        assert_eq!(inflector.singularize("branches"), "branch");
    }

    #[test]
    fn irregular_nouns() {
        let inflector = EnglishInflector;
        assert_eq!(inflector.singularize("children"), "child");
        assert_eq!(inflector.singularize("people"), "person");
    }

    #[test]
    fn already_singular_words_pass_through() {
        let inflector = EnglishInflector;
        assert_eq!(inflector.singularize("address"), "address");
        assert_eq!(inflector.singularize("knows"), "know");
    }
}
