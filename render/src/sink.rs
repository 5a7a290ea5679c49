//! The struct-emitting render sink.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use schemagen_core::model::{ClassModel, PrimitiveKind, PropertyModel, RelationSide, ValueType};
use schemagen_core::sink::RenderSink;

use crate::emit::{to_snake_case, write_file, SourceFile};

/// Renders each class as a Rust struct sketch, one file per class, plus a
/// `mod.rs` listing every module after the run (see [`StructSink::finish`]).
#[derive(Debug)]
pub struct StructSink {
    out_dir: PathBuf,
    modules: Vec<String>,
}

impl StructSink {
    /// Creates a sink writing into `out_dir`.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            modules: Vec::new(),
        }
    }

    /// Writes the `mod.rs` index for all rendered classes and consumes the
    /// sink. Call once after the build pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the index file cannot be written.
    pub fn finish(self) -> Result<()> {
        let mut f = SourceFile::new("Generated model modules.");
        let mut modules = self.modules;
        modules.sort_unstable();
        for module in &modules {
            f.line(&format!("pub mod {module};"));
        }
        write_file(&self.out_dir.join("mod.rs"), &f.finish())
    }

    /// Renders one class to a string, without touching the filesystem.
    #[must_use]
    pub fn render_to_string(class: &ClassModel) -> String {
        let mut module_doc = format!("`{}` model.", class.name);
        if let Some(uri) = &class.uri {
            module_doc.push_str(&format!("\n\nSource: <{uri}>"));
        }
        let mut f = SourceFile::new(&module_doc);

        if let Some(desc) = &class.description {
            f.doc_comment(desc);
        }
        if class.is_abstract {
            f.doc_comment("Abstract: not instantiated directly.");
        }
        if let Some(parent) = &class.parent {
            f.doc_comment(&format!("Extends `{parent}`."));
        }
        f.line("#[derive(Debug, Clone, PartialEq, Default)]");
        f.line(&format!("pub struct {} {{", class.name));
        for property in &class.properties {
            Self::render_property(&mut f, property);
        }
        f.line("}");
        f.finish()
    }

    fn render_property(f: &mut SourceFile, property: &PropertyModel) {
        if let Some(desc) = &property.description {
            f.indented_doc_comment(desc);
        }
        let mut notes: Vec<String> = Vec::new();
        if property.unique {
            notes.push("unique".to_string());
        }
        if !property.nullable && !property.is_array() {
            notes.push("required".to_string());
        }
        if property.embedded {
            notes.push("embedded".to_string());
        }
        match &property.relation {
            RelationSide::None => {}
            RelationSide::MappedBy(owner) => notes.push(format!("mapped by `{owner}`")),
            RelationSide::InversedBy(inverse) => notes.push(format!("inversed by `{inverse}`")),
        }
        if !property.groups.is_empty() {
            notes.push(format!("groups: {}", property.groups.join(", ")));
        }
        if !notes.is_empty() {
            f.indented_doc_comment(&format!("({})", notes.join("; ")));
        }

        let field = to_snake_case(&property.name);
        let base = Self::rust_type(&property.value_type);
        let ty = if property.is_array() {
            format!("Vec<{base}>")
        } else if property.nullable {
            format!("Option<{base}>")
        } else {
            base
        };
        f.line(&format!("    pub {field}: {ty},"));
    }

    /// Maps a resolved value type to the sketch's Rust type. Dates and
    /// times stay strings; choosing a date-time crate is the consumer's
    /// decision, not the generator's.
    fn rust_type(value_type: &ValueType) -> String {
        match value_type {
            ValueType::Untyped => "String".to_string(),
            ValueType::Primitive(kind) => match kind {
                PrimitiveKind::Text
                | PrimitiveKind::Url
                | PrimitiveKind::Date
                | PrimitiveKind::DateTime
                | PrimitiveKind::Time => "String".to_string(),
                PrimitiveKind::Boolean => "bool".to_string(),
                PrimitiveKind::Integer => "i64".to_string(),
                PrimitiveKind::Float => "f64".to_string(),
            },
            ValueType::Reference(name) => name.clone(),
        }
    }
}

impl RenderSink for StructSink {
    fn render(&mut self, class: &ClassModel) -> Result<()> {
        let module = to_snake_case(&class.name);
        let content = Self::render_to_string(class);
        let path = self.out_dir.join(format!("{module}.rs"));
        write_file(&path, &content)?;
        debug!(class = class.name.as_str(), "rendered {}", path.display());
        self.modules.push(module);
        Ok(())
    }
}
