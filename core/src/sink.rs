//! Render sink seam.
//!
//! The core's contract ends at producing finished [`ClassModel`]s; a sink
//! turns each one into output artifacts. The builder hands classes over
//! one at a time, in configuration order, and a sink failure for one class
//! never blocks generation of the remaining classes.

use crate::model::ClassModel;

/// Downstream consumer of finished class models.
pub trait RenderSink {
    /// Renders one class. The model is final: the core never touches it
    /// again after this call.
    ///
    /// # Errors
    ///
    /// Implementations report template or I/O failures; the builder records
    /// them per class and continues.
    fn render(&mut self, class: &ClassModel) -> anyhow::Result<()>;
}

/// Sink that discards every class; for model-only runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _class: &ClassModel) -> anyhow::Result<()> {
        Ok(())
    }
}
