//! Vocabulary and auxiliary-ontology graphs for schemagen.
//!
//! This crate owns the read-only inputs of a generation run: the base
//! vocabulary graph (classes and properties, e.g. schema.org) and the
//! auxiliary cardinality-bearing ontology (e.g. GoodRelations). Both are
//! parsed from Turtle with sophia, converted into fully-owned indexed
//! structures, and never mutated afterwards.
//!
//! # Entry Points
//!
//! ```no_run
//! let vocab = schemagen_vocab::load_vocabulary("schemaorg.ttl".as_ref())?;
//! let aux = schemagen_vocab::load_auxiliary("goodrelations.ttl".as_ref())?;
//! # Ok::<(), schemagen_vocab::LoadError>(())
//! ```
//!
//! Loading is the only fallible stage; a malformed or unreadable source is
//! fatal for the whole run and is surfaced before any model building starts.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod iris;
pub mod loader;
pub mod model;

pub use loader::{load_auxiliary, load_vocabulary, parse_auxiliary, parse_vocabulary, LoadError};
pub use model::{
    AuxiliaryGraph, CardinalityRestriction, ClassResource, PropertyResource, VocabularyGraph,
};
