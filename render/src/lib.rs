//! Rust struct rendering for schemagen.
//!
//! A [`StructSink`] consumes finished class models one at a time and writes
//! a Rust struct sketch per class: doc comments from the vocabulary
//! descriptions, one field per property with `Option`/`Vec` wrapping
//! derived from nullability and arity, and relation/grouping notes.
//!
//! The sink is strictly downstream of the core: it reads immutable models
//! and can fail per class without affecting model building.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod sink;

pub use emit::SourceFile;
pub use sink::StructSink;
