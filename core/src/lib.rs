//! schemagen model builder.
//!
//! Turns a machine-readable vocabulary (a graph of typed resources and
//! properties), an auxiliary cardinality-bearing ontology, and a
//! user-authored configuration into a normalized, fully-resolved object
//! model: classes with resolved inheritance, each property annotated with
//! its cardinality, value type, nullability, uniqueness, grouping, and
//! access-control metadata.
//!
//! # Entry Point
//!
//! ```no_run
//! use schemagen_core::builder::ModelBuilder;
//! use schemagen_core::config::Config;
//! use schemagen_core::inflect::EnglishInflector;
//! use schemagen_core::sink::NullSink;
//!
//! # fn main() -> anyhow::Result<()> {
//! let vocab = schemagen_vocab::load_vocabulary("schemaorg.ttl".as_ref())?;
//! let aux = schemagen_vocab::load_auxiliary("goodrelations.ttl".as_ref())?;
//! let config = Config::from_toml_str(&std::fs::read_to_string("schemagen.toml")?)?;
//!
//! let builder = ModelBuilder::new(&vocab, &aux, &config, &EnglishInflector);
//! let report = builder.build(&mut NullSink);
//! assert!(report.ok());
//! # Ok(())
//! # }
//! ```
//!
//! Model building is single-pass and deterministic: configured types are
//! processed in declaration order, every map involved is ordered, and a
//! failure local to one type never blocks the remaining types.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod bridge;
pub mod builder;
pub mod cardinality;
pub mod config;
pub mod error;
pub mod inflect;
pub mod mapper;
pub mod model;
pub mod report;
pub mod sink;

pub use builder::ModelBuilder;
pub use config::{Config, PropertyConfig, TypeConfig};
pub use error::TypeError;
pub use model::{Cardinality, ClassModel, PrimitiveKind, PropertyModel, RelationSide, ValueType};
pub use report::{BuildReport, Diagnostic, Severity};
pub use sink::{NullSink, RenderSink};
