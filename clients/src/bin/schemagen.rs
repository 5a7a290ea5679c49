//! `schemagen` — generates a resolved class model from a vocabulary graph
//! and a user configuration, rendering one Rust struct sketch per class.
//!
//! **Usage:**
//! ```text
//! schemagen --config schemagen.toml --vocabulary schemaorg.ttl \
//!           [--auxiliary goodrelations.ttl] [--output generated/]
//! ```
//!
//! The graphs are loaded fully before any model building; an unreadable or
//! malformed source aborts the run immediately. Per-type failures and
//! render failures do not: the remaining types still generate, every
//! warning and failure is listed in the end-of-run summary, and the exit
//! status reflects whether any class failed.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use schemagen_core::builder::ModelBuilder;
use schemagen_core::config::Config;
use schemagen_core::inflect::EnglishInflector;
use schemagen_core::report::Severity;
use schemagen_render::StructSink;
use schemagen_vocab::{load_auxiliary, load_vocabulary, AuxiliaryGraph};

/// Generate a resolved class model from a vocabulary and configuration.
#[derive(Parser)]
#[command(
    name = "schemagen",
    about = "Generate a resolved class model from a vocabulary graph and configuration"
)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, short = 'c')]
    config: PathBuf,

    /// Path to the vocabulary Turtle file (e.g. a schema.org release).
    #[arg(long)]
    vocabulary: PathBuf,

    /// Path to the auxiliary cardinality-bearing ontology Turtle file.
    /// Without it, every relation falls back to the default cardinalities.
    #[arg(long)]
    auxiliary: Option<PathBuf>,

    /// Output directory for the generated files.
    #[arg(long, short = 'o', default_value = "generated")]
    output: PathBuf,

    /// Only print the final summary line, not every diagnostic.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_src = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read {}", args.config.display()))?;
    let config = Config::from_toml_str(&config_src)
        .with_context(|| format!("invalid configuration in {}", args.config.display()))?;

    // Both graphs load fully before model building; failures here abort the
    // run before any class processing.
    let vocab = load_vocabulary(&args.vocabulary)?;
    let aux = match &args.auxiliary {
        Some(path) => load_auxiliary(path)?,
        None => AuxiliaryGraph::default(),
    };

    let mut sink = StructSink::new(&args.output);
    let builder = ModelBuilder::new(&vocab, &aux, &config, &EnglishInflector);
    let report = builder.build(&mut sink);
    sink.finish()?;

    if !args.quiet {
        for diagnostic in &report.diagnostics {
            let status = match diagnostic.severity {
                Severity::Warning => "WARN",
                Severity::Error => "FAIL",
            };
            println!("[{}] {} — {}", status, diagnostic.subject, diagnostic.message);
        }
    }

    println!(
        "Summary: {} classes, {} properties, {} warnings, {} failures",
        report.classes.len(),
        report.properties_resolved,
        report.warning_count(),
        report.error_count()
    );

    if !report.ok() {
        eprintln!(
            "Generation finished with {} failure(s); see the summary above.",
            report.error_count()
        );
        process::exit(1);
    }

    println!("Generation complete: {}", args.output.display());
    Ok(())
}
