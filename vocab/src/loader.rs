//! Turtle loading.
//!
//! Parses a Turtle document with sophia and converts the triple stream into
//! the owned graph structures of [`crate::model`]. No sophia type escapes
//! this module; the rest of the workspace only ever sees `String`-keyed
//! graphs.
//!
//! Loading happens exactly once per run, before any model building. A
//! missing or malformed source is fatal and reported immediately.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use sophia_api::parser::TripleParser;
use sophia_api::source::TripleSource;
use sophia_api::term::Term;
use sophia_api::triple::Triple;
use sophia_turtle::parser::turtle::TurtleParser;
use thiserror::Error;
use tracing::{debug, warn};

use crate::iris;
use crate::model::{
    AuxiliaryGraph, CardinalityRestriction, ClassResource, PropertyResource, VocabularyGraph,
};

/// Error loading a vocabulary or auxiliary-ontology source.
///
/// Both variants invalidate the entire run: no model can be built without
/// the graphs.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("failed to read {path}")]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The source file is not well-formed Turtle.
    #[error("turtle parse error: {message}")]
    Parse {
        /// Parser diagnostic.
        message: String,
    },
}

/// One node of a parsed triple, owned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Node {
    Iri(String),
    Blank(String),
    Literal(String),
}

impl Node {
    fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

fn to_node<T: Term>(term: T) -> Node {
    if let Some(iri) = term.iri() {
        // Canonicalize here so every downstream lookup sees one spelling.
        Node::Iri(iris::normalize_schema_iri(iri.as_str()))
    } else if let Some(id) = term.bnode_id() {
        Node::Blank(id.as_str().to_string())
    } else if let Some(lex) = term.lexical_form() {
        Node::Literal(lex.to_string())
    } else {
        // Quoted triples and variables cannot occur in plain Turtle.
        Node::Literal(String::new())
    }
}

/// Parses a Turtle document into an owned triple list, document order.
fn parse_triples(src: &str) -> Result<Vec<(Node, Node, Node)>, LoadError> {
    let parser = TurtleParser { base: None };
    let mut triples = Vec::new();
    parser
        .parse_str(src)
        .for_each_triple(|t| {
            triples.push((to_node(t.s()), to_node(t.p()), to_node(t.o())));
        })
        .map_err(|e| LoadError::Parse {
            message: e.to_string(),
        })?;
    Ok(triples)
}

/// Loads the base vocabulary graph from a Turtle file.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read or parsed. Either is
/// fatal for the run.
pub fn load_vocabulary(path: &Path) -> Result<VocabularyGraph, LoadError> {
    let src = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_vocabulary(&src)?;
    debug!(
        classes = graph.class_count(),
        properties = graph.property_count(),
        "vocabulary loaded from {}",
        path.display()
    );
    Ok(graph)
}

/// Loads the auxiliary cardinality-bearing ontology from a Turtle file.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read or parsed. Either is
/// fatal for the run.
pub fn load_auxiliary(path: &Path) -> Result<AuxiliaryGraph, LoadError> {
    let src = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_auxiliary(&src)?;
    debug!(
        restrictions = graph.len(),
        "auxiliary ontology loaded from {}",
        path.display()
    );
    Ok(graph)
}

/// Parses a base vocabulary graph from a Turtle string.
///
/// Recognised assertions: `rdf:type` of classes and properties,
/// `rdfs:subClassOf`, `rdfs:label`, `rdfs:comment`, domain and range in both
/// the schema.org (`domainIncludes`/`rangeIncludes`) and RDFS forms.
/// Subjects carrying domain or range assertions are treated as properties
/// even without an explicit type, and superclass / domain targets are
/// registered as classes; trimmed vocabulary excerpts often omit the
/// explicit typing.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the document is not well-formed Turtle.
pub fn parse_vocabulary(src: &str) -> Result<VocabularyGraph, LoadError> {
    let triples = parse_triples(src)?;
    let mut graph = VocabularyGraph::default();

    let ensure_class = |graph: &mut VocabularyGraph, uri: &str| {
        graph
            .classes
            .entry(uri.to_string())
            .or_insert_with(|| ClassResource {
                uri: uri.to_string(),
                ..ClassResource::default()
            });
    };
    let ensure_property = |graph: &mut VocabularyGraph, uri: &str| {
        graph
            .properties
            .entry(uri.to_string())
            .or_insert_with(|| PropertyResource {
                uri: uri.to_string(),
                ..PropertyResource::default()
            });
    };

    // Labels and comments apply to classes and properties alike; buffer them
    // until both kinds of subject are known.
    let mut labels: BTreeMap<String, String> = BTreeMap::new();
    let mut comments: BTreeMap<String, String> = BTreeMap::new();

    for (s, p, o) in &triples {
        let (Some(subject), Node::Iri(predicate)) = (s.as_iri(), p) else {
            continue;
        };
        match predicate.as_str() {
            iris::RDF_TYPE => match o.as_iri() {
                Some(iris::RDFS_CLASS | iris::OWL_CLASS) => ensure_class(&mut graph, subject),
                Some(
                    iris::RDF_PROPERTY
                    | iris::OWL_OBJECT_PROPERTY
                    | iris::OWL_DATATYPE_PROPERTY,
                ) => ensure_property(&mut graph, subject),
                _ => {}
            },
            iris::RDFS_SUBCLASS_OF => {
                if let Some(parent) = o.as_iri() {
                    ensure_class(&mut graph, subject);
                    ensure_class(&mut graph, parent);
                    if let Some(class) = graph.classes.get_mut(subject) {
                        if !class.sub_class_of.iter().any(|c| c == parent) {
                            class.sub_class_of.push(parent.to_string());
                        }
                    }
                }
            }
            iris::RDFS_LABEL => {
                if let Node::Literal(text) = o {
                    labels.entry(subject.to_string()).or_insert(text.clone());
                }
            }
            iris::RDFS_COMMENT => {
                if let Node::Literal(text) = o {
                    comments.entry(subject.to_string()).or_insert(text.clone());
                }
            }
            iris::SCHEMA_DOMAIN_INCLUDES | iris::RDFS_DOMAIN => {
                if let Some(domain) = o.as_iri() {
                    ensure_property(&mut graph, subject);
                    ensure_class(&mut graph, domain);
                    if let Some(prop) = graph.properties.get_mut(subject) {
                        if !prop.domains.iter().any(|d| d == domain) {
                            prop.domains.push(domain.to_string());
                        }
                    }
                    let index = graph.domain_index.entry(domain.to_string()).or_default();
                    if !index.iter().any(|p| p == subject) {
                        index.push(subject.to_string());
                    }
                }
            }
            iris::SCHEMA_RANGE_INCLUDES | iris::RDFS_RANGE => {
                if let Some(range) = o.as_iri() {
                    ensure_property(&mut graph, subject);
                    if let Some(prop) = graph.properties.get_mut(subject) {
                        if !prop.ranges.iter().any(|r| r == range) {
                            prop.ranges.push(range.to_string());
                        }
                    }
                }
            }
            _ => {}
        }
    }

    for (uri, label) in labels {
        if let Some(class) = graph.classes.get_mut(&uri) {
            class.label = Some(label.clone());
        }
        if let Some(prop) = graph.properties.get_mut(&uri) {
            prop.label = Some(label);
        }
    }
    for (uri, comment) in comments {
        if let Some(class) = graph.classes.get_mut(&uri) {
            class.comment = Some(comment.clone());
        }
        if let Some(prop) = graph.properties.get_mut(&uri) {
            prop.comment = Some(comment);
        }
    }

    Ok(graph)
}

/// Parses the auxiliary ontology from a Turtle string, extracting
/// cardinality restrictions.
///
/// A node `_:r a owl:Restriction ; owl:onProperty P ; owl:maxCardinality N`
/// bounds the domain direction of `P`; the same shape with
/// `owl:onProperty [ owl:inverseOf P ]` bounds the range direction.
/// `owl:cardinality` counts as both a minimum and a maximum assertion.
/// Multiple restrictions on one property keep the tightest bound.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the document is not well-formed Turtle.
pub fn parse_auxiliary(src: &str) -> Result<AuxiliaryGraph, LoadError> {
    let triples = parse_triples(src)?;

    // Index predicate/object pairs by subject; restriction nodes are almost
    // always blank, so the key is the full node, not just an IRI.
    let mut by_subject: BTreeMap<&Node, Vec<(&Node, &Node)>> = BTreeMap::new();
    for (s, p, o) in &triples {
        by_subject.entry(s).or_default().push((p, o));
    }

    let object_of = |subject: &Node, predicate: &str| -> Option<&Node> {
        by_subject.get(subject).and_then(|pairs| {
            pairs
                .iter()
                .find(|(p, _)| p.as_iri() == Some(predicate))
                .map(|(_, o)| *o)
        })
    };

    let mut graph = AuxiliaryGraph::default();

    for (subject, pairs) in &by_subject {
        let is_restriction = pairs
            .iter()
            .any(|(p, o)| p.as_iri() == Some(iris::RDF_TYPE) && o.as_iri() == Some(iris::OWL_RESTRICTION));
        if !is_restriction {
            continue;
        }

        // Resolve the restricted property and which direction it bounds.
        let Some(on_property) = object_of(subject, iris::OWL_ON_PROPERTY) else {
            warn!("owl:Restriction without owl:onProperty; skipping");
            continue;
        };
        let (property_iri, inverse) = match on_property {
            Node::Iri(iri) => (iri.clone(), false),
            blank @ Node::Blank(_) => match object_of(blank, iris::OWL_INVERSE_OF) {
                Some(Node::Iri(iri)) => (iri.clone(), true),
                _ => {
                    warn!("owl:onProperty blank node without owl:inverseOf; skipping");
                    continue;
                }
            },
            Node::Literal(_) => continue,
        };

        let parse_bound = |predicate: &str| -> Option<u64> {
            match object_of(subject, predicate) {
                Some(Node::Literal(lex)) => match lex.parse::<u64>() {
                    Ok(n) => Some(n),
                    Err(_) => {
                        warn!(
                            property = property_iri.as_str(),
                            "non-numeric cardinality literal `{lex}`; ignoring"
                        );
                        None
                    }
                },
                _ => None,
            }
        };

        let exact = parse_bound(iris::OWL_CARDINALITY);
        let max = parse_bound(iris::OWL_MAX_CARDINALITY)
            .or_else(|| parse_bound(iris::OWL_MAX_QUALIFIED_CARDINALITY))
            .or(exact);
        let min = parse_bound(iris::OWL_MIN_CARDINALITY).or(exact);

        let entry = graph.restrictions.entry(property_iri).or_default();
        if inverse {
            entry.range_max = tighten(entry.range_max, max);
        } else {
            entry.domain_max = tighten(entry.domain_max, max);
            entry.domain_min = entry.domain_min.or(min);
        }
    }

    Ok(graph)
}

/// Keeps the tighter (smaller) of two optional upper bounds.
fn tighten(current: Option<u64>, incoming: Option<u64>) -> Option<u64> {
    match (current, incoming) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
