//! Model building.
//!
//! [`ModelBuilder`] is the single-pass orchestrator: for each configured
//! type, in configuration order, it resolves the type's vocabulary
//! resource, its parent, and its merged property set, applies the
//! [`TypeMapper`] and [`CardinalityResolver`], and hands the finished
//! [`ClassModel`] to the render sink before moving on.
//!
//! Failure semantics: a configuration conflict is fatal for the offending
//! type only; ambiguous ranges and unresolvable references degrade with a
//! logged warning; a render failure is recorded per class. Nothing local
//! to one type ever blocks the remaining types.

use std::collections::{BTreeMap, BTreeSet};

use schemagen_vocab::iris;
use schemagen_vocab::{AuxiliaryGraph, PropertyResource, VocabularyGraph};
use tracing::{debug, warn};

use crate::cardinality::CardinalityResolver;
use crate::config::{Config, PropertyConfig, TypeConfig};
use crate::error::TypeError;
use crate::inflect::Inflector;
use crate::mapper::TypeMapper;
use crate::model::{ClassModel, PropertyModel, RelationSide, ValueType};
use crate::report::BuildReport;
use crate::sink::RenderSink;

/// A property candidate collected for one type, before resolution.
struct Candidate<'a> {
    name: String,
    vocab: Option<&'a PropertyResource>,
    cfg: Option<&'a PropertyConfig>,
    /// Local name of the ancestor class that contributed this candidate,
    /// when it was pulled in by inheritance flattening.
    inherited_from: Option<String>,
}

/// Builds the resolved class model from the vocabulary graph, the
/// auxiliary ontology, and the user configuration.
pub struct ModelBuilder<'a> {
    vocab: &'a VocabularyGraph,
    aux: &'a AuxiliaryGraph,
    config: &'a Config,
    inflector: &'a dyn Inflector,
    mapper: TypeMapper,
    resolver: CardinalityResolver,
    /// Normalized type IRI → generated class name, included types only.
    uri_to_name: BTreeMap<String, String>,
    namespace: String,
}

impl<'a> ModelBuilder<'a> {
    /// Creates a builder over the given inputs, using the bundled
    /// ontology-bridge table for cardinality resolution.
    #[must_use]
    pub fn new(
        vocab: &'a VocabularyGraph,
        aux: &'a AuxiliaryGraph,
        config: &'a Config,
        inflector: &'a dyn Inflector,
    ) -> Self {
        Self::with_resolver(vocab, aux, config, inflector, CardinalityResolver::bundled())
    }

    /// Creates a builder with an explicit cardinality resolver (an
    /// alternative bridge bundle).
    #[must_use]
    pub fn with_resolver(
        vocab: &'a VocabularyGraph,
        aux: &'a AuxiliaryGraph,
        config: &'a Config,
        inflector: &'a dyn Inflector,
        resolver: CardinalityResolver,
    ) -> Self {
        let namespace = iris::normalize_schema_iri(&config.vocabulary_namespace);
        let mut uri_to_name = BTreeMap::new();
        for tc in config.types.iter().filter(|t| !t.exclude) {
            uri_to_name.insert(tc.resolved_uri(&namespace), tc.name.clone());
        }
        let mapper = TypeMapper::new(uri_to_name.clone());
        Self {
            vocab,
            aux,
            config,
            inflector,
            mapper,
            resolver,
            uri_to_name,
            namespace,
        }
    }

    /// Builds every configured type, in configuration order, handing each
    /// finished class to `sink` before proceeding to the next.
    ///
    /// Never fails as a whole: per-type conflicts and render failures are
    /// recorded in the returned report and the run continues.
    #[must_use]
    pub fn build(&self, sink: &mut dyn RenderSink) -> BuildReport {
        let mut report = BuildReport::new();
        for tc in &self.config.types {
            if tc.exclude {
                debug!(type_name = tc.name.as_str(), "excluded by configuration");
                continue;
            }
            match self.build_type(tc, &mut report) {
                Ok(class) => {
                    report.classes.push(class.name.clone());
                    report.properties_resolved += class.properties.len();
                    debug!(
                        type_name = class.name.as_str(),
                        properties = class.properties.len(),
                        "class resolved"
                    );
                    if let Err(err) = sink.render(&class) {
                        warn!(type_name = class.name.as_str(), "render failed: {err:#}");
                        report.render_failures += 1;
                        report.error(class.name.clone(), format!("render failed: {err:#}"));
                    }
                }
                Err(err) => {
                    warn!(type_name = tc.name.as_str(), "type skipped: {err}");
                    report.error(tc.name.clone(), err.to_string());
                }
            }
        }
        report
    }

    /// Resolves one configured type into a finished class model.
    fn build_type(&self, tc: &'a TypeConfig, report: &mut BuildReport) -> Result<ClassModel, TypeError> {
        let type_uri = tc.resolved_uri(&self.namespace);
        let resource = if tc.custom {
            None
        } else {
            let found = self.vocab.class(&type_uri);
            if found.is_none() {
                debug!(
                    type_name = tc.name.as_str(),
                    "no vocabulary resource at {type_uri}; treating as custom"
                );
            }
            found
        };

        let parent = match &tc.parent {
            // An empty override forces "no parent".
            Some(p) if p.is_empty() => None,
            Some(p) => {
                if !self.config.is_included(p) {
                    return Err(TypeError::UnknownParent { parent: p.clone() });
                }
                Some(p.clone())
            }
            None => resource.and_then(|r| {
                r.sub_class_of
                    .iter()
                    .find_map(|sup| self.uri_to_name.get(sup).cloned())
            }),
        };

        let candidates = self.collect_candidates(tc, resource.map(|r| r.uri.as_str()), parent.is_none(), report);

        let mut properties = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            properties.push(self.build_property(tc, &type_uri, candidate, report)?);
        }

        Ok(ClassModel {
            name: tc.name.clone(),
            uri: resource.map(|r| r.uri.clone()),
            parent,
            description: resource.and_then(|r| r.comment.clone()),
            properties,
            is_abstract: tc.is_abstract,
            embeddable: tc.embeddable,
            access_control: tc.access_control.clone(),
            operations: tc.operations.clone(),
            metadata: tc.metadata.clone(),
        })
    }

    /// Collects the property candidates of one type: vocabulary-declared
    /// properties in declaration order, ancestor properties when the type
    /// has no generated parent, then configuration-only properties in
    /// configuration order.
    fn collect_candidates(
        &self,
        tc: &'a TypeConfig,
        resource_uri: Option<&str>,
        flatten_ancestors: bool,
        report: &mut BuildReport,
    ) -> Vec<Candidate<'a>> {
        let mut candidates: Vec<Candidate<'a>> = Vec::new();

        if let Some(uri) = resource_uri {
            for prop in self.vocab.properties_of(uri) {
                let name = iris::local_name(&prop.uri).to_string();
                if candidates.iter().all(|c| c.name != name) {
                    candidates.push(Candidate {
                        name,
                        vocab: Some(prop),
                        cfg: None,
                        inherited_from: None,
                    });
                }
            }

            // Without a generated parent, inherited properties must be
            // materialized on the class itself. Walk the superclass chain
            // breadth-first so the closest declaration wins on collision.
            if flatten_ancestors {
                let mut visited: BTreeSet<String> = BTreeSet::new();
                visited.insert(uri.to_string());
                let mut frontier: Vec<String> = self.vocab.superclasses_of(uri).to_vec();
                while !frontier.is_empty() {
                    let mut next: Vec<String> = Vec::new();
                    for ancestor in &frontier {
                        if !visited.insert(ancestor.clone()) {
                            continue;
                        }
                        let ancestor_name = iris::local_name(ancestor).to_string();
                        for prop in self.vocab.properties_of(ancestor) {
                            let name = iris::local_name(&prop.uri).to_string();
                            if let Some(existing) = candidates.iter().find(|c| c.name == name) {
                                if let Some(closer) = &existing.inherited_from {
                                    report.warn(
                                        format!("{}.{name}", tc.name),
                                        format!(
                                            "inherited from both `{closer}` and \
                                             `{ancestor_name}`; keeping `{closer}`"
                                        ),
                                    );
                                }
                                continue;
                            }
                            candidates.push(Candidate {
                                name,
                                vocab: Some(prop),
                                cfg: None,
                                inherited_from: Some(ancestor_name.clone()),
                            });
                        }
                        next.extend(self.vocab.superclasses_of(ancestor).iter().cloned());
                    }
                    frontier = next;
                }
            }
        }

        for pc in &tc.properties {
            if let Some(existing) = candidates.iter_mut().find(|c| c.name == pc.name) {
                existing.cfg = Some(pc);
            } else {
                // A configured property may still name a vocabulary
                // property whose domain assertions do not mention this
                // type; its declared ranges then serve as defaults.
                let vocab_prop = if pc.custom {
                    None
                } else {
                    self.vocab.property(&format!("{}{}", self.namespace, pc.name))
                };
                candidates.push(Candidate {
                    name: pc.name.clone(),
                    vocab: vocab_prop,
                    cfg: Some(pc),
                    inherited_from: None,
                });
            }
        }

        candidates
    }

    /// Resolves one candidate into a finished property model.
    fn build_property(
        &self,
        tc: &TypeConfig,
        type_uri: &str,
        candidate: &Candidate<'a>,
        report: &mut BuildReport,
    ) -> Result<PropertyModel, TypeError> {
        let cfg = candidate.cfg;
        let subject = format!("{}.{}", tc.name, candidate.name);

        let ranges: Vec<String> = match cfg.and_then(|c| c.range.as_deref()) {
            Some(range) => vec![iris::normalize_schema_iri(range)],
            None => candidate
                .vocab
                .map(|v| v.ranges.clone())
                .unwrap_or_default(),
        };

        let resolved = self.mapper.resolve(&ranges);
        let value_type = resolved.value_type;
        if resolved.ambiguous {
            report.warn(
                subject.clone(),
                format!(
                    "ambiguous range ({} candidates); resolved to {}",
                    ranges.len(),
                    value_type.describe()
                ),
            );
        }
        if value_type == ValueType::Untyped {
            if let Some(unresolved) = ranges
                .iter()
                .find(|r| TypeMapper::primitive(r).is_none())
            {
                report.warn(
                    subject.clone(),
                    format!("range `{unresolved}` does not name a configured type; property left untyped"),
                );
            }
        }

        let cardinality = match cfg.and_then(|c| c.cardinality) {
            Some(hint) => hint,
            None => self.resolver.resolve(
                candidate.vocab.map(|v| v.uri.as_str()),
                matches!(value_type, ValueType::Reference(_)),
                self.aux,
            ),
        };

        let relation = match (
            cfg.and_then(|c| c.mapped_by.clone()),
            cfg.and_then(|c| c.inversed_by.clone()),
        ) {
            (Some(_), Some(_)) => {
                return Err(TypeError::ConflictingRelationSides {
                    property: candidate.name.clone(),
                })
            }
            (Some(mapped_by), None) => RelationSide::MappedBy(mapped_by),
            (None, Some(inversed_by)) => RelationSide::InversedBy(inversed_by),
            (None, None) => match (&value_type, cardinality.is_to_many()) {
                (ValueType::Reference(target), true) => {
                    match self.back_reference(target, type_uri, &candidate.name, &tc.name) {
                        Some(back) => RelationSide::MappedBy(back),
                        None => RelationSide::None,
                    }
                }
                _ => RelationSide::None,
            },
        };

        let embedded = match cfg.and_then(|c| c.embedded) {
            Some(explicit) => explicit,
            None => value_type
                .reference_name()
                .and_then(|name| self.config.type_config(name))
                .is_some_and(|t| t.embeddable),
        };

        let singular_name = cardinality
            .is_to_many()
            .then(|| self.inflector.singularize(&candidate.name));

        Ok(PropertyModel {
            name: candidate.name.clone(),
            description: candidate.vocab.and_then(|v| v.comment.clone()),
            cardinality,
            value_type,
            nullable: cfg.and_then(|c| c.required).map_or(true, |required| !required),
            unique: cfg.and_then(|c| c.unique).unwrap_or(false),
            readable: cfg.and_then(|c| c.readable).unwrap_or(true),
            writable: cfg.and_then(|c| c.writable).unwrap_or(true),
            embedded,
            relation,
            groups: cfg.map(|c| c.groups.clone()).unwrap_or_default(),
            access_control: cfg.and_then(|c| c.access_control.clone()),
            custom: cfg.is_some_and(|c| c.custom),
            singular_name,
            metadata: cfg.and_then(|c| c.metadata.clone()),
        })
    }

    /// Scans the referenced class for a property whose range loops back to
    /// `this_type_uri`; its name becomes this side's `mapped_by` marker.
    /// A self-referencing property never pairs with itself.
    fn back_reference(
        &self,
        target_name: &str,
        this_type_uri: &str,
        this_property_name: &str,
        owner_name: &str,
    ) -> Option<String> {
        let target_cfg = self.config.type_config(target_name)?;
        let target_uri = target_cfg.resolved_uri(&self.namespace);

        for prop in self.vocab.properties_of(&target_uri) {
            let back_name = iris::local_name(&prop.uri);
            if target_name == owner_name && back_name == this_property_name {
                continue;
            }
            if prop.ranges.iter().any(|r| r == this_type_uri) {
                return Some(back_name.to_string());
            }
        }
        for pc in &target_cfg.properties {
            if target_name == owner_name && pc.name == this_property_name {
                continue;
            }
            let range = pc.range.as_deref().map(iris::normalize_schema_iri);
            if range.as_deref() == Some(this_type_uri) {
                return Some(pc.name.clone());
            }
        }
        None
    }
}
