// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use oxrdf::vocab::{rdf, rdfs};
use oxrdf::NamedNodeRef;
use rdfvocab_iri::{is_correct_split, IriParseError, Namespace};
use thiserror::Error;

use crate::parse::{Node, NodeIdx, RdfContent};
use crate::terms::{cc, dc, dcterms, owl, schema, skos, vann, vs};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unable to figure out the namespace IRI of the vocabulary; checked vann:preferredNamespaceUri and the owl:Ontology subject")]
    MissingNamespaceUri,
    #[error("Unable to figure out the preferred namespace prefix of the vocabulary; checked vann:preferredNamespacePrefix, the document prefixes and the input file-name")]
    MissingNamespacePrefix,
    #[error("The namespace '{namespace}' is not a valid IRI: {source}")]
    InvalidNamespace {
        namespace: String,
        source: IriParseError,
    },
}

const CLASS_TYPES: &[NamedNodeRef<'static>] = &[
    rdfs::CLASS,
    rdfs::DATATYPE,
    owl::CLASS,
    owl::DEPRECATED_CLASS,
];

const PROPERTY_TYPES: &[NamedNodeRef<'static>] = &[
    rdf::PROPERTY,
    owl::OBJECT_PROPERTY,
    owl::DATATYPE_PROPERTY,
    owl::ANNOTATION_PROPERTY,
    owl::ONTOLOGY_PROPERTY,
    owl::FUNCTIONAL_PROPERTY,
    owl::INVERSE_FUNCTIONAL_PROPERTY,
    owl::TRANSITIVE_PROPERTY,
    owl::SYMMETRIC_PROPERTY,
    owl::ASYMMETRIC_PROPERTY,
    owl::REFLEXIVE_PROPERTY,
    owl::IRREFLEXIVE_PROPERTY,
    owl::DEPRECATED_PROPERTY,
];

const TITLE_PREDS: &[NamedNodeRef<'static>] = &[dcterms::TITLE, dc::TITLE, rdfs::LABEL];
const TERM_TITLE_PREDS: &[NamedNodeRef<'static>] = &[
    rdfs::LABEL,
    skos::PREF_LABEL,
    dcterms::TITLE,
    dc::TITLE,
];
const DESCRIPTION_PREDS: &[NamedNodeRef<'static>] = &[
    dcterms::DESCRIPTION,
    dc::DESCRIPTION,
    rdfs::COMMENT,
    skos::DEFINITION,
];

/// What a vocabulary term is, which also decides
/// in which section of the generated module it ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TermKind {
    Class,
    Property,
    Individual,
}

impl TermKind {
    #[must_use]
    pub const fn section_title(self) -> &'static str {
        match self {
            Self::Class => "Classes",
            Self::Property => "Properties",
            Self::Individual => "Individuals",
        }
    }

    /// Appended to a constant name that clashes with one of an earlier section.
    #[must_use]
    pub const fn clash_suffix(self) -> &'static str {
        match self {
            Self::Class => "_CLASS",
            Self::Property => "_PROP",
            Self::Individual => "_INDIVIDUAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Deprecation {
    pub since: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMeta {
    pub local_name: String,
    pub kind: TermKind,
    pub title: Option<String>,
    pub description: Option<String>,
    pub deprecation: Option<Deprecation>,
    /// The triples of the term, in RDF/Turtle
    pub turtle: String,
}

#[derive(Debug, Clone)]
pub struct VocabInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub namespace: Namespace,
    /// The terms, sorted by kind first, local name second
    pub terms: Vec<TermMeta>,
}

/// Values that take precedence over what is found in the document,
/// plus the fallback for the prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hints<'a> {
    pub prefix: Option<&'a str>,
    pub namespace: Option<&'a str>,
    pub file_stem: Option<&'a str>,
}

impl VocabInfo {
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.namespace.prefix()
    }

    #[must_use]
    pub fn namespace_iri(&self) -> &str {
        self.namespace.name()
    }
}

impl RdfContent {
    #[must_use]
    fn find_ontology(&self) -> Option<NodeIdx> {
        self.subjects
            .iter()
            .copied()
            .find(|subj_idx| self.has(*subj_idx, rdf::TYPE, owl::ONTOLOGY))
    }

    fn find_namespace(&self, ont_subj_idx: Option<NodeIdx>) -> Option<String> {
        let ont_idx = ont_subj_idx?;
        if let Some(preferred) = self.object(ont_idx, vann::PREFERRED_NAMESPACE_URI) {
            return Some(preferred.value());
        }
        let ont_iri = self.subject_iri(ont_idx)?.raw();
        if ont_iri.ends_with('#') || ont_iri.ends_with('/') {
            return Some(ont_iri);
        }
        ["#", "/"]
            .iter()
            .map(|delim| format!("{ont_iri}{delim}"))
            .find(|candidate| {
                self.subjects.iter().any(|subj_idx| {
                    self.subject_iri(*subj_idx)
                        .is_some_and(|subj| subj.raw().starts_with(candidate.as_str()))
                })
            })
    }

    fn find_prefix(&self, ont_subj_idx: Option<NodeIdx>, namespace: &str) -> Option<String> {
        if let Some(preferred) = ont_subj_idx
            .and_then(|idx| self.object(idx, vann::PREFERRED_NAMESPACE_PREFIX))
        {
            return Some(preferred.value());
        }
        self.prefixes
            .iter()
            .find(|(name, value)| !name.is_empty() && value == namespace)
            .map(|(name, _)| name.clone())
    }

    fn term_kind(&self, subj_idx: NodeIdx) -> TermKind {
        let types = self.objects(subj_idx, rdf::TYPE).collect::<Vec<_>>();
        if types
            .iter()
            .any(|typ| CLASS_TYPES.iter().any(|class| typ.is(*class)))
        {
            TermKind::Class
        } else if types
            .iter()
            .any(|typ| PROPERTY_TYPES.iter().any(|prop| typ.is(*prop)))
        {
            TermKind::Property
        } else {
            TermKind::Individual
        }
    }

    fn deprecation(&self, subj_idx: NodeIdx) -> Option<Deprecation> {
        let flagged = self
            .objects(subj_idx, owl::DEPRECATED)
            .any(|val| matches!(val.value().trim().to_lowercase().as_str(), "true" | "1"));
        let status = self
            .objects(subj_idx, vs::TERM_STATUS)
            .any(|val| val.value().trim().eq_ignore_ascii_case("deprecated"));
        let typed = self.has(subj_idx, rdf::TYPE, owl::DEPRECATED_CLASS)
            || self.has(subj_idx, rdf::TYPE, owl::DEPRECATED_PROPERTY);
        if !(flagged || status || typed) {
            return None;
        }
        let since = self
            .object(subj_idx, cc::DEPRECATED_ON)
            .map(Node::value)
            .unwrap_or_default();
        let note = self
            .object(subj_idx, schema::SUPERSEDED_BY)
            .or_else(|| self.object(subj_idx, dcterms::IS_REPLACED_BY))
            .map(|replacement| format!("Use this instead: {replacement}"))
            .unwrap_or_default();
        Some(Deprecation { since, note })
    }

    fn extract_terms(&self, ont_subj_idx: Option<NodeIdx>, namespace: &str) -> Vec<TermMeta> {
        let mut terms = Vec::new();
        for subj_idx in &self.subjects {
            if Some(*subj_idx) == ont_subj_idx {
                continue;
            }
            let Some(subj) = self.subject_iri(*subj_idx) else {
                continue;
            };
            let raw = subj.raw();
            let Some(local_name) = raw
                .strip_prefix(namespace)
                .filter(|local| !local.is_empty() && is_correct_split(namespace, local))
            else {
                tracing::debug!("Skipping subject outside of the vocabulary namespace: {subj}");
                continue;
            };
            let kind = self.term_kind(*subj_idx);
            tracing::debug!("Found {subj} ({})", kind.section_title());
            terms.push(TermMeta {
                local_name: local_name.to_owned(),
                kind,
                title: self.best_literal(*subj_idx, TERM_TITLE_PREDS),
                description: self.best_literal(*subj_idx, DESCRIPTION_PREDS),
                deprecation: self.deprecation(*subj_idx),
                turtle: self.subject_to_turtle(*subj_idx),
            });
        }
        terms.sort_by(|term_a, term_b| {
            term_a
                .kind
                .cmp(&term_b.kind)
                .then_with(|| term_a.local_name.cmp(&term_b.local_name))
        });
        terms
    }

    /// Extract vocabulary meta-data and terms.
    ///
    /// # Errors
    ///
    /// - if no namespace IRI was given and none can be found in the data
    /// - if no prefix was given and none can be found in the data
    /// - if the namespace IRI is invalid
    pub fn into_vocab_info(self, hints: Hints<'_>) -> Result<VocabInfo, ExtractError> {
        let ont_subj_idx = self.find_ontology();
        if ont_subj_idx.is_none() {
            tracing::debug!("No owl:Ontology subject found");
        }

        let namespace_iri = hints
            .namespace
            .map(ToOwned::to_owned)
            .or_else(|| self.find_namespace(ont_subj_idx))
            .ok_or(ExtractError::MissingNamespaceUri)?;
        let prefix = hints
            .prefix
            .map(ToOwned::to_owned)
            .or_else(|| self.find_prefix(ont_subj_idx, &namespace_iri))
            .or_else(|| hints.file_stem.map(ToOwned::to_owned))
            .ok_or(ExtractError::MissingNamespacePrefix)?;
        let namespace = Namespace::new(prefix, namespace_iri.clone()).map_err(|source| {
            ExtractError::InvalidNamespace {
                namespace: namespace_iri,
                source,
            }
        })?;

        let (title, description) = ont_subj_idx.map_or((None, None), |idx| {
            (
                self.best_literal(idx, TITLE_PREDS),
                self.best_literal(idx, DESCRIPTION_PREDS),
            )
        });
        let terms = self.extract_terms(ont_subj_idx, namespace.name());

        Ok(VocabInfo {
            title,
            description,
            namespace,
            terms,
        })
    }
}
