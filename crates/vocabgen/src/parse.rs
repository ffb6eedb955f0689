// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
    io::Read,
};

use oxrdf::{NamedNode, NamedNodeRef, Subject, Term};
use oxrdfio::{RdfFormat, RdfParseError, RdfParser};
use petgraph::graph::{DefaultIx, DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Rdf(#[from] RdfParseError),
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct PrefixedIri {
    prefix_name: String,
    prefix_value: String,
    postfix: String,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum ParsedNamedNode {
    Prefixed(PrefixedIri),
    BaseRelative(PrefixedIri),
    Full(NamedNode),
}

impl Display for ParsedNamedNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefixed(node) => write!(f, "{}:{}", node.prefix_name, node.postfix),
            Self::BaseRelative(node) => write!(f, "<{}>", node.postfix),
            Self::Full(node) => write!(f, "<{}>", node.as_str()),
        }
    }
}

impl ParsedNamedNode {
    /// The full IRI, as it was before being abbreviated.
    #[must_use]
    pub fn raw(&self) -> String {
        match self {
            Self::Prefixed(node) | Self::BaseRelative(node) => {
                format!("{}{}", node.prefix_value, node.postfix)
            }
            Self::Full(node) => node.as_str().to_owned(),
        }
    }

    #[must_use]
    pub fn is(&self, other: NamedNodeRef<'_>) -> bool {
        self.raw() == other.as_str()
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Literal {
    pub value: String,
    pub language: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Node {
    Iri(ParsedNamedNode),
    Literal(Literal),
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iri(node) => node.fmt(f),
            Self::Literal(lit) => {
                let escaped = lit.value.replace('\\', r"\\").replace('"', r#"\""#);
                if lit.value.contains('\n') {
                    write!(f, r#""""{escaped}""""#)?;
                } else {
                    write!(f, r#""{escaped}""#)?;
                }
                if let Some(lang) = &lit.language {
                    write!(f, "@{lang}")?;
                }
                Ok(())
            }
        }
    }
}

impl Node {
    /// The IRI or the literal value, without any decoration.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Iri(node) => node.raw(),
            Self::Literal(lit) => lit.value.clone(),
        }
    }

    #[must_use]
    pub const fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            Self::Iri(_) => None,
        }
    }

    #[must_use]
    pub fn is(&self, other: NamedNodeRef<'_>) -> bool {
        matches!(self, Self::Iri(node) if node.is(other))
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
enum NodeKey {
    Iri(String),
    Literal(Literal),
}

pub type NodeIdx = NodeIndex<DefaultIx>;
pub type Edge = Node;

pub type RdfGraph = DiGraph<Node, Edge>;

/// The triples of one RDF document,
/// with blank nodes and quoted triples left out.
#[derive(Debug, Clone, Default)]
pub struct RdfContent {
    pub graph: RdfGraph,
    /// All IRI subjects, in order of their first appearance
    pub subjects: Vec<NodeIdx>,
    pub base: Option<String>,
    pub prefixes: Vec<(String, String)>,
}

impl RdfContent {
    /// Serializes the triples of a single subject to RDF/Turtle.
    #[must_use]
    pub fn subject_to_turtle(&self, subj_idx: NodeIdx) -> String {
        let mut turtle = String::new();
        let Some(subj) = self.graph.node_weight(subj_idx) else {
            return turtle;
        };
        turtle.push_str(subj.to_string().as_str());
        turtle.push('\n');
        // petgraph lists outgoing edges newest first
        let mut edges = self.graph.edges(subj_idx).collect::<Vec<_>>();
        edges.reverse();
        for pred_ref in edges {
            let Some(obj) = self.graph.node_weight(pred_ref.target()) else {
                continue;
            };
            turtle.push_str("  ");
            turtle.push_str(pred_ref.weight().to_string().as_str());
            turtle.push(' ');
            turtle.push_str(obj.to_string().as_str());
            turtle.push_str(" ;\n");
        }
        turtle.push_str("  .\n");
        turtle
    }

    /// Returns the subject node, if `subj_idx` points to an IRI.
    #[must_use]
    pub fn subject_iri(&self, subj_idx: NodeIdx) -> Option<&ParsedNamedNode> {
        match self.graph.node_weight(subj_idx) {
            Some(Node::Iri(iri)) => Some(iri),
            Some(Node::Literal(_)) | None => None,
        }
    }

    /// All objects of the given subject and predicate,
    /// in document order.
    pub fn objects<'a>(
        &'a self,
        subj_idx: NodeIdx,
        pred: NamedNodeRef<'static>,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        let mut edges = self.graph.edges(subj_idx).collect::<Vec<_>>();
        edges.reverse();
        edges
            .into_iter()
            .filter(move |pred_ref| pred_ref.weight().is(pred))
            .filter_map(|pred_ref| self.graph.node_weight(pred_ref.target()))
    }

    /// The first object of the given subject and predicate.
    #[must_use]
    pub fn object(&self, subj_idx: NodeIdx, pred: NamedNodeRef<'static>) -> Option<&Node> {
        self.objects(subj_idx, pred).next()
    }

    #[must_use]
    pub fn has(
        &self,
        subj_idx: NodeIdx,
        pred: NamedNodeRef<'static>,
        obj: NamedNodeRef<'_>,
    ) -> bool {
        self.objects(subj_idx, pred).any(|node| node.is(obj))
    }

    /// Finds the best literal among the objects of the given predicates.
    /// Predicates are tried in order;
    /// for the first one with any literal objects,
    /// an untagged literal is preferred over an English one,
    /// which is preferred over any other.
    #[must_use]
    pub fn best_literal(
        &self,
        subj_idx: NodeIdx,
        preds: &[NamedNodeRef<'static>],
    ) -> Option<String> {
        preds.iter().find_map(|pred| {
            self.objects(subj_idx, *pred)
                .filter_map(Node::as_literal)
                .min_by_key(|lit| language_rank(lit.language.as_deref()))
                .map(|lit| lit.value.clone())
        })
    }
}

fn language_rank(language: Option<&str>) -> u8 {
    match language {
        None => 0,
        Some(lang)
            if lang.eq_ignore_ascii_case("en") || lang.to_ascii_lowercase().starts_with("en-") =>
        {
            1
        }
        Some(_) => 2,
    }
}

fn parse_iri(subj: &NamedNode, base: Option<&str>, prefixes: &[(&str, &str)]) -> ParsedNamedNode {
    // the longest matching namespace wins
    let best_prefix = prefixes
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .filter_map(|(name, value)| {
            subj.as_str()
                .strip_prefix(value)
                .map(|postfix| (name, value, postfix))
        })
        .max_by_key(|(_, value, _)| value.len());
    if let Some((name, value, postfix)) = best_prefix {
        return ParsedNamedNode::Prefixed(PrefixedIri {
            prefix_name: (*name).to_string(),
            prefix_value: (*value).to_string(),
            postfix: postfix.to_string(),
        });
    }
    if let Some(base_iri) = base {
        if let Some(postfix) = subj.as_str().strip_prefix(base_iri) {
            return ParsedNamedNode::BaseRelative(PrefixedIri {
                prefix_name: String::new(),
                prefix_value: base_iri.to_owned(),
                postfix: postfix.to_string(),
            });
        }
    }
    ParsedNamedNode::Full(subj.clone())
}

fn node_key(node: &Node) -> NodeKey {
    match node {
        Node::Iri(iri) => NodeKey::Iri(iri.raw()),
        Node::Literal(lit) => NodeKey::Literal(lit.clone()),
    }
}

/// Reads RDF in the given format into a graph.
///
/// # Errors
///
/// If the input can not be read, or is not syntactically valid.
pub fn rdf<R>(input: R, format: RdfFormat) -> Result<RdfContent, ParseError>
where
    R: Read,
{
    let mut graph = RdfGraph::new();
    let mut subjects = Vec::new();
    let mut seen_subjects = HashSet::new();
    let mut key_to_graph_idx = HashMap::new();

    let mut parser = RdfParser::from_format(format).for_reader(input);
    while let Some(quad_res) = parser.next() {
        let quad = quad_res?;
        let Subject::NamedNode(subj) = &quad.subject else {
            tracing::warn!("Ignoring triple with non-IRI subject: {quad}");
            continue;
        };
        let prefixes = parser.prefixes().collect::<Vec<_>>();
        let base = parser.base_iri();

        let subj_node = Node::Iri(parse_iri(subj, base, &prefixes));
        let pred_node = Node::Iri(parse_iri(&quad.predicate, base, &prefixes));
        let obj_node = match &quad.object {
            Term::NamedNode(nn) => Node::Iri(parse_iri(nn, base, &prefixes)),
            Term::BlankNode(bn) => {
                tracing::warn!("BlankNode objects are not supported -> ignored! {bn}");
                continue;
            }
            Term::Literal(lit) => Node::Literal(Literal {
                value: lit.value().to_owned(),
                language: lit.language().map(ToOwned::to_owned),
            }),
            Term::Triple(tr) => {
                tracing::warn!("Triple objects are not supported -> ignored! {tr}");
                continue;
            }
        };

        let subj_idx = *key_to_graph_idx
            .entry(node_key(&subj_node))
            .or_insert_with(|| graph.add_node(subj_node));
        let obj_idx = *key_to_graph_idx
            .entry(node_key(&obj_node))
            .or_insert_with(|| graph.add_node(obj_node));
        if seen_subjects.insert(subj_idx) {
            subjects.push(subj_idx);
        }
        graph.add_edge(subj_idx, obj_idx, pred_node);
    }

    let base = parser.base_iri().map(ToOwned::to_owned);
    let prefixes = parser
        .prefixes()
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect();
    Ok(RdfContent {
        graph,
        subjects,
        base,
        prefixes,
    })
}
