// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Provides the building blocks for vocabulary tables:
//! modules exposing a `NAMESPACE`, a `PREFIX`, an `NS`
//! and one ready to use [`NamedNodeRef`] per vocabulary term.
//!
//! Such modules are usually generated with `rdfvocab-gen`.

use std::collections::HashSet;

use git_version::git_version;
use oxrdf::{NamedNode, NamedNodeRef};
pub use rdfvocab_iri::{is_correct_split, IriParseError, Namespace, NamespaceRef};

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

#[doc(hidden)]
pub mod reexport {
    pub use const_format;
    pub use oxrdf;
}

/// Declares the `NAMESPACE`, `PREFIX` and `NS` constants
/// of a vocabulary module.
#[macro_export]
macro_rules! namespace {
    ($prefix:literal, $namespace:literal, $doc:literal) => {
        #[doc=$doc]
        pub const NAMESPACE: &str = $namespace;

        #[doc=concat!("Recommended prefix for the namespace: `", $prefix, "`")]
        pub const PREFIX: &str = $prefix;

        /// The namespace, as a (prefix, IRI) pair.
        pub const NS: $crate::NamespaceRef<'static> =
            $crate::NamespaceRef::new_unchecked(PREFIX, NAMESPACE);
    };
}

#[macro_export]
macro_rules! named_node {
    ($const:ident, $base:expr, $node:literal, $doc:literal) => {
        #[doc=$doc]
        pub const $const: $crate::reexport::oxrdf::NamedNodeRef<'static> =
            $crate::reexport::oxrdf::NamedNodeRef::new_unchecked(
                $crate::reexport::const_format::concatcp!($base, $node),
            );
    };
}

#[macro_export]
macro_rules! named_node_deprecated {
    ($const:ident, $base:expr, $node:literal, $doc:literal, $since:literal, $note:literal) => {
        #[allow(clippy::deprecated_semver)]
        #[deprecated(since=$since, note=$note)]
        #[doc=$doc]
        pub const $const: $crate::reexport::oxrdf::NamedNodeRef<'static> =
            $crate::reexport::oxrdf::NamedNodeRef::new_unchecked(
                $crate::reexport::const_format::concatcp!($base, $node),
            );
    };
}

/// Creates the IRI of a vocabulary term
/// by appending `local_name` to `namespace`.
///
/// # Errors
///
/// If the concatenation is not a valid, absolute IRI.
pub fn create_iri(namespace: &str, local_name: &str) -> Result<NamedNode, IriParseError> {
    NamedNode::new(format!("{namespace}{local_name}"))
}

/// Creates a [`Namespace`] from its prefix and IRI.
///
/// # Errors
///
/// If `namespace` is not a valid, absolute IRI.
pub fn create_namespace(prefix: &str, namespace: &str) -> Result<Namespace, IriParseError> {
    Namespace::new(prefix, namespace)
}

/// Returns the local name of `term` within `namespace`,
/// or `None` if the term does not belong to that namespace.
#[must_use]
pub fn local_name<'a>(term: NamedNodeRef<'a>, namespace: &str) -> Option<&'a str> {
    term.as_str()
        .strip_prefix(namespace)
        .filter(|local| !local.is_empty() && is_correct_split(namespace, local))
}

/// Looks up the term with the given local name in a vocabulary's term table.
#[must_use]
pub fn find_term<'a>(
    terms: &[NamedNodeRef<'a>],
    namespace: &str,
    local: &str,
) -> Option<NamedNodeRef<'a>> {
    terms
        .iter()
        .copied()
        .find(|term| local_name(*term, namespace) == Some(local))
}

/// Returns the first term whose IRI already appeared earlier in `terms`.
#[must_use]
pub fn find_duplicate<'a>(terms: &[NamedNodeRef<'a>]) -> Option<NamedNodeRef<'a>> {
    let mut seen = HashSet::new();
    terms
        .iter()
        .copied()
        .find(|term| !seen.insert(term.as_str()))
}
