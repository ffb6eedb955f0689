// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::cmp::Ordering;
use std::fmt;

use oxiri::{Iri, IriParseError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const PREFIX_EMPTY: &str = "";
pub const PREFIX_EMPTY_ID: &str = "__NO_PREFIX_ID__";

/// A namespace, consisting of a prefix and a namespace IRI.
///
/// # Examples (Turtle format):
///
/// ```turtle
/// @prefix owl:      <http://www.w3.org/2002/07/owl#> .
/// @prefix time:     <http://www.w3.org/2006/time#> .
/// @prefix schema:   <http://schema.org/> .
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Namespace {
    /// The short form, e.g. `xsd` or `schema`.
    /// See [`PREFIX_EMPTY`].
    prefix: String,
    /// The extended/full form,
    /// e.g. `http://www.w3.org/2001/XMLSchema#`
    /// or `http://schema.org/`.
    name: Iri<String>,
}

/// The borrowed counterpart of [`Namespace`].
///
/// It can be created in `const` context,
/// which is what vocabulary tables use for their `NS` constant.
/// The namespace IRI is not validated.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NamespaceRef<'a> {
    prefix: &'a str,
    name: &'a str,
}

impl Namespace {
    /// Creates a new instance of `Namespace`.
    ///
    /// # Errors
    ///
    /// Returns an `IriParseError` if the given `name`
    /// is not a valid, absolute IRI.
    pub fn new(prefix: impl Into<String>, name: impl Into<String>) -> Result<Self, IriParseError> {
        Ok(Self {
            prefix: prefix.into(),
            name: Iri::parse(name.into())?,
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn as_ref(&self) -> NamespaceRef<'_> {
        NamespaceRef::new_unchecked(&self.prefix, self.name.as_str())
    }

    /// Returns the `@base` of the namespace IRI.
    /// This is simply the IRI without its trailing delimiter.
    ///
    /// # Examples
    ///
    /// - `http://www.w3.org/2001/XMLSchema#` -> \
    ///   `http://www.w3.org/2001/XMLSchema`
    /// - `http://schema.org/` -> \
    ///   `http://schema.org`
    ///
    /// Returns `None` if the IRI does not end with
    /// one of the common delimiters `#` or `/`.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        let iri_str = self.name.as_str();
        iri_str
            .strip_suffix('#')
            .or_else(|| iri_str.strip_suffix('/'))
    }

    /// Returns a _non empty_ "version" of the prefix.
    /// This is either `self.prefix` or [`PREFIX_EMPTY_ID`].
    ///
    /// # Examples
    ///
    /// - `"xsd"` -> \
    ///   `"xsd"`
    /// - `""` -> \
    ///   `"__NO_PREFIX_ID__"`
    #[must_use]
    pub fn prefix_id(&self) -> &str {
        if self.prefix == PREFIX_EMPTY {
            PREFIX_EMPTY_ID
        } else {
            self.prefix.as_str()
        }
    }
}

impl<'a> NamespaceRef<'a> {
    #[must_use]
    pub const fn new_unchecked(prefix: &'a str, name: &'a str) -> Self {
        Self { prefix, name }
    }

    #[must_use]
    pub const fn prefix(self) -> &'a str {
        self.prefix
    }

    #[must_use]
    pub const fn name(self) -> &'a str {
        self.name
    }

    /// Validates the namespace IRI and copies both parts.
    ///
    /// # Errors
    ///
    /// Returns an `IriParseError` if the namespace IRI
    /// is not a valid, absolute IRI.
    pub fn into_owned(self) -> Result<Namespace, IriParseError> {
        Namespace::new(self.prefix, self.name)
    }
}

impl Ord for Namespace {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_ref().cmp(&other.as_ref())
    }
}

impl PartialOrd for Namespace {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NamespaceRef<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.prefix
            .cmp(other.prefix)
            .then_with(|| self.name.cmp(other.name))
    }
}

impl PartialOrd for NamespaceRef<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NamespaceRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :: {}", self.prefix, self.name)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

impl<'a> From<&'a Namespace> for NamespaceRef<'a> {
    fn from(namespace: &'a Namespace) -> Self {
        namespace.as_ref()
    }
}
