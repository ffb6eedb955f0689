// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

mod namespace;
pub mod split;

pub use namespace::{Namespace, NamespaceRef, PREFIX_EMPTY, PREFIX_EMPTY_ID};
pub use oxiri::IriParseError;
pub use split::{is_correct_split, is_valid_iri_reference, local_name_index, split, SplitError};

use git_version::git_version;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");
