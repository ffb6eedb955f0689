// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Rules for splitting an IRI into a namespace and a local name.

use oxiri::Iri;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("No separator character ('#', '/' or ':') found in IRI: {0}")]
    NoSeparator(String),
}

/// Finds the index of the first local name character in an absolute IRI.
///
/// The separator is the _first_ `#`; failing that the _last_ `/`;
/// failing that the _last_ `:`.
/// If there is no local name,
/// the returned index equals the length of `iri`.
///
/// # Errors
///
/// If `iri` contains none of the separator characters.
/// Every absolute IRI contains at least one `:`.
pub fn local_name_index(iri: &str) -> Result<usize, SplitError> {
    iri.find('#')
        .or_else(|| iri.rfind('/'))
        .or_else(|| iri.rfind(':'))
        .map(|separator_idx| separator_idx + 1)
        .ok_or_else(|| SplitError::NoSeparator(iri.to_owned()))
}

/// Splits an IRI into `(namespace, local_name)`,
/// according to [`local_name_index`].
///
/// # Errors
///
/// If `iri` contains none of the separator characters.
pub fn split(iri: &str) -> Result<(&str, &str), SplitError> {
    let idx = local_name_index(iri)?;
    // separators are ASCII, so `idx` is always a char boundary
    Ok(iri.split_at(idx))
}

/// Checks whether an IRI was split into `namespace` and `local_name`
/// the same way [`split`] would have done it.
#[must_use]
pub fn is_correct_split(namespace: &str, local_name: &str) -> bool {
    let Some(last_ns_char) = namespace.chars().last() else {
        return false;
    };
    let ns_head = namespace
        .strip_suffix(last_ns_char)
        .unwrap_or(namespace);

    match last_ns_char {
        '#' => !ns_head.contains('#') && !local_name.contains('#'),
        '/' => !local_name.contains(['/', '#']) && !namespace.contains('#'),
        ':' => !local_name.contains([':', '#', '/']) && !namespace.contains(['#', '/']),
        _ => false,
    }
}

const fn is_control_char(chr: char) -> bool {
    matches!(chr, '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}')
}

/// Checks whether `iri` is usable as the value of an RDF IRI term:
/// it contains no control characters,
/// and it is a syntactically valid, absolute IRI.
#[must_use]
pub fn is_valid_iri_reference(iri: &str) -> bool {
    !iri.chars().any(is_control_char) && Iri::parse(iri).is_ok()
}
