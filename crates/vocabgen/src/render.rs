// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;
use std::fmt::Write as _;

use convert_case::{Case, Casing};
use rdfvocab_base::util::identifierify;

use crate::extract::{TermKind, TermMeta, VocabInfo};

/// Constant names every generated module declares itself.
pub const RESERVED_CONSTS: &[&str] = &["NAMESPACE", "PREFIX", "NS", "TERMS"];

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Text to put on top of the generated file
    pub header: Option<&'a str>,
    /// Rust path under which the `rdfvocab` macros are reachable
    pub macros_path: &'a str,
    /// Whether to append the triples of each term to its documentation
    pub turtle_docs: bool,
}

/// Converts a local name into the name of a Rust constant,
/// e.g. `inXSDDate` -> `IN_XSD_DATE`.
#[must_use]
pub fn const_name(local_name: &str) -> String {
    let mut name = identifierify(&local_name.to_case(Case::UpperSnake));
    if name.chars().all(|chr| chr == '_') {
        name.push_str("TERM");
    }
    name
}

/// Chooses a unique constant name for every term.
///
/// Terms are expected in section order (classes first),
/// so a class keeps its plain name when a property
/// or an individual ends up with the same one.
/// Only a clash with a reserved name or with a term of another kind
/// adds the kind suffix; the remaining clashes get numbered.
#[must_use]
pub fn assign_const_names(terms: &[TermMeta]) -> Vec<String> {
    let mut const_owners = RESERVED_CONSTS
        .iter()
        .map(|name| ((*name).to_owned(), None))
        .collect::<HashMap<_, Option<TermKind>>>();
    let mut names = Vec::with_capacity(terms.len());
    for term in terms {
        let mut candidate = const_name(&term.local_name);
        if const_owners
            .get(&candidate)
            .is_some_and(|owner| *owner != Some(term.kind))
        {
            candidate.push_str(term.kind.clash_suffix());
        }
        let candidate_base = candidate.clone();
        let mut distinguishing_idx = 1;
        while const_owners.contains_key(&candidate) {
            distinguishing_idx += 1;
            candidate = format!("{candidate_base}__{distinguishing_idx}");
        }
        const_owners.insert(candidate.clone(), Some(term.kind));
        names.push(candidate);
    }
    names
}

/// Wraps `content` in a raw string literal
/// with enough `#`s to never be terminated early.
fn raw_str(content: &str) -> String {
    let max_hashes = content
        .match_indices('"')
        .map(|(idx, _)| {
            content
                .get(idx + 1..)
                .map_or(0, |rest| rest.chars().take_while(|chr| *chr == '#').count())
        })
        .max()
        .unwrap_or(0);
    let fence = "#".repeat(max_hashes + 1);
    format!("r{fence}\"{content}\"{fence}")
}

fn str_lit(content: &str) -> String {
    format!("\"{}\"", content.escape_default())
}

fn normalize_newlines(text: &str) -> String {
    text.trim().replace("\r\n", "\n").replace('\r', "\n")
}

/// Fences `content` as a markdown code block of the given language,
/// with a fence longer than any backtick run inside.
fn fenced(content: &str, lang: &str) -> String {
    let longest_ticks = content
        .split(|chr: char| chr != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_ticks.max(2) + 1);
    format!("{fence}{lang}\n{content}\n{fence}")
}

/// Free text from a schema document, ready for a doc comment.
/// Text markdown would partly read as code
/// (indented lines or fences) is fenced as a whole as plain `text`,
/// so it never ends up as a doc-test.
fn doc_text(text: &str) -> String {
    let normalized = normalize_newlines(text);
    let code_like = normalized.contains("```")
        || normalized.contains("~~~")
        || normalized
            .lines()
            .any(|line| line.starts_with([' ', '\t']) && !line.trim().is_empty());
    if code_like {
        fenced(&normalized, "text")
    } else {
        normalized
    }
}

fn term_doc(vocab: &VocabInfo, term: &TermMeta, options: &RenderOptions<'_>) -> String {
    let mut doc = format!("`{}:{}`", vocab.prefix(), term.local_name);
    for text in [&term.title, &term.description].into_iter().flatten() {
        doc.push_str("\n\n");
        doc.push_str(&doc_text(text));
    }
    if options.turtle_docs {
        doc.push_str("\n\n");
        doc.push_str(&fenced(&normalize_newlines(&term.turtle), "turtle"));
    }
    doc
}

fn render_term(
    out: &mut String,
    vocab: &VocabInfo,
    term: &TermMeta,
    const_name: &str,
    options: &RenderOptions<'_>,
) {
    let doc = raw_str(&term_doc(vocab, term, options));
    let local = str_lit(&term.local_name);
    match &term.deprecation {
        None => {
            let _ = write!(
                out,
                "
named_node!(
    {const_name},
    NAMESPACE,
    {local},
    {doc}
);
"
            );
        }
        Some(deprecation) => {
            let _ = write!(
                out,
                "
named_node_deprecated!(
    {const_name},
    NAMESPACE,
    {local},
    {doc},
    {},
    {}
);
",
                str_lit(&deprecation.since),
                str_lit(&deprecation.note),
            );
        }
    }
}

fn render_header(out: &mut String, vocab: &VocabInfo, options: &RenderOptions<'_>) {
    if let Some(header) = options.header {
        out.push_str(&normalize_newlines(header));
        out.push_str("\n\n");
    }

    let prefix = vocab.prefix();
    let namespace = vocab.namespace_iri();
    let _ = match &vocab.title {
        Some(title) => writeln!(
            out,
            "//! [{} (`{prefix}`)]({namespace}) vocabulary.",
            normalize_newlines(title).replace('\n', " ")
        ),
        None => writeln!(out, "//! [`{prefix}`]({namespace}) vocabulary."),
    };
    if let Some(description) = &vocab.description {
        out.push_str("//!\n");
        for line in doc_text(description).lines() {
            if line.trim().is_empty() {
                out.push_str("//!\n");
            } else {
                let _ = writeln!(out, "//! {}", line.trim_end());
            }
        }
    }
    out.push('\n');

    let mut macros = Vec::new();
    if vocab.terms.iter().any(|term| term.deprecation.is_none()) {
        macros.push("named_node");
    }
    if vocab.terms.iter().any(|term| term.deprecation.is_some()) {
        macros.push("named_node_deprecated");
    }
    macros.push("namespace");
    let imports = if macros.len() == 1 {
        macros.join("")
    } else {
        format!("{{{}}}", macros.join(", "))
    };
    let _ = writeln!(out, "use {}::{imports};", options.macros_path);

    let ns_doc = vocab.title.as_ref().map_or_else(
        || format!("The `{prefix}` namespace: <{namespace}>"),
        |title| {
            format!(
                "The {} namespace: <{namespace}>",
                normalize_newlines(title).replace('\n', " ")
            )
        },
    );
    let _ = write!(
        out,
        "
namespace!(
    {},
    {},
    {}
);
",
        str_lit(prefix),
        str_lit(namespace),
        raw_str(&ns_doc),
    );
}

/// Converts the vocabulary to the source of a Rust module.
#[must_use]
pub fn render(vocab: &VocabInfo, options: &RenderOptions<'_>) -> String {
    let mut out = String::new();
    render_header(&mut out, vocab, options);

    let const_names = assign_const_names(&vocab.terms);
    let mut current_section = None;
    for (term, const_name) in vocab.terms.iter().zip(&const_names) {
        if current_section != Some(term.kind) {
            current_section = Some(term.kind);
            let _ = write!(out, "\n// {}\n", term.kind.section_title());
        }
        render_term(&mut out, vocab, term, const_name, options);
    }

    let _ = write!(
        out,
        "
/// All terms of this vocabulary.
#[allow(deprecated)]
pub const TERMS: &[{}::reexport::oxrdf::NamedNodeRef<'static>] = &[",
        options.macros_path
    );
    if const_names.is_empty() {
        out.push_str("];\n");
    } else {
        out.push('\n');
        for const_name in &const_names {
            let _ = writeln!(out, "    {const_name},");
        }
        out.push_str("];\n");
    }

    out
}
