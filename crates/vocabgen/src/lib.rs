// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use cli_utils as _;

pub mod cli;
pub mod config;
pub mod extract;
pub mod parse;
pub mod render;
pub mod terms;

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use config::Config;
use extract::{ExtractError, Hints, VocabInfo};
use git_version::git_version;
use oxrdfio::RdfFormat;
use parse::ParseError;
use rdfvocab_base::util::{ensure_dir_exists, extract_file_ext, extract_file_stem, look_for_file};
use thiserror::Error;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

pub const MOD_FILE_NAME: &str = "mod.rs";

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that can not be raw identifiers either;
/// module names are lower-case, so `Self` never shows up.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "super"];

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Unable to figure out the RDF syntax of '{0}'; please specify it explicitly")]
    UnknownFormat(PathBuf),

    #[error("Failed to parse '{path}': {source}")]
    Parse { path: PathBuf, source: ParseError },

    #[error("Failed to extract the vocabulary from '{path}': {source}")]
    Extract { path: PathBuf, source: ExtractError },

    #[error("Two (or more) input ontologies result in the same output file name: {0}; please change that.")]
    OutputClash(PathBuf),

    #[error("The prefix '{prefix}' of '{path}' yields no usable Rust module name; please specify one explicitly")]
    UnusableModuleName { path: PathBuf, prefix: String },

    #[error("A prefix or namespace override requires exactly one input file")]
    OverrideWithMultipleInputs,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Figures out the RDF syntax from a file extension.
#[must_use]
pub fn format_from_extension(ext: &str) -> Option<RdfFormat> {
    match ext.to_ascii_lowercase().as_str() {
        "owl" | "xml" => Some(RdfFormat::RdfXml),
        other => RdfFormat::from_extension(other),
    }
}

/// Converts a namespace prefix into the name of a Rust module,
/// e.g. `dcterms` -> `dcterms`, `odrl-2` -> `odrl_2`, `self` -> `self_`.
///
/// Returns `None` if the prefix holds no identifier characters at all.
#[must_use]
pub fn module_name(prefix: &str) -> Option<String> {
    let module = rdfvocab_base::util::identifierify(&prefix.to_lowercase());
    if module == "_" {
        None
    } else if NON_RAW_KEYWORDS.contains(&module.as_str()) {
        Some(format!("{module}_"))
    } else {
        Some(module)
    }
}

fn mod_decl(module: &str) -> String {
    if RUST_KEYWORDS.contains(&module) {
        format!("pub mod r#{module};")
    } else {
        format!("pub mod {module};")
    }
}

/// Reads and analyzes a single vocabulary file.
///
/// # Errors
///
/// - the input file cannot be read
/// - the input format is unknown
/// - the input is not valid RDF
/// - the vocabulary namespace or prefix cannot be figured out
pub fn load(ont: &Path, config: &Config) -> Result<VocabInfo, Error> {
    let format = config
        .format
        .as_deref()
        .or_else(|| extract_file_ext(ont))
        .and_then(format_from_extension)
        .ok_or_else(|| Error::UnknownFormat(ont.to_path_buf()))?;
    tracing::debug!("Reading '{}' as {format}", ont.display());

    let input = fs::File::open(ont).map_err(|source| Error::Read {
        path: ont.to_path_buf(),
        source,
    })?;
    let rdf_cont = parse::rdf(io::BufReader::new(input), format).map_err(|source| Error::Parse {
        path: ont.to_path_buf(),
        source,
    })?;

    let hints = Hints {
        prefix: config.prefix.as_deref(),
        namespace: config.namespace.as_deref(),
        file_stem: extract_file_stem(ont),
    };
    rdf_cont
        .into_vocab_info(hints)
        .map_err(|source| Error::Extract {
            path: ont.to_path_buf(),
            source,
        })
}

fn write_unless_present(out_file: &Path, content: &str, force: bool) -> Result<bool, Error> {
    if force || !look_for_file(out_file)? {
        fs::write(out_file, content)?;
        tracing::info!("Wrote '{}'", out_file.display());
        Ok(true)
    } else {
        tracing::info!(
            "Skipping already existing '{}' (use force to overwrite)",
            out_file.display()
        );
        Ok(false)
    }
}

/// Generates one Rust vocabulary module per input file,
/// plus optionally a `mod.rs` declaring them all.
///
/// Returns the files that were actually written.
///
/// # Errors
///
/// - a prefix or namespace override is given together with multiple input files
/// - the output directory cannot be created
/// - one of the input files cannot be read or analyzed (see [`load`])
/// - the prefix of an input vocabulary yields no usable module name
/// - two of the input vocabularies end up with the same module name
/// - one of the output files cannot be written
pub fn generate(config: &Config) -> Result<Vec<PathBuf>, Error> {
    if config.ontologies.len() > 1 && (config.prefix.is_some() || config.namespace.is_some()) {
        return Err(Error::OverrideWithMultipleInputs);
    }
    if ensure_dir_exists(&config.out_dir)? {
        tracing::debug!("Created output directory '{}'", config.out_dir.display());
    }

    let mut written_out_files = Vec::new();
    let mut claimed_out_files = HashSet::new();
    let mut modules = BTreeSet::new();
    if config.mod_file {
        claimed_out_files.insert(config.out_dir.join(MOD_FILE_NAME));
    }
    for ont in &config.ontologies {
        let vocab_info = load(ont, config)?;
        tracing::debug!(
            "'{}' holds {} terms of {}",
            ont.display(),
            vocab_info.terms.len(),
            vocab_info.namespace
        );
        let module =
            module_name(vocab_info.prefix()).ok_or_else(|| Error::UnusableModuleName {
                path: ont.clone(),
                prefix: vocab_info.prefix().to_owned(),
            })?;
        let out_file = config.out_dir.join(format!("{module}.rs"));
        if !claimed_out_files.insert(out_file.clone()) {
            return Err(Error::OutputClash(out_file));
        }
        let rust_vocab_src = render::render(&vocab_info, &config.render_options());
        if write_unless_present(&out_file, &rust_vocab_src, config.force)? {
            written_out_files.push(out_file);
        }
        modules.insert(module);
    }

    if config.mod_file {
        let mut mod_src = String::new();
        if let Some(header) = &config.header {
            mod_src.push_str(header.trim());
            mod_src.push_str("\n\n");
        }
        for module in &modules {
            mod_src.push_str(&mod_decl(module));
            mod_src.push('\n');
        }
        let out_file = config.out_dir.join(MOD_FILE_NAME);
        if write_unless_present(&out_file, &mod_src, config.force)? {
            written_out_files.push(out_file);
        }
    }

    Ok(written_out_files)
}
