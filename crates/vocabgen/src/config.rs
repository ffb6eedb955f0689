// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use crate::render::RenderOptions;

pub const DEFAULT_MACROS_PATH: &str = "crate";

#[derive(Clone, Debug)]
pub struct Config {
    /**
     * Paths to locally stored vocabulary files (RDFS/OWL),
     * to be converted to Rust source files representing them.
     */
    pub ontologies: Vec<PathBuf>,
    /**
     * Where to write the output Rust source files to.
     */
    pub out_dir: PathBuf,
    /**
     * The text to insert on top of all output files
     * (generated Rust source code).
     */
    pub header: Option<String>,
    /**
     * Whether to overwrite potentially already existing output files.
     */
    pub force: bool,
    /**
     * The RDF syntax of the input files, as a file extension
     * (e.g. `ttl` or `rdf`).
     * If `None`, it is guessed from each input files extension.
     */
    pub format: Option<String>,
    /**
     * The prefix to use, instead of the one found in the vocabulary.
     * Only valid with a single input file.
     */
    pub prefix: Option<String>,
    /**
     * The namespace IRI to use, instead of the one found in the vocabulary.
     * Only valid with a single input file.
     */
    pub namespace: Option<String>,
    /**
     * The Rust path the generated code imports the `rdfvocab` macros from;
     * `crate` when generating into the `rdfvocab` crate itself.
     */
    pub macros_path: String,
    /**
     * Whether to also write a `mod.rs` declaring all generated modules.
     */
    pub mod_file: bool,
    /**
     * Whether to embed the triples of each term into its documentation.
     */
    pub turtle_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ontologies: Vec::new(),
            out_dir: PathBuf::new(),
            header: None,
            force: false,
            format: None,
            prefix: None,
            namespace: None,
            macros_path: DEFAULT_MACROS_PATH.to_owned(),
            mod_file: false,
            turtle_docs: false,
        }
    }
}

impl Config {
    #[must_use]
    pub fn render_options(&self) -> RenderOptions<'_> {
        RenderOptions {
            header: self.header.as_deref(),
            macros_path: &self.macros_path,
            turtle_docs: self.turtle_docs,
        }
    }
}
