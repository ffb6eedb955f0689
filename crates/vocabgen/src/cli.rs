// SPDX-FileCopyrightText: 2021 - 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command, ValueHint};
use const_format::formatcp;

use crate::config::{Config, DEFAULT_MACROS_PATH};

pub const A_S_VERSION: char = 'V';
pub const A_L_VERSION: &str = "version";
pub const A_S_QUIET: char = 'q';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_FORCE: char = 'f';
pub const A_L_FORCE: &str = "force";
pub const A_S_HEADER: char = 'H';
pub const A_L_HEADER: &str = "header";
pub const A_S_OUT_DIR: char = 'O';
pub const A_L_OUT_DIR: &str = "output-directory";
pub const A_S_FORMAT: char = 'F';
pub const A_L_FORMAT: &str = "format";
pub const A_S_PREFIX: char = 'p';
pub const A_L_PREFIX: &str = "prefix";
pub const A_S_NAMESPACE: char = 'n';
pub const A_L_NAMESPACE: &str = "namespace";
pub const A_S_MACROS_PATH: char = 'm';
pub const A_L_MACROS_PATH: &str = "macros-path";
pub const A_S_MOD_FILE: char = 'M';
pub const A_L_MOD_FILE: &str = "mod-file";
pub const A_S_TURTLE_DOCS: char = 't';
pub const A_L_TURTLE_DOCS: &str = "turtle-docs";
pub const A_L_IN_FILE: &str = "ontology-file";

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Minimize or suppress output to stderr")
        .long_help("Minimize or suppress output to stderr; stdout is never used by this program, with or without this option set.")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("more verbose output (useful for debugging)")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_force() -> Arg {
    Arg::new(A_L_FORCE)
        .help("forces overwriting potentially already existing output files")
        .short(A_S_FORCE)
        .long(A_L_FORCE)
        .action(ArgAction::SetTrue)
}

fn arg_header() -> Arg {
    Arg::new(A_L_HEADER)
        .help("The text to insert on top of all output files (generated Rust source code)")
        .short(A_S_HEADER)
        .long(A_L_HEADER)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("TEXT")
}

fn arg_out_dir() -> Arg {
    Arg::new(A_L_OUT_DIR)
        .help("The output directory, where Rust source files get written to")
        .short(A_S_OUT_DIR)
        .long(A_L_OUT_DIR)
        .action(ArgAction::Set)
        .value_parser(value_parser!(std::path::PathBuf))
        .value_hint(ValueHint::DirPath)
        .value_name("OUT_DIR")
        .required_unless_present(A_L_VERSION)
}

fn arg_format() -> Arg {
    Arg::new(A_L_FORMAT)
        .help("The RDF syntax of the input files, as a file extension, e.g. 'ttl', 'nt' or 'rdf'")
        .long_help("The RDF syntax of the input files, as a file extension, e.g. 'ttl', 'nt' or 'rdf'. If not given, it is guessed from the extension of each input file.")
        .short(A_S_FORMAT)
        .long(A_L_FORMAT)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("EXT")
}

fn arg_prefix() -> Arg {
    Arg::new(A_L_PREFIX)
        .help("The namespace prefix to use, instead of the one found in the vocabulary (requires a single input file)")
        .short(A_S_PREFIX)
        .long(A_L_PREFIX)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("PREFIX")
}

fn arg_namespace() -> Arg {
    Arg::new(A_L_NAMESPACE)
        .help("The namespace IRI to use, instead of the one found in the vocabulary (requires a single input file)")
        .short(A_S_NAMESPACE)
        .long(A_L_NAMESPACE)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Url)
        .value_name("IRI")
}

fn arg_macros_path() -> Arg {
    Arg::new(A_L_MACROS_PATH)
        .help("The Rust path the generated code imports the vocabulary macros from")
        .long_help(formatcp!(
            "The Rust path the generated code imports the vocabulary macros from. \
Use '{DEFAULT_MACROS_PATH}' when generating into the 'rdfvocab' crate itself, \
and 'rdfvocab' when generating into a crate depending on it."
        ))
        .short(A_S_MACROS_PATH)
        .long(A_L_MACROS_PATH)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("PATH")
        .default_value(DEFAULT_MACROS_PATH)
}

fn arg_mod_file() -> Arg {
    Arg::new(A_L_MOD_FILE)
        .help("Also write a 'mod.rs', declaring all the generated modules")
        .short(A_S_MOD_FILE)
        .long(A_L_MOD_FILE)
        .action(ArgAction::SetTrue)
}

fn arg_turtle_docs() -> Arg {
    Arg::new(A_L_TURTLE_DOCS)
        .help("Embed the triples of each term into its documentation")
        .short(A_S_TURTLE_DOCS)
        .long(A_L_TURTLE_DOCS)
        .action(ArgAction::SetTrue)
}

fn arg_in_file() -> Arg {
    Arg::new(A_L_IN_FILE)
        .help("The input vocabulary (RDFS/OWL) file(s)")
        .action(ArgAction::Set)
        .value_parser(value_parser!(std::path::PathBuf))
        .value_hint(ValueHint::FilePath)
        .value_name("ONTOLOGY_FILE")
        .required_unless_present(A_L_VERSION)
        .num_args(1..)
}

#[must_use]
pub fn args_matcher() -> Command {
    command!()
        .about(clap::crate_description!())
        .bin_name(clap::crate_name!())
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_version())
        .arg(arg_quiet())
        .arg(arg_verbose())
        .arg(arg_force())
        .arg(arg_header())
        .arg(arg_out_dir())
        .arg(arg_format())
        .arg(arg_prefix())
        .arg(arg_namespace())
        .arg(arg_macros_path())
        .arg(arg_mod_file())
        .arg(arg_turtle_docs())
        .arg(arg_in_file())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", crate::VERSION);
    std::process::exit(0);
}

#[derive(Clone, Debug)]
pub struct Args {
    pub quiet: bool,
    pub verbose: bool,
    pub config: Config,
}

/// Converts already parsed command line arguments into a configuration.
///
/// # Panics
///
/// - The output directory was not supplied
/// - No input file/ontology was supplied
#[must_use]
pub fn config_from_matches(args: &ArgMatches) -> Config {
    let out_dir = args
        .get_one::<PathBuf>(A_L_OUT_DIR)
        .cloned()
        .expect("The output directory is required");
    let ontologies: Vec<PathBuf> = args
        .get_many(A_L_IN_FILE)
        .expect("At least one vocabulary input file is required")
        .cloned()
        .collect();

    Config {
        ontologies,
        out_dir,
        header: args.get_one::<String>(A_L_HEADER).cloned(),
        force: args.get_flag(A_L_FORCE),
        format: args.get_one::<String>(A_L_FORMAT).cloned(),
        prefix: args.get_one::<String>(A_L_PREFIX).cloned(),
        namespace: args.get_one::<String>(A_L_NAMESPACE).cloned(),
        macros_path: args
            .get_one::<String>(A_L_MACROS_PATH)
            .cloned()
            .unwrap_or_else(|| DEFAULT_MACROS_PATH.to_owned()),
        mod_file: args.get_flag(A_L_MOD_FILE),
        turtle_docs: args.get_flag(A_L_TURTLE_DOCS),
    }
}

/// Parses the command line arguments,
/// including verification.
///
/// # Panics
///
/// - The output directory was not supplied
/// - No input file/ontology was supplied
#[must_use]
pub fn parse() -> Args {
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    let version = args.get_flag(A_L_VERSION);
    if version {
        print_version_and_exit(quiet);
    }

    let verbose = args.get_flag(A_L_VERBOSE);
    let config = config_from_matches(&args);

    Args {
        quiet,
        verbose,
        config,
    }
}
