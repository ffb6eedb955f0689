// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

#![allow(unused_crate_dependencies)]

// Generated from `tests/data/`, see `checked_in_modules_are_up_to_date`.
#[allow(dead_code)]
mod vocab;

use std::fs;
use std::path::{Path, PathBuf};

use rdfvocab::{find_duplicate, find_term, local_name};
use rdfvocab_gen::config::Config;
use rdfvocab_gen::generate;

const HEADER: &str = "// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

// Generated by rdfvocab-gen from tests/data/; do not edit by hand.";

fn test_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

#[test]
fn checked_in_modules_are_up_to_date() {
    let out = tempfile::tempdir().unwrap();
    let config = Config {
        ontologies: ["time.ttl", "odrl.ttl", "self.ttl"]
            .iter()
            .map(|name| test_dir().join("data").join(name))
            .collect(),
        out_dir: out.path().to_path_buf(),
        header: Some(HEADER.to_owned()),
        macros_path: "rdfvocab".to_owned(),
        mod_file: true,
        ..Config::default()
    };
    let written = generate(&config).unwrap();
    assert_eq!(written.len(), 4);
    for generated in written {
        let file_name = generated.file_name().unwrap();
        let checked_in = test_dir().join("vocab").join(file_name);
        assert_eq!(
            fs::read_to_string(&generated).unwrap(),
            fs::read_to_string(&checked_in).unwrap(),
            "'{}' is outdated; regenerate it from tests/data/",
            checked_in.display()
        );
    }
}

#[test]
fn term_tables_hold_unique_terms() {
    assert_eq!(find_duplicate(vocab::time::TERMS), None);
    assert_eq!(find_duplicate(vocab::odrl::TERMS), None);
    assert_eq!(find_duplicate(vocab::self_::TERMS), None);
    assert_eq!(vocab::time::TERMS.len(), 8);
}

#[test]
fn term_tables_stay_in_their_namespace() {
    for (terms, namespace) in [
        (vocab::time::TERMS, vocab::time::NAMESPACE),
        (vocab::odrl::TERMS, vocab::odrl::NAMESPACE),
        (vocab::self_::TERMS, vocab::self_::NAMESPACE),
    ] {
        for term in terms {
            assert!(local_name(*term, namespace).is_some(), "{term}");
        }
    }
}

#[test]
fn constants_resolve_to_terms() {
    assert_eq!(
        vocab::time::IN_XSD_DATE.as_str(),
        "http://www.w3.org/2006/time#inXSDDate"
    );
    #[allow(deprecated)]
    let january = vocab::time::JANUARY;
    assert_eq!(january.as_str(), "http://www.w3.org/2006/time#January");
    assert_eq!(
        find_term(vocab::time::TERMS, vocab::time::NAMESPACE, "MonthOfYear"),
        Some(vocab::time::MONTH_OF_YEAR)
    );

    assert_eq!(vocab::odrl::ACTION.as_str(), "http://www.w3.org/ns/odrl/2/Action");
    assert_eq!(
        vocab::odrl::ACTION_PROP.as_str(),
        "http://www.w3.org/ns/odrl/2/action"
    );

    assert_eq!(vocab::self_::PREFIX, "self");
    assert_eq!(vocab::self_::NS.name(), "http://example.org/self/");
    assert_eq!(vocab::self_::KNOWS.as_str(), "http://example.org/self/knows");
}
