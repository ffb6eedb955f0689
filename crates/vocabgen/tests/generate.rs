// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

#![allow(unused_crate_dependencies)]

use std::fs;
use std::path::{Path, PathBuf};

use rdfvocab_gen::config::Config;
use rdfvocab_gen::{generate, Error};

fn data(file_name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(file_name)
}

fn config(out_dir: &Path, ontologies: &[&str]) -> Config {
    Config {
        ontologies: ontologies.iter().map(|name| data(name)).collect(),
        out_dir: out_dir.to_path_buf(),
        ..Config::default()
    }
}

#[test]
fn time_vocabulary() {
    let out = tempfile::tempdir().unwrap();
    let written = generate(&config(out.path(), &["time.ttl"])).unwrap();
    assert_eq!(written, vec![out.path().join("time.rs")]);

    let src = fs::read_to_string(out.path().join("time.rs")).unwrap();
    assert!(src.starts_with("//! [OWL-Time (`time`)](http://www.w3.org/2006/time#) vocabulary.\n"));
    assert!(src.contains("use crate::{named_node, named_node_deprecated, namespace};\n"));
    assert!(src.contains("    \"http://www.w3.org/2006/time#\",\n"));

    // sections in order, each sorted by local name
    let classes = src.find("// Classes").unwrap();
    let properties = src.find("// Properties").unwrap();
    let individuals = src.find("// Individuals").unwrap();
    assert!(classes < properties && properties < individuals);
    let instant = src.find("    INSTANT,\n    NAMESPACE,").unwrap();
    let month = src.find("    MONTH_OF_YEAR,\n    NAMESPACE,").unwrap();
    let year = src.find("    YEAR,\n    NAMESPACE,").unwrap();
    assert!(classes < instant && instant < month && month < year && year < properties);

    // the english label wins
    assert!(src.contains("r#\"`time:Instant`\n\nTime instant\n\nA temporal entity with zero extent or duration\"#"));
    assert!(!src.contains("Zeitpunkt"));

    // deprecated terms keep their plain names
    assert!(src.contains(
        "named_node_deprecated!(\n    JANUARY,\n    NAMESPACE,\n    \"January\",\n    r#\"`time:January`\"#,\n    \"\",\n    \"Use this instead: time:MonthOfYear\"\n);\n"
    ));
    assert!(src.contains("named_node_deprecated!(\n    YEAR,\n    NAMESPACE,\n    \"Year\",\n"));
    assert!(src.contains("    \"2017-04-06\",\n"));
    assert!(src.contains("named_node_deprecated!(\n    XSD_DATE_TIME,\n"));
    assert!(src.contains("named_node!(\n    MONDAY,\n"));

    assert!(!src.contains("\"date\""));
    assert!(src.ends_with(
        "    INSTANT,\n    INTERVAL,\n    MONTH_OF_YEAR,\n    YEAR,\n    IN_XSD_DATE,\n    XSD_DATE_TIME,\n    JANUARY,\n    MONDAY,\n];\n"
    ));
}

#[test]
fn property_clashing_with_class_gets_suffix() {
    let out = tempfile::tempdir().unwrap();
    generate(&config(out.path(), &["odrl.ttl"])).unwrap();

    let src = fs::read_to_string(out.path().join("odrl.rs")).unwrap();
    assert!(src.starts_with("//! [ODRL Version 2.2 (`odrl`)](http://www.w3.org/ns/odrl/2/) vocabulary.\n"));
    assert!(src.contains("named_node!(\n    ACTION,\n    NAMESPACE,\n    \"Action\",\n"));
    assert!(src.contains(
        "named_node!(\n    ACTION_PROP,\n    NAMESPACE,\n    \"action\",\n    r#\"`odrl:action`\n\nAction\n\nThe operation relating to the Asset.\"#\n);\n"
    ));
    assert!(src.contains("named_node!(\n    USE,\n"));
}

#[test]
fn rdf_xml_with_prefix_override() {
    let out = tempfile::tempdir().unwrap();
    let mut cfg = config(out.path(), &["status.rdf"]);
    cfg.prefix = Some("vs".to_owned());
    cfg.macros_path = "rdfvocab".to_owned();
    cfg.header = Some("// SPDX-License-Identifier: CC0-1.0".to_owned());
    let written = generate(&cfg).unwrap();
    assert_eq!(written, vec![out.path().join("vs.rs")]);

    let src = fs::read_to_string(out.path().join("vs.rs")).unwrap();
    assert!(src.starts_with("// SPDX-License-Identifier: CC0-1.0\n\n//! [SemWeb Vocab Status ontology (`vs`)]"));
    assert!(src.contains("use rdfvocab::{named_node, named_node_deprecated, namespace};\n"));
    assert!(src.contains("    \"http://www.w3.org/2003/06/sw-vocab-status/ns#\",\n"));
    assert!(src.contains("named_node_deprecated!(\n    MOREINFO,\n"));
    assert!(src.contains("named_node!(\n    TERM_STATUS,\n"));
    assert!(src.contains("pub const TERMS: &[rdfvocab::reexport::oxrdf::NamedNodeRef<'static>]"));
}

#[test]
fn namespace_override_and_file_stem_prefix() {
    let out = tempfile::tempdir().unwrap();
    let mut cfg = config(out.path(), &["bare.nt"]);
    assert!(matches!(generate(&cfg), Err(Error::Extract { .. })));

    cfg.namespace = Some("http://example.org/bare#".to_owned());
    cfg.turtle_docs = true;
    generate(&cfg).unwrap();
    let src = fs::read_to_string(out.path().join("bare.rs")).unwrap();
    assert!(src.starts_with("//! [`bare`](http://example.org/bare#) vocabulary.\n"));
    assert!(src.contains("named_node!(\n    THING,\n"));
    assert!(src.contains("named_node!(\n    NAME,\n"));
    assert!(src.contains("```turtle\n"));
}

#[test]
fn mod_file_and_existing_outputs() {
    let out = tempfile::tempdir().unwrap();
    let out_dir = out.path().join("vocab");
    let mut cfg = config(&out_dir, &["time.ttl", "odrl.ttl"]);
    cfg.mod_file = true;
    let written = generate(&cfg).unwrap();
    assert_eq!(
        written,
        vec![
            out_dir.join("time.rs"),
            out_dir.join("odrl.rs"),
            out_dir.join("mod.rs"),
        ]
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("mod.rs")).unwrap(),
        "pub mod odrl;\npub mod time;\n"
    );

    fs::write(out_dir.join("time.rs"), "// edited by hand\n").unwrap();
    assert!(generate(&cfg).unwrap().is_empty());
    assert_eq!(
        fs::read_to_string(out_dir.join("time.rs")).unwrap(),
        "// edited by hand\n"
    );

    cfg.force = true;
    assert_eq!(generate(&cfg).unwrap().len(), 3);
    assert!(fs::read_to_string(out_dir.join("time.rs"))
        .unwrap()
        .starts_with("//! "));
}

#[test]
fn keyword_and_empty_prefixes() {
    let out = tempfile::tempdir().unwrap();
    let mut cfg = config(out.path(), &["self.ttl"]);
    cfg.mod_file = true;
    let written = generate(&cfg).unwrap();
    assert_eq!(
        written,
        vec![out.path().join("self_.rs"), out.path().join("mod.rs")]
    );
    assert_eq!(
        fs::read_to_string(out.path().join("mod.rs")).unwrap(),
        "pub mod self_;\n"
    );
    let src = fs::read_to_string(out.path().join("self_.rs")).unwrap();
    assert!(src.contains("namespace!(\n    \"self\",\n"));

    let mut cfg = config(out.path(), &["empty_prefix.ttl"]);
    cfg.mod_file = true;
    cfg.force = true;
    assert!(matches!(
        generate(&cfg),
        Err(Error::UnusableModuleName { prefix, .. }) if prefix.is_empty()
    ));
    assert!(!out.path().join("_.rs").exists());

    cfg.prefix = Some("anon".to_owned());
    generate(&cfg).unwrap();
    assert!(out.path().join("anon.rs").exists());
}

#[test]
fn invalid_setups() {
    let out = tempfile::tempdir().unwrap();

    let mut cfg = config(out.path(), &["time.ttl", "odrl.ttl"]);
    cfg.prefix = Some("x".to_owned());
    assert!(matches!(
        generate(&cfg),
        Err(Error::OverrideWithMultipleInputs)
    ));

    let cfg = config(out.path(), &["time.ttl", "time.ttl"]);
    assert!(matches!(generate(&cfg), Err(Error::OutputClash(path)) if path == out.path().join("time.rs")));

    let mut cfg = config(out.path(), &["odrl.ttl"]);
    cfg.prefix = Some("mod".to_owned());
    cfg.mod_file = true;
    assert!(matches!(generate(&cfg), Err(Error::OutputClash(_))));

    let cfg = config(out.path(), &["missing.ttl"]);
    assert!(matches!(generate(&cfg), Err(Error::Read { .. })));

    let mut cfg = config(out.path(), &["time.ttl"]);
    cfg.format = Some("csv".to_owned());
    assert!(matches!(generate(&cfg), Err(Error::UnknownFormat(_))));

    let mut cfg = config(out.path(), &["time.ttl"]);
    cfg.format = Some("nt".to_owned());
    assert!(matches!(generate(&cfg), Err(Error::Parse { .. })));
}
