// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

// Generated by rdfvocab-gen from tests/data/; do not edit by hand.

//! [ODRL Version 2.2 (`odrl`)](http://www.w3.org/ns/odrl/2/) vocabulary.

use rdfvocab::{named_node, namespace};

namespace!(
    "odrl",
    "http://www.w3.org/ns/odrl/2/",
    r#"The ODRL Version 2.2 namespace: <http://www.w3.org/ns/odrl/2/>"#
);

// Classes

named_node!(
    ACTION,
    NAMESPACE,
    "Action",
    r#"`odrl:Action`

Action"#
);

// Properties

named_node!(
    ACTION_PROP,
    NAMESPACE,
    "action",
    r#"`odrl:action`

Action

The operation relating to the Asset."#
);

// Individuals

named_node!(
    USE,
    NAMESPACE,
    "use",
    r#"`odrl:use`

Use"#
);

/// All terms of this vocabulary.
#[allow(deprecated)]
pub const TERMS: &[rdfvocab::reexport::oxrdf::NamedNodeRef<'static>] = &[
    ACTION,
    ACTION_PROP,
    USE,
];
