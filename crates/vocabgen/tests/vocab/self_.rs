// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

// Generated by rdfvocab-gen from tests/data/; do not edit by hand.

//! [`self`](http://example.org/self/) vocabulary.

use rdfvocab::{named_node, namespace};

namespace!(
    "self",
    "http://example.org/self/",
    r#"The `self` namespace: <http://example.org/self/>"#
);

// Classes

named_node!(
    AGENT,
    NAMESPACE,
    "Agent",
    r#"`self:Agent`

```text
An acting entity.

Written as:

    self:Agent a owl:Class .
```"#
);

// Properties

named_node!(
    KNOWS,
    NAMESPACE,
    "knows",
    r#"`self:knows`"#
);

/// All terms of this vocabulary.
#[allow(deprecated)]
pub const TERMS: &[rdfvocab::reexport::oxrdf::NamedNodeRef<'static>] = &[
    AGENT,
    KNOWS,
];
