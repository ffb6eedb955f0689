// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

// Generated by rdfvocab-gen from tests/data/; do not edit by hand.

//! [OWL-Time (`time`)](http://www.w3.org/2006/time#) vocabulary.
//!
//! Temporal vocabulary used in RDF data.

use rdfvocab::{named_node, named_node_deprecated, namespace};

namespace!(
    "time",
    "http://www.w3.org/2006/time#",
    r#"The OWL-Time namespace: <http://www.w3.org/2006/time#>"#
);

// Classes

named_node!(
    INSTANT,
    NAMESPACE,
    "Instant",
    r#"`time:Instant`

Time instant

A temporal entity with zero extent or duration"#
);

named_node!(
    INTERVAL,
    NAMESPACE,
    "Interval",
    r#"`time:Interval`

Time interval"#
);

named_node!(
    MONTH_OF_YEAR,
    NAMESPACE,
    "MonthOfYear",
    r#"`time:MonthOfYear`

Month of year"#
);

named_node_deprecated!(
    YEAR,
    NAMESPACE,
    "Year",
    r#"`time:Year`

Year"#,
    "2017-04-06",
    ""
);

// Properties

named_node!(
    IN_XSD_DATE,
    NAMESPACE,
    "inXSDDate",
    r#"`time:inXSDDate`

in XSD date"#
);

named_node_deprecated!(
    XSD_DATE_TIME,
    NAMESPACE,
    "xsdDateTime",
    r#"`time:xsdDateTime`

has XSD date-time"#,
    "",
    ""
);

// Individuals

named_node_deprecated!(
    JANUARY,
    NAMESPACE,
    "January",
    r#"`time:January`"#,
    "",
    "Use this instead: time:MonthOfYear"
);

named_node!(
    MONDAY,
    NAMESPACE,
    "Monday",
    r#"`time:Monday`

Monday"#
);

/// All terms of this vocabulary.
#[allow(deprecated)]
pub const TERMS: &[rdfvocab::reexport::oxrdf::NamedNodeRef<'static>] = &[
    INSTANT,
    INTERVAL,
    MONTH_OF_YEAR,
    YEAR,
    IN_XSD_DATE,
    XSD_DATE_TIME,
    JANUARY,
    MONDAY,
];
