// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The terms this generator looks for in schema documents,
//! beyond what `oxrdf::vocab` already provides.

pub mod owl {
    use rdfvocab::{named_node, namespace};

    namespace!(
        "owl",
        "http://www.w3.org/2002/07/owl#",
        "The OWL namespace: <http://www.w3.org/2002/07/owl#>"
    );

    named_node!(ONTOLOGY, NAMESPACE, "Ontology", "`owl:Ontology`");
    named_node!(CLASS, NAMESPACE, "Class", "`owl:Class`");
    named_node!(DEPRECATED, NAMESPACE, "deprecated", "`owl:deprecated`");
    named_node!(DEPRECATED_CLASS, NAMESPACE, "DeprecatedClass", "`owl:DeprecatedClass`");
    named_node!(
        DEPRECATED_PROPERTY,
        NAMESPACE,
        "DeprecatedProperty",
        "`owl:DeprecatedProperty`"
    );
    named_node!(OBJECT_PROPERTY, NAMESPACE, "ObjectProperty", "`owl:ObjectProperty`");
    named_node!(DATATYPE_PROPERTY, NAMESPACE, "DatatypeProperty", "`owl:DatatypeProperty`");
    named_node!(
        ANNOTATION_PROPERTY,
        NAMESPACE,
        "AnnotationProperty",
        "`owl:AnnotationProperty`"
    );
    named_node!(
        ONTOLOGY_PROPERTY,
        NAMESPACE,
        "OntologyProperty",
        "`owl:OntologyProperty`"
    );
    named_node!(
        FUNCTIONAL_PROPERTY,
        NAMESPACE,
        "FunctionalProperty",
        "`owl:FunctionalProperty`"
    );
    named_node!(
        INVERSE_FUNCTIONAL_PROPERTY,
        NAMESPACE,
        "InverseFunctionalProperty",
        "`owl:InverseFunctionalProperty`"
    );
    named_node!(
        TRANSITIVE_PROPERTY,
        NAMESPACE,
        "TransitiveProperty",
        "`owl:TransitiveProperty`"
    );
    named_node!(
        SYMMETRIC_PROPERTY,
        NAMESPACE,
        "SymmetricProperty",
        "`owl:SymmetricProperty`"
    );
    named_node!(
        ASYMMETRIC_PROPERTY,
        NAMESPACE,
        "AsymmetricProperty",
        "`owl:AsymmetricProperty`"
    );
    named_node!(
        REFLEXIVE_PROPERTY,
        NAMESPACE,
        "ReflexiveProperty",
        "`owl:ReflexiveProperty`"
    );
    named_node!(
        IRREFLEXIVE_PROPERTY,
        NAMESPACE,
        "IrreflexiveProperty",
        "`owl:IrreflexiveProperty`"
    );
}

pub mod dcterms {
    use rdfvocab::{named_node, namespace};

    namespace!(
        "dcterms",
        "http://purl.org/dc/terms/",
        "The DCMI Metadata Terms namespace: <http://purl.org/dc/terms/>"
    );

    named_node!(TITLE, NAMESPACE, "title", "`dcterms:title`");
    named_node!(DESCRIPTION, NAMESPACE, "description", "`dcterms:description`");
    named_node!(IS_REPLACED_BY, NAMESPACE, "isReplacedBy", "`dcterms:isReplacedBy`");
}

pub mod dc {
    use rdfvocab::{named_node, namespace};

    namespace!(
        "dc",
        "http://purl.org/dc/elements/1.1/",
        "The Dublin Core Elements 1.1 namespace: <http://purl.org/dc/elements/1.1/>"
    );

    named_node!(TITLE, NAMESPACE, "title", "`dc:title`");
    named_node!(DESCRIPTION, NAMESPACE, "description", "`dc:description`");
}

pub mod vann {
    use rdfvocab::{named_node, namespace};

    namespace!(
        "vann",
        "http://purl.org/vocab/vann/",
        "The VANN namespace: <http://purl.org/vocab/vann/>"
    );

    named_node!(
        PREFERRED_NAMESPACE_PREFIX,
        NAMESPACE,
        "preferredNamespacePrefix",
        "`vann:preferredNamespacePrefix`"
    );
    named_node!(
        PREFERRED_NAMESPACE_URI,
        NAMESPACE,
        "preferredNamespaceUri",
        "`vann:preferredNamespaceUri`"
    );
}

pub mod vs {
    use rdfvocab::{named_node, namespace};

    namespace!(
        "vs",
        "http://www.w3.org/2003/06/sw-vocab-status/ns#",
        "The term status namespace: <http://www.w3.org/2003/06/sw-vocab-status/ns#>"
    );

    named_node!(TERM_STATUS, NAMESPACE, "term_status", "`vs:term_status`");
}

pub mod cc {
    use rdfvocab::{named_node, namespace};

    namespace!(
        "cc",
        "http://creativecommons.org/ns#",
        "The Creative Commons namespace: <http://creativecommons.org/ns#>"
    );

    named_node!(DEPRECATED_ON, NAMESPACE, "deprecatedOn", "`cc:deprecatedOn`");
}

pub mod schema {
    use rdfvocab::{named_node, namespace};

    namespace!(
        "schema",
        "http://schema.org/",
        "The Schema.org namespace: <http://schema.org/>"
    );

    named_node!(SUPERSEDED_BY, NAMESPACE, "supersededBy", "`schema:supersededBy`");
}

pub mod skos {
    use rdfvocab::{named_node, namespace};

    namespace!(
        "skos",
        "http://www.w3.org/2004/02/skos/core#",
        "The SKOS namespace: <http://www.w3.org/2004/02/skos/core#>"
    );

    named_node!(PREF_LABEL, NAMESPACE, "prefLabel", "`skos:prefLabel`");
    named_node!(DEFINITION, NAMESPACE, "definition", "`skos:definition`");
}
