//! Core RDF vocabularies recognized during OWL decoding.
use std::collections::HashMap;

use lazy_static::lazy_static;

/// [Namespaces](https://www.w3.org/TR/2004/REC-owl-guide-20040210/#Namespaces)
/// that are typically used within an OWL document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Namespace {
    /// Ontology Web Language
    OWL,
    /// Resource Description Framework
    RDF,
    /// RDF Schema
    RDFS,
    /// XML Schema datatype
    XSD,
}

impl Namespace {
    pub fn iri_str(&self) -> &'static str {
        match self {
            Namespace::OWL => "http://www.w3.org/2002/07/owl#",
            Namespace::RDF => "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
            Namespace::RDFS => "http://www.w3.org/2000/01/rdf-schema#",
            Namespace::XSD => "http://www.w3.org/2001/XMLSchema#",
        }
    }
}

macro_rules! vocabulary_type {
    ($(#[$attr:meta])* $enum_type:ident, [$(($variant:ident, $iri:expr)),+ $(,)?]) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum $enum_type {
            $($variant,)+
        }

        impl $enum_type {
            pub const fn iri_str(&self) -> &'static str {
                match self {
                    $($enum_type::$variant => $iri,)+
                }
            }

            /// The fragment of the term after its namespace.
            pub fn local(&self) -> &'static str {
                local_name(self.iri_str())
            }

            pub fn all() -> &'static [$enum_type] {
                &[$($enum_type::$variant,)+]
            }
        }

        impl AsRef<str> for $enum_type {
            fn as_ref(&self) -> &str {
                self.iri_str()
            }
        }
    };
}

vocabulary_type! {
    /// OWL vocabulary, restricted to the terms that take part in
    /// constructor and restriction encodings.
    OWL, [
        (AllValuesFrom, "http://www.w3.org/2002/07/owl#allValuesFrom"),
        (Class, "http://www.w3.org/2002/07/owl#Class"),
        (ComplementOf, "http://www.w3.org/2002/07/owl#complementOf"),
        (EquivalentClass, "http://www.w3.org/2002/07/owl#equivalentClass"),
        (HasSelf, "http://www.w3.org/2002/07/owl#hasSelf"),
        (HasValue, "http://www.w3.org/2002/07/owl#hasValue"),
        (IntersectionOf, "http://www.w3.org/2002/07/owl#intersectionOf"),
        (OnClass, "http://www.w3.org/2002/07/owl#onClass"),
        (OnProperty, "http://www.w3.org/2002/07/owl#onProperty"),
        (Restriction, "http://www.w3.org/2002/07/owl#Restriction"),
        (SomeValuesFrom, "http://www.w3.org/2002/07/owl#someValuesFrom"),
        (UnionOf, "http://www.w3.org/2002/07/owl#unionOf"),
    ]
}

vocabulary_type! {
    /// RDF Collections vocabulary.
    RDF, [
        (First, "http://www.w3.org/1999/02/22-rdf-syntax-ns#first"),
        (List, "http://www.w3.org/1999/02/22-rdf-syntax-ns#List"),
        (Nil, "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil"),
        (Rest, "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest"),
        (Type, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
    ]
}

vocabulary_type! {
    RDFS, [
        (SubClassOf, "http://www.w3.org/2000/01/rdf-schema#subClassOf"),
    ]
}

/// A term from any of the recognized vocabularies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Vocab {
    OWL(OWL),
    RDF(RDF),
    RDFS(RDFS),
}

lazy_static! {
    static ref LOOKUP: HashMap<&'static str, Vocab> = {
        let mut m = HashMap::new();
        for v in OWL::all() {
            m.insert(v.iri_str(), Vocab::OWL(*v));
        }
        for v in RDF::all() {
            m.insert(v.iri_str(), Vocab::RDF(*v));
        }
        for v in RDFS::all() {
            m.insert(v.iri_str(), Vocab::RDFS(*v));
        }
        m
    };
}

/// Looks a full IRI up across all recognized vocabularies.
pub fn vocab_lookup(iri: &str) -> Option<Vocab> {
    LOOKUP.get(iri).copied()
}

/// The fragment of an IRI after its last `#` or `/`, or the whole
/// string when it has neither.
pub fn local_name(iri: &str) -> &str {
    match iri.rfind(|c| c == '#' || c == '/') {
        Some(i) => &iri[i + 1..],
        None => iri,
    }
}

/// True for the local names that encode list and restriction plumbing
/// rather than a restriction's value.
pub fn is_structural(local: &str) -> bool {
    local == RDF::Type.local()
        || local == RDF::First.local()
        || local == RDF::Rest.local()
        || local == OWL::OnProperty.local()
}

/// True when a property signals a cardinality restriction, which the
/// decoder records but never decodes.
pub fn mentions_cardinality(iri: &str) -> bool {
    local_name(iri).to_lowercase().contains("cardinality")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_local_name() {
        assert_eq!(local_name("http://www.w3.org/2002/07/owl#unionOf"), "unionOf");
        assert_eq!(
            local_name("http://purl.obolibrary.org/obo/RO_0000086"),
            "RO_0000086"
        );
        assert_eq!(local_name("no-separator"), "no-separator");
    }

    #[test]
    fn test_vocab_local() {
        assert_eq!(OWL::OnProperty.local(), "onProperty");
        assert_eq!(OWL::Restriction.local(), "Restriction");
        assert_eq!(RDF::First.local(), "first");
        assert_eq!(RDFS::SubClassOf.local(), "subClassOf");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            vocab_lookup("http://www.w3.org/2002/07/owl#Restriction"),
            Some(Vocab::OWL(OWL::Restriction))
        );
        assert_eq!(vocab_lookup("http://example.com/not-a-term"), None);
    }

    #[test]
    fn test_structural() {
        assert!(is_structural("type"));
        assert!(is_structural("first"));
        assert!(is_structural("rest"));
        assert!(is_structural("onProperty"));
        assert!(!is_structural("someValuesFrom"));
    }

    #[test]
    fn test_mentions_cardinality() {
        assert!(mentions_cardinality(
            "http://www.w3.org/2002/07/owl#minCardinality"
        ));
        assert!(mentions_cardinality(
            "http://www.w3.org/2002/07/owl#maxQualifiedCardinality"
        ));
        assert!(!mentions_cardinality(
            "http://www.w3.org/2002/07/owl#someValuesFrom"
        ));
    }
}
