//! Reading and writing triples at the system boundary.
//!
//! The merged ontology arrives either as N-Triples or as RDF/XML;
//! [`parse_path`] dispatches on the file extension. The audit
//! byproduct is serialized back out as N-Triples only.
pub mod ntriples;
pub mod rdfxml;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rio_api::model as rio;

use crate::error::OwlNetsError;
use crate::model::{Build, Literal, Node, Triple, TripleStore};

/// The serializations a document can arrive in.
#[derive(Debug, Eq, PartialEq)]
pub enum ResourceType {
    NTriples,
    RdfXml,
}

/// Guesses the serialization from the file extension.
pub fn path_type(path: &Path) -> Option<ResourceType> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("nt") => Some(ResourceType::NTriples),
        Some("owl") | Some("rdf") | Some("xml") => Some(ResourceType::RdfXml),
        _ => None,
    }
}

/// Reads a triple store from a file, dispatching on the extension.
pub fn parse_path(path: &Path, build: &Build) -> Result<TripleStore, OwlNetsError> {
    match path_type(path) {
        Some(ResourceType::NTriples) => {
            let file = File::open(path)?;
            ntriples::read(BufReader::new(file), build)
        }
        Some(ResourceType::RdfXml) => {
            let file = File::open(path)?;
            rdfxml::read(BufReader::new(file), build)
        }
        None => Err(OwlNetsError::configuration(format!(
            "cannot parse a file of this format: {:?}",
            path
        ))),
    }
}

fn star_unsupported() -> OwlNetsError {
    OwlNetsError::invalid("embedded (RDF-star) terms are not supported")
}

fn subject_to_node(subject: &rio::Subject<'_>, build: &Build) -> Result<Node, OwlNetsError> {
    match subject {
        rio::Subject::NamedNode(n) => Ok(build.named(n.iri)),
        rio::Subject::BlankNode(b) => Ok(build.blank(b.id)),
        rio::Subject::Triple(_) => Err(star_unsupported()),
    }
}

fn term_to_node(term: &rio::Term<'_>, build: &Build) -> Result<Node, OwlNetsError> {
    match term {
        rio::Term::NamedNode(n) => Ok(build.named(n.iri)),
        rio::Term::BlankNode(b) => Ok(build.blank(b.id)),
        rio::Term::Literal(rio::Literal::Simple { value }) => Ok(Node::Literal(Literal::Simple {
            literal: (*value).to_string(),
        })),
        rio::Term::Literal(rio::Literal::LanguageTaggedString { value, language }) => {
            Ok(Node::Literal(Literal::Language {
                literal: (*value).to_string(),
                lang: (*language).to_string(),
            }))
        }
        rio::Term::Literal(rio::Literal::Typed { value, datatype }) => {
            Ok(Node::Literal(Literal::Datatype {
                literal: (*value).to_string(),
                datatype_iri: build.iri(datatype.iri),
            }))
        }
        rio::Term::Triple(_) => Err(star_unsupported()),
    }
}

pub(crate) fn to_triple(triple: &rio::Triple<'_>, build: &Build) -> Result<Triple, OwlNetsError> {
    Ok(Triple::new(
        subject_to_node(&triple.subject, build)?,
        build.named(triple.predicate.iri),
        term_to_node(&triple.object, build)?,
    ))
}
