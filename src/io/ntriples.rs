//! N-Triples reading and writing, via rio.
use std::io::{BufRead, Write};

use log::debug;
use rio_api::formatter::TriplesFormatter;
use rio_api::model as rio;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesFormatter, NTriplesParser};

use crate::error::OwlNetsError;
use crate::model::{Build, Literal, Node, TripleStore};

/// Reads an N-Triples document into a store.
pub fn read<R: BufRead>(read: R, build: &Build) -> Result<TripleStore, OwlNetsError> {
    let mut store = TripleStore::new();
    NTriplesParser::new(read).parse_all(&mut |t| -> Result<(), OwlNetsError> {
        store.insert(super::to_triple(&t, build)?);
        Ok(())
    })?;
    Ok(store)
}

/// Writes a store as N-Triples, returning the underlying writer.
///
/// Decoding can leave a literal-valued property on a blank node in the
/// byproduct store; triples whose subject or predicate cannot be
/// expressed in N-Triples are skipped rather than failing the write.
pub fn write<W: Write>(write: W, store: &TripleStore) -> Result<W, OwlNetsError> {
    let mut formatter = NTriplesFormatter::new(write);

    for t in store {
        let subject: rio::Subject<'_> = match &t.sub {
            Node::Named(iri) => rio::NamedNode { iri: iri.as_ref() }.into(),
            Node::Blank(b) => rio::BlankNode { id: b.id() }.into(),
            Node::Literal(_) => {
                debug!("skipping triple with a literal subject: {}", t);
                continue;
            }
        };
        let predicate = match &t.pred {
            Node::Named(iri) => rio::NamedNode { iri: iri.as_ref() },
            _ => {
                debug!("skipping triple with a non-iri predicate: {}", t);
                continue;
            }
        };
        let object: rio::Term<'_> = match &t.obj {
            Node::Named(iri) => rio::NamedNode { iri: iri.as_ref() }.into(),
            Node::Blank(b) => rio::BlankNode { id: b.id() }.into(),
            Node::Literal(Literal::Simple { literal }) => {
                rio::Literal::Simple { value: literal }.into()
            }
            Node::Literal(Literal::Language { literal, lang }) => {
                rio::Literal::LanguageTaggedString {
                    value: literal,
                    language: lang,
                }
                .into()
            }
            Node::Literal(Literal::Datatype {
                literal,
                datatype_iri,
            }) => rio::Literal::Typed {
                value: literal,
                datatype: rio::NamedNode {
                    iri: datatype_iri.as_ref(),
                },
            }
            .into(),
        };

        formatter.format(&rio::Triple {
            subject,
            predicate,
            object,
        })?;
    }

    Ok(formatter.finish()?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Triple;
    use pretty_assertions::assert_eq;

    const DOC: &str = "\
<http://example.com/a> <http://example.com/p> <http://example.com/b> .
<http://example.com/a> <http://www.w3.org/2000/01/rdf-schema#label> \"a label\"@en .
_:n1 <http://example.com/p> \"3\"^^<http://www.w3.org/2001/XMLSchema#integer> .
";

    #[test]
    fn test_read() {
        let build = Build::new();
        let store = read(DOC.as_bytes(), &build).unwrap();
        assert_eq!(store.len(), 3);

        assert!(store.contains(&Triple::new(
            build.named("http://example.com/a"),
            build.named("http://example.com/p"),
            build.named("http://example.com/b"),
        )));
        assert!(store.contains(&Triple::new(
            build.named("http://example.com/a"),
            build.named("http://www.w3.org/2000/01/rdf-schema#label"),
            Node::Literal(Literal::Language {
                literal: "a label".to_string(),
                lang: "en".to_string(),
            }),
        )));
        assert!(store.contains(&Triple::new(
            build.blank("n1"),
            build.named("http://example.com/p"),
            Node::Literal(Literal::Datatype {
                literal: "3".to_string(),
                datatype_iri: build.iri("http://www.w3.org/2001/XMLSchema#integer"),
            }),
        )));
    }

    #[test]
    fn test_read_bad_document() {
        let build = Build::new();
        let result = read("this is not ntriples\n".as_bytes(), &build);
        assert!(matches!(result, Err(OwlNetsError::ParserError(_, _))));
    }

    #[test]
    fn test_write() {
        let build = Build::new();
        let store: TripleStore = vec![Triple::new(
            build.named("http://example.com/a"),
            build.named("http://example.com/p"),
            build.blank("n1"),
        )]
        .into_iter()
        .collect();

        let out = write(Vec::new(), &store).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert_eq!(
            rendered,
            "<http://example.com/a> <http://example.com/p> _:n1 .\n"
        );
    }

    #[test]
    fn test_write_skips_literal_predicate() {
        let build = Build::new();
        let store: TripleStore = vec![Triple::new(
            build.blank("n1"),
            Node::Literal(Literal::Simple {
                literal: "not a predicate".to_string(),
            }),
            build.named("http://example.com/b"),
        )]
        .into_iter()
        .collect();

        let out = write(Vec::new(), &store).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let build = Build::new();
        let store = read(DOC.as_bytes(), &build).unwrap();
        let out = write(Vec::new(), &store).unwrap();
        let again = read(out.as_slice(), &build).unwrap();
        assert_eq!(store, again);
    }
}
