//! RDF/XML reading, via rio.
use std::io::BufRead;

use rio_api::parser::TriplesParser;
use rio_xml::RdfXmlParser;

use crate::error::OwlNetsError;
use crate::model::{Build, TripleStore};

/// Reads an RDF/XML document into a store.
pub fn read<R: BufRead>(read: R, build: &Build) -> Result<TripleStore, OwlNetsError> {
    let mut store = TripleStore::new();
    RdfXmlParser::new(read, None).parse_all(&mut |t| -> Result<(), OwlNetsError> {
        store.insert(super::to_triple(&t, build)?);
        Ok(())
    })?;
    Ok(store)
}
