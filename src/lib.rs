//! # OWL-NETS
//!
//! A decoder that removes OWL semantics from an ontology graph,
//! rewriting the logical scaffolding (restrictions, unions,
//! intersections, and the blank nodes that carry them) into plain
//! triples between named nodes, so the result can be consumed as a
//! property graph.
//!
//! The pipeline has three stages:
//!
//! 1. [`filter`] partitions the input into triples that are
//!    biologically meaningful on their own and triples that exist
//!    only to encode logic.
//! 2. [`decode`] resolves every `owl:Class` node's blank-node
//!    subtree into axiom maps and flattens constructors and
//!    restrictions into named-to-named triples.
//! 3. [`nets`] runs both, unions the results, and accounts for
//!    everything that was skipped.
//!
//! # Example
//! ```
//! # use owl_nets::model::Build;
//! # use owl_nets::index::Graph;
//! # use owl_nets::decode::RelationRules;
//! # use owl_nets::nets::OwlNets;
//! # use owl_nets::io::ntriples;
//! # use indexmap::IndexSet;
//! let build = Build::new();
//! let doc = "<http://example.com/C> \
//!            <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> \
//!            <http://www.w3.org/2002/07/owl#Class> .\n\
//!            <http://example.com/C> \
//!            <http://example.com/keep> \
//!            <http://example.com/D> .\n";
//! let store = ntriples::read(doc.as_bytes(), &build)?;
//!
//! let mut keep = IndexSet::new();
//! keep.insert(build.iri("http://example.com/keep"));
//!
//! let nets = OwlNets::new(Graph::new(store), keep, RelationRules::new(&build))?;
//! let out = nets.run();
//! assert_eq!(out.nets.len(), 1);
//! # Ok::<(), owl_nets::error::OwlNetsError>(())
//! ```
pub mod decode;
pub mod error;
pub mod filter;
pub mod index;
pub mod io;
pub mod model;
pub mod nets;
pub mod vocab;
