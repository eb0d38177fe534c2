//! Derived, read-only views over a [`TripleStore`].
use indexmap::{IndexMap, IndexSet};

use crate::model::{Node, TripleStore};
use crate::vocab::{OWL, RDF};

/// A multigraph view keyed by subject node, giving direct access to a
/// node's outgoing `(predicate, object)` pairs.
///
/// The index is built once and consulted read-only afterwards; when
/// the underlying triple set changes, build a new index rather than
/// patching this one.
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    out: IndexMap<Node, Vec<(Node, Node)>>,
}

impl AdjacencyIndex {
    pub fn build(store: &TripleStore) -> AdjacencyIndex {
        let mut out: IndexMap<Node, Vec<(Node, Node)>> = IndexMap::new();
        for t in store {
            out.entry(t.sub.clone())
                .or_insert_with(Vec::new)
                .push((t.pred.clone(), t.obj.clone()));
        }
        AdjacencyIndex { out }
    }

    /// The outgoing `(predicate, object)` pairs of a node, empty when
    /// the node has none.
    pub fn out_edges(&self, n: &Node) -> &[(Node, Node)] {
        self.out.get(n).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The number of nodes with at least one outgoing edge.
    pub fn subject_count(&self) -> usize {
        self.out.len()
    }
}

/// A triple store together with its derived adjacency index.
///
/// The index is a read cache over the extensional set. [`Graph::rebind`]
/// replaces the set and rebuilds the index wholesale; nothing mutates
/// the store while the index is live.
#[derive(Debug, Default)]
pub struct Graph {
    store: TripleStore,
    index: AdjacencyIndex,
}

impl Graph {
    pub fn new(store: TripleStore) -> Graph {
        let index = AdjacencyIndex::build(&store);
        Graph { store, index }
    }

    pub fn store(&self) -> &TripleStore {
        &self.store
    }

    pub fn index(&self) -> &AdjacencyIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Rebinds the graph to a new extensional set, invalidating and
    /// rebuilding the adjacency index.
    pub fn rebind(&mut self, store: TripleStore) {
        self.index = AdjacencyIndex::build(&store);
        self.store = store;
    }

    /// Every named node declared as an `owl:Class`. Computed once at
    /// the start of a run; the caller drains the returned set.
    pub fn classes(&self) -> IndexSet<Node> {
        self.store
            .iter()
            .filter(|t| {
                t.sub.is_named()
                    && is_vocab(&t.pred, RDF::Type.iri_str())
                    && is_vocab(&t.obj, OWL::Class.iri_str())
            })
            .map(|t| t.sub.clone())
            .collect()
    }
}

fn is_vocab(n: &Node, iri: &str) -> bool {
    n.as_iri().map(|i| &**i == iri).unwrap_or(false)
}
