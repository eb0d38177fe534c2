//! Recovery of the anonymous axiom structure reachable from a class.
use indexmap::{IndexMap, IndexSet};

use crate::index::AdjacencyIndex;
use crate::model::Node;
use crate::vocab::{local_name, mentions_cardinality};

/// The flattened properties of one blank node: local property name to
/// value. Keys are IRI fragments (`first`, `onProperty`, ...).
pub type PropertyMap = IndexMap<String, Node>;

/// Per-class mapping from each reachable blank node to its flattened
/// property set. Built lazily for one class and discarded afterwards.
#[derive(Debug, Default)]
pub struct AxiomMap {
    entries: IndexMap<Node, PropertyMap>,
}

impl AxiomMap {
    pub fn get(&self, n: &Node) -> Option<&PropertyMap> {
        self.entries.get(n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Node, &PropertyMap)> {
        self.entries.iter()
    }
}

/// The outcome of resolving one class's anonymous neighborhood.
#[derive(Debug, Default)]
pub struct ResolvedAxioms {
    pub axioms: AxiomMap,
    /// `(class, blank node)` pairs whose encoding used cardinality.
    /// These blank nodes get no [`AxiomMap`] entry and are reported,
    /// not decoded.
    pub cardinality: IndexSet<(Node, Node)>,
}

/// Discovers every blank node transitively reachable from `class`'s
/// outgoing edges and flattens each one's properties.
///
/// Traversal is an explicit worklist over an always-growing visited
/// set, so it terminates in O(reachable blank nodes) steps even on a
/// cyclic encoding. If a blank node writes the same local property
/// name twice (malformed upstream modeling), the later write silently
/// wins; upstream ontologies with genuinely ambiguous structure get
/// undefined results rather than an error.
pub fn resolve(class: &Node, index: &AdjacencyIndex) -> ResolvedAxioms {
    let mut seen: IndexSet<Node> = IndexSet::new();
    let mut frontier: Vec<Node> = index
        .out_edges(class)
        .iter()
        .filter(|(_, o)| o.is_blank())
        .map(|(_, o)| o.clone())
        .collect();

    while let Some(n) = frontier.pop() {
        if seen.insert(n.clone()) {
            for (_, o) in index.out_edges(&n) {
                if o.is_blank() && !seen.contains(o) {
                    frontier.push(o.clone());
                }
            }
        }
    }

    let mut resolved = ResolvedAxioms::default();
    for n in &seen {
        let edges = index.out_edges(n);

        let uses_cardinality = edges.iter().any(|(p, _)| {
            p.as_iri()
                .map(|iri| mentions_cardinality(iri))
                .unwrap_or(false)
        });
        if uses_cardinality {
            resolved.cardinality.insert((class.clone(), n.clone()));
            continue;
        }

        let mut props = PropertyMap::new();
        for (p, o) in edges {
            if let Some(iri) = p.as_iri() {
                props.insert(local_name(iri).to_string(), o.clone());
            }
        }
        resolved.axioms.entries.insert(n.clone(), props);
    }

    resolved
}
