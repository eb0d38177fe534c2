//! The decoding engine: rewrites OWL-encoded anonymous class
//! expressions into flat binary relations between named entities.
//!
//! The unit of work is a single class node. Its anonymous
//! neighborhood is resolved into an [`AxiomMap`], each top-level
//! anonymous successor is classified once into an [`AxiomShape`], and
//! the matching decoder runs a remainder loop until the successor's
//! chain of obligations is exhausted. Per-class anomalies are
//! absorbed into the [`DecodeResult`]; nothing a single malformed
//! class does can abort the run.
pub mod axioms;
pub mod constructors;
pub mod restrictions;

pub use axioms::{resolve, AxiomMap, PropertyMap, ResolvedAxioms};
pub use constructors::{decode_constructor, RelationRules};
pub use restrictions::decode_restriction;

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use crate::index::AdjacencyIndex;
use crate::model::{Node, TripleStore};
use crate::vocab::{is_structural, vocab_lookup, Vocab, OWL, RDF};

/// The shape of one anonymous axiom entry, determined once when the
/// entry is classified rather than re-inspected at every call site.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AxiomShape {
    Union,
    Intersection,
    Restriction,
    Unrecognized,
}

/// Classifies a property set by the keys it carries.
pub fn classify(entry: &PropertyMap) -> AxiomShape {
    if entry.contains_key(OWL::UnionOf.local()) {
        return AxiomShape::Union;
    }
    if entry.contains_key(OWL::IntersectionOf.local()) {
        return AxiomShape::Intersection;
    }
    if let Some(t) = entry.get(RDF::Type.local()) {
        if let Some(iri) = t.as_iri() {
            if let Some(Vocab::OWL(OWL::Restriction)) = vocab_lookup(iri) {
                return AxiomShape::Restriction;
            }
        }
    }
    AxiomShape::Unrecognized
}

/// Everything one run accumulates.
#[derive(Debug, Default)]
pub struct DecodeResult {
    /// The flattened triples. Subject and object are always named or
    /// literal, never blank.
    pub decoded: TripleStore,
    /// Classes that carried anonymous structure and were decoded.
    pub decoded_classes: IndexSet<Node>,
    /// `(class, blank node)` pairs skipped because their encoding
    /// used cardinality.
    pub cardinality: IndexSet<(Node, Node)>,
    /// Classes skipped wholesale because they used `complementOf`.
    pub complement: IndexSet<Node>,
    /// Frequency table of unrecognized axiom property names.
    pub misc: IndexMap<String, usize>,
    /// Total classes drained from the work queue.
    pub classes_seen: usize,
}

/// Drives the per-class decode loop over a read-only adjacency index.
pub struct Decoder<'a> {
    index: &'a AdjacencyIndex,
    rules: RelationRules,
}

impl<'a> Decoder<'a> {
    pub fn new(index: &'a AdjacencyIndex, rules: RelationRules) -> Decoder<'a> {
        Decoder { index, rules }
    }

    /// Drains the class set, decoding each class at most once. The
    /// classes are independent work items; processing order does not
    /// affect the result.
    pub fn decode(&self, mut classes: IndexSet<Node>) -> DecodeResult {
        let mut result = DecodeResult::default();

        while let Some(class) = classes.pop() {
            result.classes_seen += 1;
            self.decode_class(&class, &mut result);
        }

        debug!(
            "decoded {} of {} classes ({} complement-skipped, {} cardinality elements ignored)",
            result.decoded_classes.len(),
            result.classes_seen,
            result.complement.len(),
            result.cardinality.len()
        );
        result
    }

    fn decode_class(&self, class: &Node, result: &mut DecodeResult) {
        let resolved = axioms::resolve(class, self.index);
        result.cardinality.extend(resolved.cardinality.into_iter());

        if resolved.axioms.is_empty() {
            // no anonymous structure: the class is already flat
            trace!("{} has no owl-encoded structure", class);
            return;
        }

        if resolved
            .axioms
            .iter()
            .any(|(_, props)| props.contains_key(OWL::ComplementOf.local()))
        {
            debug!("{} uses complementOf, skipping", class);
            result.complement.insert(class.clone());
            return;
        }

        result.decoded_classes.insert(class.clone());

        let successors: Vec<Node> = self
            .index
            .out_edges(class)
            .iter()
            .filter(|(_, o)| o.is_blank())
            .map(|(_, o)| o.clone())
            .collect();

        for succ in successors {
            // a cardinality-excluded successor has no entry and emits
            // nothing
            let mut edges = resolved.axioms.get(&succ).cloned();

            // each remainder step consumes at least one blank node of
            // the chain; the bound turns a malformed cyclic nesting
            // into a truncated class instead of a hang
            let mut hops = 0;
            while let Some(entry) = edges {
                hops += 1;
                if hops > resolved.axioms.len() + 1 {
                    debug!("{} has a cyclic axiom chain, truncating", class);
                    break;
                }

                match classify(&entry) {
                    AxiomShape::Union | AxiomShape::Intersection => {
                        let (emitted, remainder) =
                            decode_constructor(class, &entry, &resolved.axioms, None, &self.rules);
                        result.decoded.extend(emitted);
                        edges = remainder;
                    }
                    AxiomShape::Restriction => {
                        let (emitted, remainder) =
                            decode_restriction(class, &entry, &resolved.axioms, &self.rules);
                        result.decoded.extend(emitted);
                        edges = remainder;
                    }
                    AxiomShape::Unrecognized => {
                        for k in entry.keys().filter(|k| !is_structural(k)) {
                            *result.misc.entry(k.clone()).or_insert(0) += 1;
                        }
                        edges = None;
                    }
                }
            }
        }
    }
}
