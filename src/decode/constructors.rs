//! Decoding of `owl:unionOf` and `owl:intersectionOf` list
//! constructors into flattened triples.
use crate::model::{Build, Node, Triple, TripleStore};
use crate::vocab::{OWL, RDF, RDFS};

use super::axioms::{AxiomMap, PropertyMap};

/// Picks the relation used for a flattened member triple.
///
/// The "qualitative value" entity family is recognized by substring
/// markers on the IRI. The marker set and both relation IRIs are
/// ontology-specific and injectable; the defaults reproduce the OBO
/// setup (PATO terms, `rdfs:subClassOf`, `obo:RO_0000086`).
#[derive(Clone, Debug)]
pub struct RelationRules {
    quality_markers: Vec<String>,
    subclass_of: Node,
    has_quality: Node,
}

impl RelationRules {
    pub fn new(build: &Build) -> RelationRules {
        RelationRules {
            quality_markers: vec!["PATO".to_string()],
            subclass_of: build.named(RDFS::SubClassOf.iri_str()),
            has_quality: build.named("http://purl.obolibrary.org/obo/RO_0000086"),
        }
    }

    pub fn with_quality_markers(mut self, markers: Vec<String>) -> RelationRules {
        self.quality_markers = markers;
        self
    }

    pub fn with_relations(mut self, subclass_of: Node, has_quality: Node) -> RelationRules {
        self.subclass_of = subclass_of;
        self.has_quality = has_quality;
        self
    }

    /// Resolves the relation between a class and a flattened member.
    ///
    /// An explicit relation (a restriction's `onProperty` value) always
    /// wins. Otherwise: a subject outside the qualitative-value family
    /// pointing at a member inside it gets the has-quality relation;
    /// every other combination defaults to `rdfs:subClassOf`.
    pub fn object_property(&self, sub: &Node, obj: &Node, relation: Option<&Node>) -> Node {
        if let Some(r) = relation {
            return r.clone();
        }

        if !self.in_family(sub) && self.in_family(obj) {
            self.has_quality.clone()
        } else {
            self.subclass_of.clone()
        }
    }

    fn in_family(&self, n: &Node) -> bool {
        n.as_iri()
            .map(|iri| self.quality_markers.iter().any(|m| iri.contains(m.as_str())))
            .unwrap_or(false)
    }
}

/// Follows an anonymous `first`/`rest` link to the next property set
/// to walk, merging obligations when both ends are anonymous.
///
/// A link missing either key, or pointing at nodes with no entry in
/// the map, ends the walk instead of raising: real-world ontologies
/// are imperfect and one malformed list must not abort the class.
pub(crate) fn anonymous_successor(entry: &PropertyMap, map: &AxiomMap) -> Option<PropertyMap> {
    let first = entry.get(RDF::First.local())?;
    let rest = entry.get(RDF::Rest.local())?;

    match (first, rest) {
        (Node::Named(_), Node::Blank(_)) => map.get(rest).cloned(),
        (Node::Blank(_), Node::Blank(_)) => {
            // nested anonymous member: fold the tail's obligations
            // over the member's, later writes winning
            let mut merged = map.get(first).cloned()?;
            if let Some(tail) = map.get(rest) {
                for (k, v) in tail.iter() {
                    merged.insert(k.clone(), v.clone());
                }
            }
            Some(merged)
        }
        (Node::Named(_), _) | (Node::Blank(_), _) => map.get(first).cloned(),
        _ => None,
    }
}

/// Walks a list-encoded `unionOf`/`intersectionOf` value, emitting one
/// flattened triple per named member.
///
/// Returns the decoded triples plus the remaining property set when
/// the walk runs into an entry that is not list plumbing (typically a
/// restriction member); the caller re-dispatches that remainder.
pub fn decode_constructor(
    class: &Node,
    entry: &PropertyMap,
    map: &AxiomMap,
    relation: Option<&Node>,
    rules: &RelationRules,
) -> (TripleStore, Option<PropertyMap>) {
    let mut emitted = TripleStore::new();

    let head = entry
        .get(OWL::UnionOf.local())
        .or_else(|| entry.get(OWL::IntersectionOf.local()));
    let mut batch = head.and_then(|h| map.get(h).cloned());

    // a well-formed list visits each blank node at most once, so the
    // walk is bounded by the map size; a malformed cyclic chain
    // truncates here rather than spinning
    let mut steps = 0;
    while let Some(cur) = batch {
        steps += 1;
        if steps > map.len() + 1 {
            return (emitted, None);
        }

        let link = match (
            cur.get(RDF::First.local()).cloned(),
            cur.get(RDF::Rest.local()).cloned(),
        ) {
            (Some(f), Some(r)) if !cur.contains_key(RDF::Type.local()) => (f, r),
            _ => return (emitted, Some(cur)),
        };

        match link {
            (first @ Node::Named(_), rest @ Node::Blank(_)) => {
                let prop = rules.object_property(class, &first, relation);
                emitted.insert(Triple::new(class.clone(), prop, first));
                batch = map.get(&rest).cloned();
            }
            (first @ Node::Named(_), Node::Named(_)) => {
                // the list has ended
                let prop = rules.object_property(class, &first, relation);
                emitted.insert(Triple::new(class.clone(), prop, first));
                batch = None;
            }
            _ => {
                batch = anonymous_successor(&cur, map);
            }
        }
    }

    (emitted, None)
}
