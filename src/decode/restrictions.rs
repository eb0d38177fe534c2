//! Decoding of `owl:Restriction` axioms into flattened triples.
use crate::model::{Node, Triple, TripleStore};
use crate::vocab::{is_structural, OWL};

use super::axioms::{AxiomMap, PropertyMap};
use super::constructors::{anonymous_successor, decode_constructor, RelationRules};

/// Decodes one restriction entry.
///
/// The value-carrying key is whichever local name is left once the
/// structural keys (`type`, `first`, `rest`, `onProperty`) are set
/// aside; a well-formed restriction has exactly one (`someValuesFrom`,
/// `allValuesFrom`, `hasValue`, `hasSelf`, or `onClass`). A nested
/// union/intersection filler is delegated back to the constructor
/// decoder with the `onProperty` value as the relation; any other
/// anonymous filler comes back as the remainder for the caller to
/// keep walking.
pub fn decode_restriction(
    class: &Node,
    entry: &PropertyMap,
    map: &AxiomMap,
    rules: &RelationRules,
) -> (TripleStore, Option<PropertyMap>) {
    let mut emitted = TripleStore::new();

    let (value_key, value) = match entry.iter().find(|(k, _)| !is_structural(k)) {
        Some((k, v)) => (k.clone(), v.clone()),
        None => return (emitted, None),
    };
    let on_property = match entry.get(OWL::OnProperty.local()) {
        Some(p) => p.clone(),
        None => return (emitted, None),
    };

    match &value {
        Node::Named(_) | Node::Literal(_) => {
            // hasSelf relates the class to itself; everything else
            // relates it to the value
            let object = if value_key == OWL::HasSelf.local() {
                class.clone()
            } else {
                value.clone()
            };
            emitted.insert(Triple::new(class.clone(), on_property, object));

            if entry.len() == 3 {
                // type + onProperty + value: fully decoded
                (emitted, None)
            } else {
                (emitted, anonymous_successor(entry, map))
            }
        }
        Node::Blank(_) => match map.get(&value) {
            Some(nested)
                if nested.contains_key(OWL::UnionOf.local())
                    || nested.contains_key(OWL::IntersectionOf.local()) =>
            {
                let (more, remainder) =
                    decode_constructor(class, nested, map, Some(&on_property), rules);
                emitted.extend(more);
                (emitted, remainder)
            }
            Some(nested) => (emitted, Some(nested.clone())),
            None => (emitted, None),
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::decode::axioms::resolve;
    use crate::index::Graph;
    use crate::model::{Build, Literal, Triple};
    use crate::vocab::{RDF, RDFS};

    const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

    // C rdfs:subClassOf [ a owl:Restriction ; owl:onProperty P ; <value_pred> <value> ]
    fn restriction_graph(b: &Build, value_pred: &str, value: Node) -> Graph {
        let n1 = b.blank("n1");
        Graph::new(
            vec![
                Triple::new(
                    b.named("http://example.com/C"),
                    b.named(RDFS::SubClassOf.iri_str()),
                    n1.clone(),
                ),
                Triple::new(
                    n1.clone(),
                    b.named(RDF::Type.iri_str()),
                    b.named(OWL::Restriction.iri_str()),
                ),
                Triple::new(
                    n1.clone(),
                    b.named(OWL::OnProperty.iri_str()),
                    b.named("http://example.com/P"),
                ),
                Triple::new(n1, b.named(value_pred), value),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[test]
    fn test_some_values_from() {
        let b = Build::new();
        let g = restriction_graph(
            &b,
            OWL::SomeValuesFrom.iri_str(),
            b.named("http://example.com/D"),
        );
        let c = b.named("http://example.com/C");

        let resolved = resolve(&c, g.index());
        let entry = resolved.axioms.get(&b.blank("n1")).unwrap();

        let (emitted, remainder) =
            decode_restriction(&c, entry, &resolved.axioms, &RelationRules::new(&b));

        assert!(remainder.is_none());
        assert_eq!(emitted.len(), 1);
        assert!(emitted.contains(&Triple::new(
            c,
            b.named("http://example.com/P"),
            b.named("http://example.com/D")
        )));
    }

    #[test]
    fn test_all_values_from() {
        let b = Build::new();
        let g = restriction_graph(
            &b,
            OWL::AllValuesFrom.iri_str(),
            b.named("http://example.com/D"),
        );
        let c = b.named("http://example.com/C");

        let resolved = resolve(&c, g.index());
        let entry = resolved.axioms.get(&b.blank("n1")).unwrap();

        let (emitted, remainder) =
            decode_restriction(&c, entry, &resolved.axioms, &RelationRules::new(&b));

        assert!(remainder.is_none());
        assert_eq!(emitted.len(), 1);
        assert!(emitted.contains(&Triple::new(
            c,
            b.named("http://example.com/P"),
            b.named("http://example.com/D")
        )));
    }

    #[test]
    fn test_on_class() {
        let b = Build::new();
        let g = restriction_graph(&b, OWL::OnClass.iri_str(), b.named("http://example.com/D"));
        let c = b.named("http://example.com/C");

        let resolved = resolve(&c, g.index());
        let entry = resolved.axioms.get(&b.blank("n1")).unwrap();

        let (emitted, remainder) =
            decode_restriction(&c, entry, &resolved.axioms, &RelationRules::new(&b));

        assert!(remainder.is_none());
        assert_eq!(emitted.len(), 1);
        assert!(emitted.contains(&Triple::new(
            c,
            b.named("http://example.com/P"),
            b.named("http://example.com/D")
        )));
    }

    #[test]
    fn test_has_value_literal_filler() {
        let b = Build::new();
        let value = Node::Literal(Literal::Simple {
            literal: "clinical".to_string(),
        });
        let g = restriction_graph(&b, OWL::HasValue.iri_str(), value.clone());
        let c = b.named("http://example.com/C");

        let resolved = resolve(&c, g.index());
        let entry = resolved.axioms.get(&b.blank("n1")).unwrap();

        let (emitted, remainder) =
            decode_restriction(&c, entry, &resolved.axioms, &RelationRules::new(&b));

        // the literal filler comes through as the object unchanged
        assert!(remainder.is_none());
        assert_eq!(emitted.len(), 1);
        assert!(emitted.contains(&Triple::new(c, b.named("http://example.com/P"), value)));
    }

    #[test]
    fn test_has_self_points_back_at_class() {
        let b = Build::new();
        let g = restriction_graph(
            &b,
            OWL::HasSelf.iri_str(),
            Node::Literal(Literal::Datatype {
                literal: "true".to_string(),
                datatype_iri: b.iri("http://www.w3.org/2001/XMLSchema#boolean"),
            }),
        );
        let c = b.named("http://example.com/C");

        let resolved = resolve(&c, g.index());
        let entry = resolved.axioms.get(&b.blank("n1")).unwrap();

        let (emitted, remainder) =
            decode_restriction(&c, entry, &resolved.axioms, &RelationRules::new(&b));

        assert!(remainder.is_none());
        assert!(emitted.contains(&Triple::new(
            c.clone(),
            b.named("http://example.com/P"),
            c
        )));
    }

    #[test]
    fn test_nested_union_filler_uses_on_property() {
        let b = Build::new();
        let (n1, n2, n3, n4) = (b.blank("n1"), b.blank("n2"), b.blank("n3"), b.blank("n4"));

        // C rdfs:subClassOf [ a owl:Restriction ; owl:onProperty P ;
        //                     owl:someValuesFrom [ owl:unionOf (A B) ] ]
        let g = Graph::new(
            vec![
                Triple::new(
                    b.named("http://example.com/C"),
                    b.named(RDFS::SubClassOf.iri_str()),
                    n1.clone(),
                ),
                Triple::new(
                    n1.clone(),
                    b.named(RDF::Type.iri_str()),
                    b.named(OWL::Restriction.iri_str()),
                ),
                Triple::new(
                    n1.clone(),
                    b.named(OWL::OnProperty.iri_str()),
                    b.named("http://example.com/P"),
                ),
                Triple::new(n1, b.named(OWL::SomeValuesFrom.iri_str()), n2.clone()),
                Triple::new(n2.clone(), b.named(OWL::UnionOf.iri_str()), n3.clone()),
                Triple::new(
                    n3.clone(),
                    b.named(RDF::First.iri_str()),
                    b.named("http://example.com/A"),
                ),
                Triple::new(n3, b.named(RDF::Rest.iri_str()), n4.clone()),
                Triple::new(
                    n4.clone(),
                    b.named(RDF::First.iri_str()),
                    b.named("http://example.com/B"),
                ),
                Triple::new(n4, b.named(RDF::Rest.iri_str()), b.named(NIL)),
            ]
            .into_iter()
            .collect(),
        );
        let c = b.named("http://example.com/C");

        let resolved = resolve(&c, g.index());
        let entry = resolved.axioms.get(&b.blank("n1")).unwrap();

        let (emitted, remainder) =
            decode_restriction(&c, entry, &resolved.axioms, &RelationRules::new(&b));

        assert!(remainder.is_none());
        let p = b.named("http://example.com/P");
        assert_eq!(emitted.len(), 2);
        assert!(emitted.contains(&Triple::new(
            c.clone(),
            p.clone(),
            b.named("http://example.com/A")
        )));
        assert!(emitted.contains(&Triple::new(c, p, b.named("http://example.com/B"))));
    }

    #[test]
    fn test_missing_on_property_truncates() {
        let b = Build::new();
        let n1 = b.blank("n1");
        let g = Graph::new(
            vec![
                Triple::new(
                    b.named("http://example.com/C"),
                    b.named(RDFS::SubClassOf.iri_str()),
                    n1.clone(),
                ),
                Triple::new(
                    n1.clone(),
                    b.named(RDF::Type.iri_str()),
                    b.named(OWL::Restriction.iri_str()),
                ),
                Triple::new(
                    n1,
                    b.named(OWL::SomeValuesFrom.iri_str()),
                    b.named("http://example.com/D"),
                ),
            ]
            .into_iter()
            .collect(),
        );
        let c = b.named("http://example.com/C");

        let resolved = resolve(&c, g.index());
        let entry = resolved.axioms.get(&b.blank("n1")).unwrap();

        let (emitted, remainder) =
            decode_restriction(&c, entry, &resolved.axioms, &RelationRules::new(&b));

        assert!(emitted.is_empty());
        assert!(remainder.is_none());
    }
}
