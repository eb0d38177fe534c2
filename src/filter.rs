//! Partitions a graph into directly meaningful triples and the
//! OWL-scaffolding residue that must go through decoding instead.
use std::io::BufRead;

use indexmap::IndexSet;

use crate::error::OwlNetsError;
use crate::index::Graph;
use crate::model::{Build, TripleStore, IRI};

/// Reads a predicate allow-list: one IRI per line, used verbatim.
///
/// Blank lines are ignored and surrounding whitespace is trimmed.
/// Every line must parse as an IRI, and an allow-list with no entries
/// at all is a configuration error.
pub fn read_keep_predicates<R: BufRead>(
    read: R,
    build: &Build,
) -> Result<IndexSet<IRI>, OwlNetsError> {
    let mut keep = IndexSet::new();
    for line in read.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        oxiri::Iri::parse(line)?;
        keep.insert(build.iri(line));
    }

    if keep.is_empty() {
        return Err(OwlNetsError::configuration(
            "the predicate allow-list contains no predicates",
        ));
    }
    Ok(keep)
}

/// Splits a graph into a kept store and a removed store.
///
/// A triple is kept when its predicate is in the allow-list and both
/// subject and object are named nodes; triples touching a blank node
/// are never directly meaningful. The two stores partition the input:
/// their union is the graph and their intersection is empty.
pub fn filter(graph: &Graph, keep: &IndexSet<IRI>) -> (TripleStore, TripleStore) {
    let mut kept = TripleStore::new();
    for t in graph.store() {
        let wanted = t
            .pred
            .as_iri()
            .map(|p| keep.contains(p))
            .unwrap_or(false)
            && t.sub.is_named()
            && t.obj.is_named();
        if wanted {
            kept.insert(t.clone());
        }
    }

    let removed = graph.store().difference(&kept);
    (kept, removed)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Triple;
    use std::io::Cursor;

    #[test]
    fn test_read_keep_predicates() {
        let b = Build::new();
        let input = "http://example.com/p\n\n  http://example.com/q  \n";
        let keep = read_keep_predicates(Cursor::new(input), &b).unwrap();

        assert_eq!(keep.len(), 2);
        assert!(keep.contains(&b.iri("http://example.com/p")));
        assert!(keep.contains(&b.iri("http://example.com/q")));
    }

    #[test]
    fn test_read_keep_predicates_empty() {
        let b = Build::new();
        let err = read_keep_predicates(Cursor::new("\n\n"), &b);
        assert!(matches!(err, Err(OwlNetsError::ConfigurationError(_))));
    }

    #[test]
    fn test_read_keep_predicates_invalid_iri() {
        let b = Build::new();
        let err = read_keep_predicates(Cursor::new("not an iri"), &b);
        assert!(matches!(err, Err(OwlNetsError::ParserError(_, _))));
    }

    #[test]
    fn test_filter_partitions_graph() {
        let b = Build::new();
        let p = b.named("http://example.com/p");
        let q = b.named("http://example.com/q");

        let keep_named = Triple::new(
            b.named("http://example.com/a"),
            p.clone(),
            b.named("http://example.com/b"),
        );
        let drop_blank = Triple::new(b.named("http://example.com/a"), p, b.blank("n1"));
        let drop_pred = Triple::new(
            b.named("http://example.com/a"),
            q,
            b.named("http://example.com/c"),
        );

        let graph = Graph::new(
            vec![keep_named.clone(), drop_blank.clone(), drop_pred.clone()]
                .into_iter()
                .collect(),
        );
        let keep: IndexSet<IRI> = vec![b.iri("http://example.com/p")].into_iter().collect();

        let (kept, removed) = filter(&graph, &keep);

        assert_eq!(kept.len(), 1);
        assert!(kept.contains(&keep_named));
        assert_eq!(removed.len(), 2);
        assert!(removed.contains(&drop_blank));
        assert!(removed.contains(&drop_pred));

        // kept and removed partition the graph
        assert_eq!(kept.union(&removed), *graph.store());
        assert!(kept.iter().all(|t| !removed.contains(t)));
    }

    #[test]
    fn test_filter_empty_allow_list() {
        let b = Build::new();
        let graph = Graph::new(
            vec![Triple::new(
                b.named("http://example.com/a"),
                b.named("http://example.com/p"),
                b.named("http://example.com/b"),
            )]
            .into_iter()
            .collect(),
        );

        let (kept, removed) = filter(&graph, &IndexSet::new());
        assert!(kept.is_empty());
        assert_eq!(removed, *graph.store());
    }
}
