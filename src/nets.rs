//! Whole-run entry point: filter, decode, combine, report.
use std::fmt::{Display, Formatter};
use std::io::Write;

use indexmap::{IndexMap, IndexSet};
use log::info;

use crate::decode::{Decoder, RelationRules};
use crate::error::OwlNetsError;
use crate::filter;
use crate::index::Graph;
use crate::model::{Node, TripleStore, IRI};

/// One configured decoding run over a merged ontology graph.
///
/// Construction fails fast on caller setup errors (empty graph, empty
/// allow-list, no declared classes); once constructed, [`OwlNets::run`]
/// cannot fail; per-class anomalies land in the [`Report`] instead.
pub struct OwlNets {
    graph: Graph,
    keep: IndexSet<IRI>,
    rules: RelationRules,
    classes: IndexSet<Node>,
}

/// The product of a run.
pub struct OwlNetsOutput {
    /// The decoded graph: filtered meaningful triples unioned with
    /// the flattened decodings. Named/Literal endpoints only.
    pub nets: TripleStore,
    /// The audit byproduct: everything the filter removed, including
    /// the OWL scaffolding the decoder consumed.
    pub byproduct: TripleStore,
    pub report: Report,
}

impl OwlNetsOutput {
    /// Serializes the audit byproduct as N-Triples.
    pub fn write_byproduct<W: Write>(&self, write: W) -> Result<W, OwlNetsError> {
        crate::io::ntriples::write(write, &self.byproduct)
    }
}

/// Statistics for one run. Surfaced to logs and callers; not part of
/// the data contract.
#[derive(Debug)]
pub struct Report {
    pub input_triples: usize,
    pub classes: usize,
    pub decoded_classes: usize,
    pub cardinality_skipped: usize,
    pub complement_skipped: usize,
    pub misc_skipped: IndexMap<String, usize>,
    pub output_triples: usize,
    pub output_nodes: usize,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "decoded {} of {} owl-encoded classes",
            self.decoded_classes, self.classes
        )?;
        writeln!(
            f,
            "{} class elements containing cardinality were ignored",
            self.cardinality_skipped
        )?;
        writeln!(
            f,
            "{} classes constructed with complementOf were removed",
            self.complement_skipped
        )?;
        let misc: Vec<&str> = self.misc_skipped.keys().map(String::as_str).collect();
        writeln!(
            f,
            "{} unrecognized axiom properties ignored: {}",
            self.misc_skipped.values().sum::<usize>(),
            misc.join(", ")
        )?;
        write!(
            f,
            "the decoded graph contains {} nodes and {} edges",
            self.output_nodes, self.output_triples
        )
    }
}

impl OwlNets {
    /// Sets a run up, validating the caller's configuration.
    pub fn new(
        graph: Graph,
        keep: IndexSet<IRI>,
        rules: RelationRules,
    ) -> Result<OwlNets, OwlNetsError> {
        if graph.is_empty() {
            return Err(OwlNetsError::configuration("the input graph is empty"));
        }
        if keep.is_empty() {
            return Err(OwlNetsError::configuration(
                "the predicate allow-list contains no predicates",
            ));
        }

        let classes = graph.classes();
        if classes.is_empty() {
            return Err(OwlNetsError::configuration(
                "the input graph declares no owl:Class nodes",
            ));
        }

        Ok(OwlNets {
            graph,
            keep,
            rules,
            classes,
        })
    }

    /// Runs the whole pipeline: partition the graph, decode every
    /// class, and union the flattened triples with the kept graph.
    pub fn run(self) -> OwlNetsOutput {
        info!("filtering {} triples", self.graph.len());
        let (kept, removed) = filter::filter(&self.graph, &self.keep);

        info!("decoding {} owl classes", self.classes.len());
        let decoder = Decoder::new(self.graph.index(), self.rules);
        let result = decoder.decode(self.classes);

        let nets = kept.union(&result.decoded);
        let report = Report {
            input_triples: self.graph.len(),
            classes: result.classes_seen,
            decoded_classes: result.decoded_classes.len(),
            cardinality_skipped: result.cardinality.len(),
            complement_skipped: result.complement.len(),
            misc_skipped: result.misc,
            output_triples: nets.len(),
            output_nodes: nets.endpoint_count(),
        };
        info!("completed the removal of owl semantics: {}", report);

        OwlNetsOutput {
            nets,
            byproduct: removed,
            report,
        }
    }
}
