//! Core data model: interned IRIs, graph nodes, triples, and triple sets.
use std::borrow::Borrow;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::iter::FromIterator;
use std::ops::Deref;
use std::rc::Rc;

use indexmap::IndexSet;

/// A globally unique identifier for a named entity.
///
/// IRIs are interned through [`Build`], so repeated occurrences of the
/// same IRI share storage and clone cheaply.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct IRI(Rc<str>);

impl Deref for IRI {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IRI {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for IRI {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for IRI {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&IRI> for String {
    fn from(i: &IRI) -> String {
        i.0.to_string()
    }
}

impl From<IRI> for String {
    fn from(i: IRI) -> String {
        i.0.to_string()
    }
}

/// Factory for interned [`IRI`]s and the nodes built from them.
#[derive(Debug, Default)]
pub struct Build(RefCell<HashSet<IRI>>);

impl Build {
    pub fn new() -> Build {
        Build::default()
    }

    /// Constructs a new `IRI`, returning the cached instance if this
    /// `Build` has seen the string before.
    ///
    /// # Examples
    ///
    /// ```
    /// # use owl_nets::model::Build;
    /// let b = Build::new();
    /// let iri = b.iri("http://www.example.com");
    /// let iri2 = b.iri("http://www.example.com".to_string());
    ///
    /// assert_eq!(iri, iri2);
    /// ```
    pub fn iri<S: AsRef<str>>(&self, s: S) -> IRI {
        let mut cache = self.0.borrow_mut();
        if let Some(iri) = cache.get(s.as_ref()) {
            return iri.clone();
        }

        let iri = IRI(Rc::from(s.as_ref()));
        cache.insert(iri.clone());
        iri
    }

    /// Constructs a [`Node::Named`] for the given IRI string.
    pub fn named<S: AsRef<str>>(&self, s: S) -> Node {
        Node::Named(self.iri(s))
    }

    /// Constructs a [`Node::Blank`] with the given graph-local id.
    pub fn blank<S: AsRef<str>>(&self, s: S) -> Node {
        Node::Blank(BlankNode::new(s))
    }
}

/// An anonymous graph-local node. The id is opaque: it identifies the
/// node within one graph only and is not stable across documents.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BlankNode(Rc<str>);

impl BlankNode {
    pub fn new<S: AsRef<str>>(id: S) -> BlankNode {
        BlankNode(Rc::from(id.as_ref()))
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl Display for BlankNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// An RDF literal value.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Literal {
    Simple { literal: String },
    Language { literal: String, lang: String },
    Datatype { literal: String, datatype_iri: IRI },
}

impl Literal {
    pub fn literal(&self) -> &str {
        match self {
            Literal::Simple { literal } => literal,
            Literal::Language { literal, .. } => literal,
            Literal::Datatype { literal, .. } => literal,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Simple { literal } => write!(f, "{:?}", literal),
            Literal::Language { literal, lang } => write!(f, "{:?}@{}", literal, lang),
            Literal::Datatype {
                literal,
                datatype_iri,
            } => write!(f, "{:?}^^<{}>", literal, datatype_iri),
        }
    }
}

/// A node of the graph: a named entity, an anonymous node, or a
/// literal value. Equality and hashing are by tag and payload.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Node {
    Named(IRI),
    Blank(BlankNode),
    Literal(Literal),
}

impl Node {
    pub fn is_named(&self) -> bool {
        matches!(self, Node::Named(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// The IRI of a named node, or `None` for anything else.
    pub fn as_iri(&self) -> Option<&IRI> {
        match self {
            Node::Named(iri) => Some(iri),
            _ => None,
        }
    }
}

impl From<IRI> for Node {
    fn from(iri: IRI) -> Node {
        Node::Named(iri)
    }
}

impl From<BlankNode> for Node {
    fn from(b: BlankNode) -> Node {
        Node::Blank(b)
    }
}

impl From<Literal> for Node {
    fn from(l: Literal) -> Node {
        Node::Literal(l)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Named(iri) => write!(f, "<{}>", iri),
            Node::Blank(b) => write!(f, "{}", b),
            Node::Literal(l) => write!(f, "{}", l),
        }
    }
}

/// A subject-predicate-object statement. Immutable once constructed.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Triple {
    pub sub: Node,
    pub pred: Node,
    pub obj: Node,
}

impl Triple {
    pub fn new(sub: Node, pred: Node, obj: Node) -> Triple {
        Triple { sub, pred, obj }
    }
}

impl Display for Triple {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.sub, self.pred, self.obj)
    }
}

/// An in-memory set of triples. Duplicate insertion is a no-op and
/// insertion order carries no meaning, although iteration order is
/// deterministic for a given insertion sequence.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TripleStore {
    triples: IndexSet<Triple>,
}

impl TripleStore {
    pub fn new() -> TripleStore {
        TripleStore::default()
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Inserts a triple, returning false if it was already present.
    pub fn insert(&mut self, t: Triple) -> bool {
        self.triples.insert(t)
    }

    pub fn contains(&self, t: &Triple) -> bool {
        self.triples.contains(t)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Set union with another store.
    pub fn union(&self, other: &TripleStore) -> TripleStore {
        let mut out = self.clone();
        out.triples.extend(other.triples.iter().cloned());
        out
    }

    /// Set difference: every triple of `self` not present in `other`.
    pub fn difference(&self, other: &TripleStore) -> TripleStore {
        self.triples
            .iter()
            .filter(|t| !other.contains(t))
            .cloned()
            .collect()
    }

    /// The number of distinct subject and object nodes. Predicates
    /// are not counted; this matches how graph consumers count nodes.
    pub fn endpoint_count(&self) -> usize {
        let mut nodes: IndexSet<&Node> = IndexSet::new();
        for t in &self.triples {
            nodes.insert(&t.sub);
            nodes.insert(&t.obj);
        }
        nodes.len()
    }
}

impl Extend<Triple> for TripleStore {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter)
    }
}

impl FromIterator<Triple> for TripleStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> TripleStore {
        TripleStore {
            triples: IndexSet::from_iter(iter),
        }
    }
}

impl<'a> IntoIterator for &'a TripleStore {
    type Item = &'a Triple;
    type IntoIter = indexmap::set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl IntoIterator for TripleStore {
    type Item = Triple;
    type IntoIter = indexmap::set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}
