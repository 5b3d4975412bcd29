//! Scans over an edge sequence used when rewriting coordinations and
//! open clausal complements. A missing match is `None`.

use crate::classify::Relation;
use crate::token::{EdgeRef, Token};

/// Copula of `target`, searching backwards from the edge before `position`.
pub fn find_copula<'a>(edges: &[EdgeRef<'a>], position: usize, target: &Token) -> Option<&'a Token> {
    preceding(edges, position)
        .find(|edge| edge.relation() == Relation::Copula && edge.head == target)
        .map(|edge| edge.dependent)
}

/// Verb taking `target` as its object, searching backwards from the edge
/// before `position`.
pub fn find_object_verb<'a>(
    edges: &[EdgeRef<'a>],
    position: usize,
    target: &Token,
) -> Option<&'a Token> {
    preceding(edges, position)
        .find(|edge| edge.relation() == Relation::Object && edge.dependent == target)
        .map(|edge| edge.head)
}

/// First object of the verb `target`.
pub fn find_object<'a>(edges: &[EdgeRef<'a>], target: &Token) -> Option<&'a Token> {
    edges
        .iter()
        .find(|edge| edge.relation() == Relation::Object && edge.head == target)
        .map(|edge| edge.dependent)
}

fn preceding<'e, 'a>(
    edges: &'e [EdgeRef<'a>],
    position: usize,
) -> impl Iterator<Item = &'e EdgeRef<'a>> {
    edges[..position.min(edges.len())].iter().rev()
}
