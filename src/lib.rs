//! Subject-verb-object triplets from dependency parses.

mod classify;
pub use crate::classify::{
    is_noun_tag, is_object_relation, is_subject_relation, is_verb_tag, is_wh_tag,
    LexicalCategory, Relation, WordClass,
};

mod cmd;
pub use crate::cmd::{or_exit, or_stdin, or_stdout, Input, Output};

pub mod document;

mod error;
pub use crate::error::{Error, Result};

mod extract;
pub use crate::extract::{
    dedup, extract_from_refs, extract_triplets, resolve_subject, Coordination,
};

mod graph;
pub use crate::graph::{sentence_to_graph, traversal_edges, DependencyGraph, DependencyNode};

pub mod lookup;

mod token;
pub use crate::token::{DependencyEdge, EdgeRef, Sense, Token, Triplet, TripletSenses};
