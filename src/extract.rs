//! Rule-based extraction of subject-verb-object triplets from the
//! dependency edges of a sentence.
//!
//! Edges are scanned in parser traversal order. Every subject edge opens a
//! clause whose predicate is the subject's head; the edges from the subject
//! onwards are then matched against the object, oblique, passive, open
//! complement, copula and coordination rules. Coordinations are handled by
//! rewriting the edge sequence and extracting from the rewritten sequence.
//! Within one call, the triplets of every rewritten sequence are computed
//! once: coordinated object lists rewrite to the same prefixes over and over.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::classify::{Relation, WordClass, DOBJ_RELATION, NSUBJ_RELATION};
use crate::lookup::{find_copula, find_object, find_object_verb};
use crate::token::{DependencyEdge, EdgeRef, Token, Triplet};

/// Extract the triplets of one parsed sentence.
///
/// The result is free of duplicates and ordered by first extraction.
pub fn extract_triplets(edges: &[DependencyEdge]) -> Vec<Triplet<'_>> {
    let edges: Vec<EdgeRef> = edges.iter().map(EdgeRef::from).collect();
    extract_from_refs(&edges)
}

/// Extract triplets from borrowed edges.
pub fn extract_from_refs<'a>(edges: &[EdgeRef<'a>]) -> Vec<Triplet<'a>> {
    extract_with(edges, &mut HashMap::new())
}

/// Triplets of the rewritten sequences seen during one extraction.
type Rewrites<'a> = HashMap<Vec<EdgeRef<'a>>, Vec<Triplet<'a>>>;

fn extract_with<'a>(edges: &[EdgeRef<'a>], rewrites: &mut Rewrites<'a>) -> Vec<Triplet<'a>> {
    let mut extractor = Extractor {
        edges,
        rewrites,
        triplets: Vec::new(),
    };

    let mut antecedent = None;
    for (position, edge) in edges.iter().enumerate() {
        match edge.relation() {
            Relation::RelativeClause => antecedent = Some(edge.head),
            Relation::Subject => extractor.extract_clause(position, antecedent),
            _ => (),
        }
    }

    dedup(extractor.triplets)
}

/// Remove repeated triplets, keeping the first occurrence of each.
pub fn dedup<'a>(triplets: Vec<Triplet<'a>>) -> Vec<Triplet<'a>> {
    let mut seen = HashSet::new();
    triplets
        .into_iter()
        .filter(|triplet| seen.insert(*triplet))
        .collect()
}

/// The subject of a clause. Wh-words stand for the antecedent of their
/// relative clause, when one was seen.
pub fn resolve_subject<'a>(dependent: &'a Token, antecedent: Option<&'a Token>) -> &'a Token {
    match (dependent.word_class(), antecedent) {
        (WordClass::WhWord, Some(antecedent)) => antecedent,
        _ => dependent,
    }
}

/// Which participant of a clause a conjunct is coordinated with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Coordination {
    /// "Bill and Tom kick ass."
    Subject,
    /// "Tom eats fish and cheese."
    Object,
    /// "Bill kicks ass and takes names."
    Predicate,
    /// "Bill is big and fat."
    Adjective,
    /// "Bill eats cheese and is fat."
    CopulaComplement,
}

impl Coordination {
    /// Classify a `conj` edge relative to the subject edge of its clause.
    /// The first matching pattern wins.
    pub fn classify(conj: &EdgeRef, subject_edge: &EdgeRef) -> Option<Self> {
        let head = conj.head.word_class();
        let dependent = conj.dependent.word_class();

        match (head, dependent) {
            (_, WordClass::Noun) if conj.head == subject_edge.dependent => {
                Some(Coordination::Subject)
            }
            (WordClass::Noun, WordClass::Noun) => Some(Coordination::Object),
            (_, WordClass::Verb) if conj.head == subject_edge.head => {
                Some(Coordination::Predicate)
            }
            (WordClass::Adjective, WordClass::Adjective) => Some(Coordination::Adjective),
            (_, WordClass::Adjective) if conj.head == subject_edge.head => {
                Some(Coordination::CopulaComplement)
            }
            _ => None,
        }
    }
}

struct Clause<'a> {
    position: usize,
    edge: EdgeRef<'a>,
    subject: &'a Token,
    predicate: &'a Token,
}

struct Extractor<'e, 'r, 'a> {
    edges: &'e [EdgeRef<'a>],
    rewrites: &'r mut Rewrites<'a>,
    triplets: Vec<Triplet<'a>>,
}

impl<'e, 'r, 'a> Extractor<'e, 'r, 'a> {
    fn extract_clause(&mut self, position: usize, antecedent: Option<&'a Token>) {
        let edges = self.edges;
        let edge = edges[position];
        let clause = Clause {
            position,
            edge,
            subject: resolve_subject(edge.dependent, antecedent),
            predicate: edge.head,
        };

        let subject = clause.subject;
        let predicate = clause.predicate;
        let verbal = predicate.word_class() == WordClass::Verb;
        let mut negated = false;

        for (idx, edge) in edges.iter().enumerate().skip(position) {
            let governed = edge.head == predicate;

            match edge.relation() {
                Relation::Negation => negated = true,
                Relation::Object if governed && verbal => {
                    self.emit(subject, predicate, edge.dependent, negated)
                }
                Relation::NominalModifier if governed && verbal => {
                    if !self.has_subject_or_predicate(subject, predicate) {
                        self.emit(subject, predicate, edge.dependent, negated)
                    }
                }
                Relation::PassiveAuxiliary if governed => {
                    self.emit(subject, edge.dependent, predicate, negated);

                    // The agent of a passive: "defeated by Clinton".
                    for agent in &edges[idx..] {
                        if agent.head == edge.head
                            && agent.relation() == Relation::NominalModifier
                        {
                            self.emit(agent.dependent, agent.head, subject, negated);
                        }
                    }
                }
                Relation::OpenComplement if governed && verbal => {
                    self.emit(subject, predicate, edge.dependent, negated);

                    if let Some(object) = find_object(&edges[position..], edge.dependent) {
                        self.emit(subject, edge.dependent, object, negated);
                    }
                }
                Relation::Copula if governed => {
                    self.emit(subject, edge.dependent, predicate, negated)
                }
                Relation::Conjunct => self.coordinate(&clause, idx, negated),
                _ => (),
            }
        }
    }

    fn coordinate(&mut self, clause: &Clause<'a>, position: usize, negated: bool) {
        let edges = self.edges;
        let conj = edges[position];

        let coordination = match Coordination::classify(&conj, &clause.edge) {
            Some(coordination) => coordination,
            None => {
                trace!(
                    "conjunct {} of {} does not coordinate with clause at {}",
                    conj.dependent,
                    conj.head,
                    clause.position
                );
                return;
            }
        };

        debug!(
            "{:?} coordination of {} with {} at edge {}",
            coordination, conj.dependent, conj.head, position
        );

        match coordination {
            Coordination::Subject => {
                let subject_edge = EdgeRef::new(clause.edge.head, NSUBJ_RELATION, conj.dependent);
                self.extract_rewritten(replace_clause(edges, position, subject_edge));
            }
            Coordination::Object => {
                if let Some(verb) = find_object_verb(edges, position, conj.head) {
                    let mut rewritten = edges[..position].to_vec();
                    rewritten.push(EdgeRef::new(verb, DOBJ_RELATION, conj.dependent));
                    self.extract_rewritten(rewritten);
                }
            }
            Coordination::Predicate | Coordination::CopulaComplement => {
                let subject_edge = EdgeRef::new(conj.dependent, NSUBJ_RELATION, clause.subject);
                self.extract_rewritten(replace_clause(edges, position, subject_edge));
            }
            Coordination::Adjective => {
                if let Some(copula) = find_copula(edges, position, conj.head) {
                    self.emit(clause.subject, copula, conj.dependent, negated);
                }
            }
        }
    }

    fn extract_rewritten(&mut self, edges: Vec<EdgeRef<'a>>) {
        if let Some(triplets) = self.rewrites.get(&edges) {
            trace!("reusing triplets of rewritten sequence of {} edges", edges.len());
            self.triplets.extend_from_slice(triplets);
            return;
        }

        let triplets = extract_with(&edges, self.rewrites);
        self.triplets.extend_from_slice(&triplets);
        self.rewrites.insert(edges, triplets);
    }

    fn has_subject_or_predicate(&self, subject: &Token, predicate: &Token) -> bool {
        self.triplets
            .iter()
            .any(|triplet| triplet.subject == subject || triplet.predicate == predicate)
    }

    fn emit(
        &mut self,
        subject: &'a Token,
        predicate: &'a Token,
        complement: &'a Token,
        negated: bool,
    ) {
        let triplet = Triplet::new(subject, predicate, complement, negated);
        trace!("triplet {}", triplet);
        self.triplets.push(triplet);
    }
}

/// A new clause introduced by `subject_edge`, followed by the edges after
/// the `conj` edge at `position`.
fn replace_clause<'a>(
    edges: &[EdgeRef<'a>],
    position: usize,
    subject_edge: EdgeRef<'a>,
) -> Vec<EdgeRef<'a>> {
    let mut rewritten = Vec::with_capacity(edges.len() - position);
    rewritten.push(subject_edge);
    rewritten.extend_from_slice(&edges[position + 1..]);
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(form: &str, tag: &str) -> Token {
        Token::new(form, tag)
    }

    fn forms<'a>(triplets: &[Triplet<'a>]) -> Vec<(&'a str, &'a str, &'a str, bool)> {
        triplets
            .iter()
            .map(|t| {
                (
                    t.subject.form(),
                    t.predicate.form(),
                    t.complement.form(),
                    t.negated,
                )
            })
            .collect()
    }

    #[test]
    fn empty_edges_have_no_triplets() {
        assert!(extract_triplets(&[]).is_empty());
        assert!(extract_from_refs(&[]).is_empty());
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let tom = token("Tom", "NNP");
        let eats = token("eats", "VBZ");
        let fish = token("fish", "NN");
        let cheese = token("cheese", "NN");

        let triplets = vec![
            Triplet::new(&tom, &eats, &fish, false),
            Triplet::new(&tom, &eats, &cheese, false),
            Triplet::new(&tom, &eats, &fish, false),
            Triplet::new(&tom, &eats, &fish, true),
        ];

        assert_eq!(
            forms(&dedup(triplets)),
            vec![
                ("Tom", "eats", "fish", false),
                ("Tom", "eats", "cheese", false),
                ("Tom", "eats", "fish", true),
            ]
        );
    }

    #[test]
    fn wh_subject_resolves_to_antecedent() {
        let that = token("that", "WDT");
        let plants = token("plants", "NNS");
        let bill = token("Bill", "NNP");

        assert_eq!(resolve_subject(&that, Some(&plants)), &plants);
        assert_eq!(resolve_subject(&that, None), &that);
        assert_eq!(resolve_subject(&bill, Some(&plants)), &bill);
    }

    #[test]
    fn relative_clause_subject_uses_antecedent() {
        let plants = token("plants", "NNS");
        let floral = token("floral", "JJ");
        let that = token("that", "WDT");
        let are = token("are", "VBP");

        let edges = vec![
            EdgeRef::new(&plants, "acl:relcl", &floral),
            EdgeRef::new(&floral, "nsubj", &that),
            EdgeRef::new(&floral, "cop", &are),
        ];

        assert_eq!(
            forms(&extract_from_refs(&edges)),
            vec![("plants", "are", "floral", false)]
        );
    }

    #[test]
    fn wh_subject_without_antecedent_is_kept() {
        let who = token("who", "WP");
        let knows = token("knows", "VBZ");
        let answer = token("answer", "NN");

        let edges = vec![
            EdgeRef::new(&knows, "nsubj", &who),
            EdgeRef::new(&knows, "dobj", &answer),
        ];

        assert_eq!(
            forms(&extract_from_refs(&edges)),
            vec![("who", "knows", "answer", false)]
        );
    }

    #[test]
    fn objects_need_verbal_predicates() {
        let bill = token("Bill", "NNP");
        let man = token("man", "NN");
        let fish = token("fish", "NN");

        let edges = vec![
            EdgeRef::new(&man, "nsubj", &bill),
            EdgeRef::new(&man, "dobj", &fish),
            EdgeRef::new(&man, "nmod", &fish),
            EdgeRef::new(&man, "xcomp", &fish),
        ];

        assert!(extract_from_refs(&edges).is_empty());
    }

    #[test]
    fn oblique_only_without_earlier_triplet() {
        let she = token("She", "PRP");
        let lives = token("lives", "VBZ");
        let paris = token("Paris", "NNP");
        let in_ = token("in", "IN");

        let edges = vec![
            EdgeRef::new(&lives, "nsubj", &she),
            EdgeRef::new(&lives, "nmod", &paris),
            EdgeRef::new(&paris, "case", &in_),
        ];
        assert_eq!(
            forms(&extract_from_refs(&edges)),
            vec![("She", "lives", "Paris", false)]
        );

        let eats = token("eats", "VBZ");
        let fish = token("fish", "NN");
        let edges = vec![
            EdgeRef::new(&eats, "nsubj", &she),
            EdgeRef::new(&eats, "dobj", &fish),
            EdgeRef::new(&eats, "nmod", &paris),
        ];
        assert_eq!(
            forms(&extract_from_refs(&edges)),
            vec![("She", "eats", "fish", false)]
        );
    }

    #[test]
    fn negation_is_scoped_to_the_clause_scan() {
        let bill = token("Bill", "NNP");
        let eat = token("eat", "VB");
        let not = token("not", "RB");
        let fish = token("fish", "NN");
        let tom = token("Tom", "NNP");
        let likes = token("likes", "VBZ");
        let chips = token("chips", "NNS");

        let edges = vec![
            EdgeRef::new(&eat, "nsubj", &bill),
            EdgeRef::new(&eat, "dobj", &fish),
            EdgeRef::new(&eat, "neg", &not),
            EdgeRef::new(&likes, "nsubj", &tom),
            EdgeRef::new(&likes, "dobj", &chips),
        ];

        assert_eq!(
            forms(&extract_from_refs(&edges)),
            vec![
                ("Bill", "eat", "fish", false),
                ("Tom", "likes", "chips", false),
            ]
        );
    }

    #[test]
    fn classifies_coordinations() {
        let bill = token("Bill", "NNP");
        let tom = token("Tom", "NNP");
        let kick = token("kick", "VBP");
        let takes = token("takes", "VBZ");
        let fish = token("fish", "NN");
        let cheese = token("cheese", "NN");
        let big = token("big", "JJ");
        let fat = token("fat", "JJ");
        let quickly = token("quickly", "RB");

        let subject_edge = EdgeRef::new(&kick, "nsubj", &bill);
        let classify = |head, dependent| {
            Coordination::classify(&EdgeRef::new(head, "conj", dependent), &subject_edge)
        };

        assert_eq!(classify(&bill, &tom), Some(Coordination::Subject));
        assert_eq!(classify(&fish, &cheese), Some(Coordination::Object));
        assert_eq!(classify(&kick, &takes), Some(Coordination::Predicate));
        assert_eq!(classify(&big, &fat), Some(Coordination::Adjective));
        assert_eq!(classify(&kick, &fat), Some(Coordination::CopulaComplement));
        assert_eq!(classify(&takes, &fat), None);
        assert_eq!(classify(&fish, &takes), None);
        assert_eq!(classify(&kick, &quickly), None);
    }

    #[test]
    fn adjective_coordination_needs_copula() {
        let bill = token("Bill", "NNP");
        let big = token("big", "JJ");
        let fat = token("fat", "JJ");

        let edges = vec![
            EdgeRef::new(&big, "nsubj", &bill),
            EdgeRef::new(&big, "conj", &fat),
        ];

        assert!(extract_from_refs(&edges).is_empty());
    }

    #[test]
    fn duplicate_conj_edges_terminate() {
        let tom = token("Tom", "NNP");
        let runs = token("runs", "VBZ");
        let jumps = token("jumps", "VBZ");
        let fish = token("fish", "NN");

        let edges = vec![
            EdgeRef::new(&runs, "nsubj", &tom),
            EdgeRef::new(&runs, "conj", &jumps),
            EdgeRef::new(&runs, "conj", &jumps),
            EdgeRef::new(&jumps, "dobj", &fish),
        ];

        assert_eq!(
            forms(&extract_from_refs(&edges)),
            vec![("Tom", "jumps", "fish", false)]
        );
    }
}
