use std::fmt;

use crate::classify::{LexicalCategory, Relation, WordClass};

/// A word with its part-of-speech tag.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Token {
    form: String,
    tag: String,
}

impl Token {
    pub fn new(form: impl Into<String>, tag: impl Into<String>) -> Self {
        Token {
            form: form.into(),
            tag: tag.into(),
        }
    }

    pub fn form(&self) -> &str {
        &self.form
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn word_class(&self) -> WordClass {
        WordClass::of(&self.tag)
    }

    /// Render as `(form, n)`, `(form, v)` or `(form, _)`.
    pub fn sense(&self) -> Sense<'_> {
        Sense(self)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.form, self.tag)
    }
}

pub struct Sense<'a>(&'a Token);

impl<'a> fmt::Display for Sense<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match LexicalCategory::of(self.0.tag()) {
            Some(category) => write!(f, "({}, {})", self.0.form(), category.as_char()),
            None => write!(f, "({}, _)", self.0.form()),
        }
    }
}

/// A labeled relation between a head and a dependent, as produced by
/// the dependency parser.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DependencyEdge {
    head: Token,
    relation: String,
    dependent: Token,
}

impl DependencyEdge {
    pub fn new(head: Token, relation: impl Into<String>, dependent: Token) -> Self {
        DependencyEdge {
            head,
            relation: relation.into(),
            dependent,
        }
    }

    pub fn head(&self) -> &Token {
        &self.head
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn dependent(&self) -> &Token {
        &self.dependent
    }

    pub fn view(&self) -> EdgeRef<'_> {
        EdgeRef::new(&self.head, &self.relation, &self.dependent)
    }
}

/// Borrowed view of a dependency edge.
///
/// Rewritten edge sequences mix views of parser edges with edges made up
/// during extraction, all pointing into the tokens of the input parse.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EdgeRef<'a> {
    pub head: &'a Token,
    pub label: &'a str,
    pub dependent: &'a Token,
}

impl<'a> EdgeRef<'a> {
    pub fn new(head: &'a Token, label: &'a str, dependent: &'a Token) -> Self {
        EdgeRef {
            head,
            label,
            dependent,
        }
    }

    pub fn relation(&self) -> Relation {
        Relation::classify(self.label)
    }
}

impl<'a> From<&'a DependencyEdge> for EdgeRef<'a> {
    fn from(edge: &'a DependencyEdge) -> Self {
        edge.view()
    }
}

/// Subject, predicate and complement of a clause, with its negation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Triplet<'a> {
    pub subject: &'a Token,
    pub predicate: &'a Token,
    pub complement: &'a Token,
    pub negated: bool,
}

impl<'a> Triplet<'a> {
    pub fn new(
        subject: &'a Token,
        predicate: &'a Token,
        complement: &'a Token,
        negated: bool,
    ) -> Self {
        Triplet {
            subject,
            predicate,
            complement,
            negated,
        }
    }

    /// Render the tokens with their lexical-sense categories instead of tags.
    pub fn senses(&self) -> TripletSenses<'_, 'a> {
        TripletSenses(self)
    }
}

impl<'a> fmt::Display for Triplet<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.subject, self.predicate, self.complement, self.negated
        )
    }
}

pub struct TripletSenses<'t, 'a>(&'t Triplet<'a>);

impl<'t, 'a> fmt::Display for TripletSenses<'t, 'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let triplet = self.0;
        write!(
            f,
            "({}, {}, {}, {})",
            triplet.subject.sense(),
            triplet.predicate.sense(),
            triplet.complement.sense(),
            triplet.negated
        )
    }
}
