use std::collections::HashSet;

use lazy_static::lazy_static;
use maplit::hashset;

pub static NSUBJ_RELATION: &'static str = "nsubj";

pub static DOBJ_RELATION: &'static str = "dobj";

static NEG_RELATION: &'static str = "neg";

static NMOD_RELATION: &'static str = "nmod";

static AUXPASS_RELATION: &'static str = "auxpass";

static XCOMP_RELATION: &'static str = "xcomp";

static COP_RELATION: &'static str = "cop";

static CONJ_RELATION: &'static str = "conj";

static RELCL_RELATION: &'static str = "acl:relcl";

static ADJECTIVE_TAG: &'static str = "JJ";

lazy_static! {
    static ref SUBJECT_RELATIONS: HashSet<&'static str> =
        hashset! {"nsubj", "nsubjpass", "csubj", "csubjpass", "xsubj"};
    static ref OBJECT_RELATIONS: HashSet<&'static str> = hashset! {"dobj"};
    static ref VERB_TAGS: HashSet<&'static str> =
        hashset! {"VB", "VBD", "VBG", "VBN", "VBP", "VBZ"};
    static ref NOUN_TAGS: HashSet<&'static str> = hashset! {"NN", "NNS", "NNP"};
    static ref WH_TAGS: HashSet<&'static str> = hashset! {"WDT", "WP", "WP$", "WRB"};
    static ref SENSE_NOUN_TAGS: HashSet<&'static str> = hashset! {"NN", "NNS", "NNP", "NNPS"};
}

pub fn is_subject_relation(label: &str) -> bool {
    SUBJECT_RELATIONS.contains(label)
}

pub fn is_object_relation(label: &str) -> bool {
    OBJECT_RELATIONS.contains(label)
}

pub fn is_verb_tag(tag: &str) -> bool {
    VERB_TAGS.contains(tag)
}

pub fn is_noun_tag(tag: &str) -> bool {
    NOUN_TAGS.contains(tag)
}

pub fn is_wh_tag(tag: &str) -> bool {
    WH_TAGS.contains(tag)
}

/// The part a dependency relation plays in triplet extraction.
///
/// Labels that no rule inspects classify as `Other`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Relation {
    Subject,
    Object,
    Negation,
    NominalModifier,
    PassiveAuxiliary,
    OpenComplement,
    Copula,
    Conjunct,
    RelativeClause,
    Other,
}

impl Relation {
    pub fn classify(label: &str) -> Self {
        if is_subject_relation(label) {
            Relation::Subject
        } else if is_object_relation(label) {
            Relation::Object
        } else if label == NEG_RELATION {
            Relation::Negation
        } else if label == NMOD_RELATION {
            Relation::NominalModifier
        } else if label == AUXPASS_RELATION {
            Relation::PassiveAuxiliary
        } else if label == XCOMP_RELATION {
            Relation::OpenComplement
        } else if label == COP_RELATION {
            Relation::Copula
        } else if label == CONJ_RELATION {
            Relation::Conjunct
        } else if label == RELCL_RELATION {
            Relation::RelativeClause
        } else {
            Relation::Other
        }
    }
}

/// Word classes distinguished by the extraction rules.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    WhWord,
    Other,
}

impl WordClass {
    pub fn of(tag: &str) -> Self {
        if is_noun_tag(tag) {
            WordClass::Noun
        } else if is_verb_tag(tag) {
            WordClass::Verb
        } else if tag == ADJECTIVE_TAG {
            WordClass::Adjective
        } else if is_wh_tag(tag) {
            WordClass::WhWord
        } else {
            WordClass::Other
        }
    }
}

/// Lexical-sense category of a tag, in the WordNet sense inventory.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LexicalCategory {
    Noun,
    Verb,
}

impl LexicalCategory {
    pub fn of(tag: &str) -> Option<Self> {
        if SENSE_NOUN_TAGS.contains(tag) {
            Some(LexicalCategory::Noun)
        } else if is_verb_tag(tag) {
            Some(LexicalCategory::Verb)
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        match self {
            LexicalCategory::Noun => 'n',
            LexicalCategory::Verb => 'v',
        }
    }
}
