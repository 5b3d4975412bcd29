//! Triplet extraction over a document of parsed sentences.
//!
//! Each sentence is written as one line: the normalized sentence text,
//! followed by a comma and the bracketed list of its triplets.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use conllx::graph::{Node, Sentence};
use conllx::io::{ReadSentence, Reader};
use conllx::token::Token as Word;
use tracing::debug;

use crate::error::{Error, Result};
use crate::extract::extract_triplets;
use crate::graph::{sentence_to_graph, traversal_edges};
use crate::token::{DependencyEdge, Token, Triplet};

static MISSING: &'static str = "_";

static OUTPUT_EXTENSION: &'static str = "triplets.txt";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Options {
    /// Use lemmas instead of forms.
    pub lemma: bool,
    /// Use the projective heads of CoNLL-X files.
    pub projective: bool,
    /// Lowercase forms and sentence text.
    pub lowercase: bool,
    /// Write lexical-sense categories instead of tags.
    pub senses: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            lemma: false,
            projective: false,
            lowercase: true,
            senses: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    pub sentences: usize,
    pub triplets: usize,
}

pub fn word_token(word: &Word, options: &Options) -> Token {
    let form = if options.lemma {
        word.lemma().unwrap_or_else(|| word.form())
    } else {
        word.form()
    };

    let tag = word.pos().or_else(|| word.cpos()).unwrap_or(MISSING);

    if options.lowercase {
        Token::new(form.to_lowercase(), tag)
    } else {
        Token::new(form, tag)
    }
}

/// The dependency edges of a sentence, in parser traversal order.
pub fn sentence_edges(sentence: &Sentence, options: &Options) -> Vec<DependencyEdge> {
    let graph = sentence_to_graph(sentence, options.projective);
    traversal_edges(&graph)
        .into_iter()
        .map(|(head, rel, dependent)| {
            DependencyEdge::new(
                word_token(head, options),
                rel,
                word_token(dependent, options),
            )
        })
        .collect()
}

pub fn sentence_text(sentence: &Sentence, options: &Options) -> String {
    let forms: Vec<_> = sentence
        .iter()
        .filter_map(|node| match node {
            Node::Token(token) => Some(token.form()),
            Node::Root => None,
        })
        .collect();
    clean_text(&forms.join(" "), options.lowercase)
}

/// Collapse runs of whitespace to single spaces.
pub fn clean_text(text: &str, lowercase: bool) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if lowercase {
        text.to_lowercase()
    } else {
        text
    }
}

/// Output file for an input file: `doc.txt` becomes `doc.triplets.txt`.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

pub fn write_sentence<W: Write>(
    writer: &mut W,
    text: &str,
    triplets: &[Triplet],
    senses: bool,
) -> io::Result<()> {
    write!(writer, "{},[", text)?;

    for (idx, triplet) in triplets.iter().enumerate() {
        if idx > 0 {
            write!(writer, ", ")?;
        }

        if senses {
            write!(writer, "{}", triplet.senses())?;
        } else {
            write!(writer, "{}", triplet)?;
        }
    }

    writeln!(writer, "]")
}

/// Extract the triplets of every sentence read from `read`.
pub fn process<R: BufRead, W: Write>(read: R, writer: &mut W, options: &Options) -> Result<Stats> {
    let mut stats = Stats::default();

    for sentence in Reader::new(read).sentences() {
        let sentence = sentence.map_err(|err| Error::Read {
            sentence: stats.sentences + 1,
            message: err.to_string(),
        })?;
        let text = sentence_text(&sentence, options);
        let edges = sentence_edges(&sentence, options);
        let triplets = extract_triplets(&edges);

        debug!(
            "sentence {}: {} edges, {} triplets",
            stats.sentences + 1,
            edges.len(),
            triplets.len()
        );

        write_sentence(writer, &text, &triplets, options.senses)?;

        stats.sentences += 1;
        stats.triplets += triplets.len();
    }

    writer.flush()?;

    Ok(stats)
}
