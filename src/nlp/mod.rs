//! Linguistic annotation: tokens, sentences, tags, lemmas and entity spans.
//!
//! [`Annotator`] is the seam between the pipeline and whatever model does the
//! work. [`RuleModel`] is the bundled Spanish backend.

mod entities;
mod es;
mod model;
mod segment;
mod tagger;
mod tokenizer;

use std::ops::Range;

use serde::Deserialize;

use crate::error::Result;

pub use model::RuleModel;

/// Universal part-of-speech labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Space,
}

impl Pos {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
            Self::Space => "SPACE",
        }
    }
}

/// What the tokenizer matched, before any tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Number,
    Punct,
    Space,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    /// Byte offset into the document text.
    pub idx: usize,
    /// Followed by exactly one space that belongs to no token.
    pub whitespace: bool,
    pub kind: TokenKind,
    pub lemma: String,
    pub pos: Pos,
    pub is_alpha: bool,
    pub is_stop: bool,
}

impl Token {
    pub(crate) fn new(text: &str, idx: usize, kind: TokenKind) -> Self {
        Self {
            text: text.to_string(),
            idx,
            whitespace: false,
            kind,
            lemma: String::new(),
            pos: Pos::X,
            is_alpha: !text.is_empty() && text.chars().all(char::is_alphabetic),
            is_stop: false,
        }
    }

    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn end(&self) -> usize {
        self.idx + self.text.len()
    }
}

/// A named-entity mention over tokens `start..end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

/// The result of one annotation pass. Sentences partition the tokens;
/// entity spans are sub-ranges of them.
#[derive(Debug)]
pub struct Document {
    text: String,
    tokens: Vec<Token>,
    sentences: Vec<Range<usize>>,
    entities: Vec<EntitySpan>,
}

impl Document {
    pub(crate) fn new(
        text: String,
        tokens: Vec<Token>,
        sentences: Vec<Range<usize>>,
        entities: Vec<EntitySpan>,
    ) -> Self {
        debug_assert!(is_partition(&sentences, tokens.len()));
        Self {
            text,
            tokens,
            sentences,
            entities,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn sentences(&self) -> impl Iterator<Item = Sentence<'_>> {
        self.sentences.iter().map(|range| Sentence {
            doc: self,
            range: range.clone(),
        })
    }

    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        self.entities.iter().map(|span| Entity { doc: self, span })
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Text covered by tokens `range`, from the first token's start to the
    /// last token's end.
    fn span_text(&self, range: Range<usize>) -> &str {
        match (self.tokens.get(range.start), range.end.checked_sub(1)) {
            (Some(first), Some(last)) if last >= range.start => {
                &self.text[first.idx..self.tokens[last].end()]
            }
            _ => "",
        }
    }
}

fn is_partition(sentences: &[Range<usize>], token_count: usize) -> bool {
    let mut next = 0;
    for s in sentences {
        if s.start != next || s.end <= s.start {
            return false;
        }
        next = s.end;
    }
    next == token_count
}

pub struct Sentence<'a> {
    doc: &'a Document,
    range: Range<usize>,
}

impl<'a> Sentence<'a> {
    pub fn text(&self) -> &'a str {
        self.doc.span_text(self.range.clone())
    }

    pub fn tokens(&self) -> &'a [Token] {
        &self.doc.tokens[self.range.clone()]
    }
}

pub struct Entity<'a> {
    doc: &'a Document,
    span: &'a EntitySpan,
}

impl<'a> Entity<'a> {
    pub fn text(&self) -> &'a str {
        self.doc.span_text(self.span.start..self.span.end)
    }

    pub fn label(&self) -> &'a str {
        &self.span.label
    }
}

/// A model that tokenizes, lemmatizes, tags, splits sentences and finds
/// entities in a single pass.
pub trait Annotator {
    /// Longest input, in characters, `annotate` accepts.
    fn max_length(&self) -> usize;
    fn set_max_length(&mut self, max_length: usize);
    /// Fails with `LengthExceeded` when `text` is longer than `max_length`.
    fn annotate(&self, text: &str) -> Result<Document>;
}
