//! The three tabular projections of an annotated document.

use feature_types::{EntityRow, SentenceRow, TokenRow};

use crate::lexicon::Lexicon;
use crate::nlp::Document;

/// Sentences this short (in characters) are layout debris, not prose.
pub const MIN_SENTENCE_CHARS: usize = 10;

/// One row per token, punctuation and whitespace included.
pub fn token_rows(doc: &Document) -> Vec<TokenRow> {
    doc.tokens()
        .iter()
        .map(|t| TokenRow {
            text: t.text.clone(),
            text_lower: t.lower(),
            lemma: t.lemma.clone(),
            lemma_lower: t.lemma.to_lowercase(),
            part_of_speech: t.pos.as_str().to_string(),
            is_alphabet: t.is_alpha,
            is_stopword: t.is_stop,
        })
        .collect()
}

/// One row per entity mention. Repeats are not merged.
pub fn entity_rows(doc: &Document) -> Vec<EntityRow> {
    doc.entities()
        .map(|e| EntityRow {
            text: e.text().to_string(),
            text_lower: e.text().to_lowercase(),
            label: e.label().to_string(),
        })
        .collect()
}

pub fn sentence_rows(doc: &Document, lexicon: &Lexicon) -> Vec<SentenceRow> {
    doc.sentences()
        .filter(|s| s.text().chars().count() > MIN_SENTENCE_CHARS)
        .map(|s| SentenceRow {
            text: s.text().to_string(),
            score: lexicon.score(s.tokens()),
        })
        .collect()
}

/// All three projections, taken from the same document.
#[derive(Debug)]
pub struct Features {
    pub tokens: Vec<TokenRow>,
    pub entities: Vec<EntityRow>,
    pub sentences: Vec<SentenceRow>,
}

impl Features {
    pub fn project(doc: &Document, lexicon: &Lexicon) -> Self {
        Self {
            tokens: token_rows(doc),
            entities: entity_rows(doc),
            sentences: sentence_rows(doc, lexicon),
        }
    }
}
