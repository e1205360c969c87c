use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::{Annotator, Document, Pos, entities, es, segment, tagger, tokenizer};
use crate::error::{PipelineError, Result};

/// Extra vocabulary layered over the built-in Spanish tables, read from a
/// JSON file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModelSpec {
    pub stopwords: Vec<String>,
    pub lemmas: HashMap<String, String>,
    pub closed_class: HashMap<String, Pos>,
    pub abbreviations: Vec<String>,
    pub not_infinitives: Vec<String>,
    pub gazetteer: HashMap<String, String>,
    pub given_names: Vec<String>,
    pub org_keywords: Vec<String>,
    pub loc_keywords: Vec<String>,
}

/// Deterministic Spanish annotator built from word lists and suffix rules.
/// Holds no state between calls to `annotate`.
#[derive(Debug, Clone)]
pub struct RuleModel {
    pub(super) stopwords: HashSet<String>,
    pub(super) lemmas: HashMap<String, String>,
    pub(super) closed_class: HashMap<String, Pos>,
    pub(super) abbreviations: HashSet<String>,
    pub(super) not_infinitives: HashSet<String>,
    pub(super) gazetteer: HashMap<String, String>,
    pub(super) given_names: HashSet<String>,
    pub(super) org_keywords: HashSet<String>,
    pub(super) loc_keywords: HashSet<String>,
    max_length: usize,
}

fn lowered<'a>(words: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    words.into_iter().map(str::to_lowercase).collect()
}

fn extend_lowered(set: &mut HashSet<String>, words: Vec<String>) {
    set.extend(words.into_iter().map(|w| w.to_lowercase()));
}

impl RuleModel {
    pub const DEFAULT_MAX_LENGTH: usize = 1_000_000;

    /// The built-in Spanish model.
    pub fn spanish() -> Self {
        Self {
            stopwords: lowered(es::STOPWORDS.iter().copied()),
            lemmas: es::LEMMAS
                .iter()
                .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
                .collect(),
            closed_class: es::CLOSED_CLASS
                .iter()
                .map(|(form, pos)| (form.to_string(), *pos))
                .collect(),
            abbreviations: lowered(es::ABBREVIATIONS.iter().copied()),
            not_infinitives: lowered(es::NOT_INFINITIVES.iter().copied()),
            gazetteer: es::GAZETTEER
                .iter()
                .map(|(name, label)| (name.to_string(), label.to_string()))
                .collect(),
            given_names: lowered(es::GIVEN_NAMES.iter().copied()),
            org_keywords: lowered(es::ORG_KEYWORDS.iter().copied()),
            loc_keywords: lowered(es::LOC_KEYWORDS.iter().copied()),
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }

    /// The built-in model, extended with `path` when given. A missing file
    /// is a `ResourceNotFound` error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut model = Self::spanish();
        if let Some(path) = path {
            let json =
                fs::read_to_string(path).map_err(|e| PipelineError::missing_or_io(path, e))?;
            let spec: ModelSpec =
                serde_json::from_str(&json).map_err(|source| PipelineError::ModelFormat {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!("extending rule model from {}", path.display());
            model.extend(spec);
        }
        Ok(model)
    }

    pub fn extend(&mut self, spec: ModelSpec) {
        extend_lowered(&mut self.stopwords, spec.stopwords);
        self.lemmas.extend(
            spec.lemmas
                .into_iter()
                .map(|(form, lemma)| (form.to_lowercase(), lemma)),
        );
        self.closed_class.extend(
            spec.closed_class
                .into_iter()
                .map(|(form, pos)| (form.to_lowercase(), pos)),
        );
        extend_lowered(&mut self.abbreviations, spec.abbreviations);
        extend_lowered(&mut self.not_infinitives, spec.not_infinitives);
        self.gazetteer.extend(
            spec.gazetteer
                .into_iter()
                .map(|(name, label)| (name.to_lowercase(), label)),
        );
        extend_lowered(&mut self.given_names, spec.given_names);
        extend_lowered(&mut self.org_keywords, spec.org_keywords);
        extend_lowered(&mut self.loc_keywords, spec.loc_keywords);
    }
}

impl Annotator for RuleModel {
    fn max_length(&self) -> usize {
        self.max_length
    }

    fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
    }

    fn annotate(&self, text: &str) -> Result<Document> {
        let length = text.chars().count();
        if length > self.max_length {
            return Err(PipelineError::LengthExceeded {
                length,
                max_length: self.max_length,
            });
        }

        let mut tokens = tokenizer::tokenize(text, &self.abbreviations);
        let sentences = segment::segment(&tokens);
        tagger::tag(&mut tokens, &sentences, self);
        let entities = entities::recognize(&tokens, &sentences, text, self);
        debug!(
            tokens = tokens.len(),
            sentences = sentences.len(),
            entities = entities.len(),
            "annotated"
        );

        Ok(Document::new(text.to_string(), tokens, sentences, entities))
    }
}
