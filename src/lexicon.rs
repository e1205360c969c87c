use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PipelineError, Result};
use crate::nlp::Token;

/// Positive and negative word forms for sentence scoring.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

fn read_words(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path).map_err(|e| PipelineError::missing_or_io(path, e))?;
    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

impl Lexicon {
    /// Read both word lists, one entry per line. Entries are taken as
    /// written; only empty lines are skipped.
    pub fn load(positive: &Path, negative: &Path) -> Result<Self> {
        let lexicon = Self {
            positive: read_words(positive)?,
            negative: read_words(negative)?,
        };
        info!(
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    pub fn from_words<'a>(
        positive: impl IntoIterator<Item = &'a str>,
        negative: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            positive: positive.into_iter().map(str::to_string).collect(),
            negative: negative.into_iter().map(str::to_string).collect(),
        }
    }

    /// +1 for every token whose lowercase form is positive, -1 for every one
    /// that is negative. A word in both lists counts both ways.
    pub fn score(&self, tokens: &[Token]) -> i64 {
        tokens
            .iter()
            .map(|token| {
                let lower = token.lower();
                i64::from(self.positive.contains(&lower)) - i64::from(self.negative.contains(&lower))
            })
            .sum()
    }
}
