use serde::{Deserialize, Serialize};

/// A flat dataset row with a fixed, ordered column set.
///
/// `HEADER` must list the serialized field names in declaration order; the
/// writer emits it even for an empty dataset.
pub trait Row: Serialize {
    const HEADER: &'static [&'static str];
}

// ── Token table ──────────────────────────────────────────────────────────

/// One row per token of the annotated document, punctuation and
/// whitespace tokens included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRow {
    pub text: String,
    pub text_lower: String,
    pub lemma: String,
    pub lemma_lower: String,
    pub part_of_speech: String,
    #[serde(with = "titlecase_bool")]
    pub is_alphabet: bool,
    #[serde(with = "titlecase_bool")]
    pub is_stopword: bool,
}

impl Row for TokenRow {
    const HEADER: &'static [&'static str] = &[
        "text",
        "text_lower",
        "lemma",
        "lemma_lower",
        "part_of_speech",
        "is_alphabet",
        "is_stopword",
    ];
}

// ── Entity table ─────────────────────────────────────────────────────────

/// One row per entity mention; repeated mentions are not merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRow {
    pub text: String,
    pub text_lower: String,
    pub label: String,
}

impl Row for EntityRow {
    const HEADER: &'static [&'static str] = &["text", "text_lower", "label"];
}

// ── Sentence table ───────────────────────────────────────────────────────

/// A scored sentence. `score` is a raw lexicon sum, unbounded and
/// unnormalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRow {
    pub text: String,
    pub score: i64,
}

impl Row for SentenceRow {
    const HEADER: &'static [&'static str] = &["text", "score"];
}

/// Booleans as `True`/`False`, the spelling the downstream analysis
/// compares against. Reading also accepts lowercase.
mod titlecase_bool {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &bool, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(if *value { "True" } else { "False" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(d)?;
        match raw.as_str() {
            "True" | "true" | "TRUE" => Ok(true),
            "False" | "false" | "FALSE" => Ok(false),
            other => Err(D::Error::custom(format!("not a boolean: {other}"))),
        }
    }
}
