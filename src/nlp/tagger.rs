use std::ops::Range;

use super::{Pos, RuleModel, Token, TokenKind};

const SYMBOLS: &[char] = &[
    '$', '%', '§', '©', '®', '°', '+', '<', '=', '>', '|', '~', '¢', '£', '€', '#', '&', '*',
    '^', '@',
];

const ADV_SUFFIXES: &[&str] = &["mente"];

const NOUN_SUFFIXES: &[&str] = &[
    "ciones", "siones", "ción", "sión", "dades", "dad", "mientos", "miento", "ismos", "ismo",
    "encias", "encia", "ancias", "ancia", "eza", "ajes", "aje", "tud",
];

// suffix → infinitive ending, longest first within each family
const VERB_SUFFIXES: &[(&str, &str)] = &[
    ("ando", "ar"),
    ("iendo", "er"),
    ("yendo", "ir"),
    ("ieron", "er"),
    ("aron", "ar"),
    ("aban", "ar"),
    ("aba", "ar"),
    ("amos", "ar"),
    ("emos", "er"),
    ("ados", "ar"),
    ("adas", "ar"),
    ("ado", "ar"),
    ("ada", "ar"),
    ("idos", "ir"),
    ("idas", "ir"),
    ("ido", "ir"),
    ("ida", "ir"),
];

const ADJ_SUFFIXES: &[&str] = &[
    "osos", "osas", "oso", "osa", "ivos", "ivas", "ivo", "iva", "bles", "ble", "icos", "icas",
    "ico", "ica", "ales", "al", "arios", "arias", "ario", "aria",
];

const FEMININE_ADJ_ENDINGS: &[&str] = &["osa", "iva", "ica", "aria"];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'á', 'é', 'í', 'ó', 'ú'];

/// Ends with `suffix` and keeps at least two characters of stem.
fn has_suffix(word: &str, suffix: &str) -> bool {
    word.ends_with(suffix) && word.chars().count() >= suffix.chars().count() + 2
}

pub(super) fn is_capitalized(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

/// Two to six letters, all upper case: "IMSS", "SEP".
pub(super) fn is_acronym(text: &str) -> bool {
    let n = text.chars().count();
    (2..=6).contains(&n) && text.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

fn is_infinitive(word: &str, model: &RuleModel) -> bool {
    (has_suffix(word, "ar") || has_suffix(word, "er") || has_suffix(word, "ir"))
        && !model.not_infinitives.contains(word)
}

fn suffix_pos(lower: &str, model: &RuleModel) -> Pos {
    if ADV_SUFFIXES.iter().any(|s| has_suffix(lower, s)) {
        return Pos::Adv;
    }
    if NOUN_SUFFIXES.iter().any(|s| has_suffix(lower, s)) {
        return Pos::Noun;
    }
    if is_infinitive(lower, model) || VERB_SUFFIXES.iter().any(|(s, _)| has_suffix(lower, s)) {
        return Pos::Verb;
    }
    if ADJ_SUFFIXES.iter().any(|s| has_suffix(lower, s)) {
        return Pos::Adj;
    }
    Pos::Noun
}

fn pos_of(token: &Token, lower: &str, initial: bool, model: &RuleModel) -> Pos {
    match token.kind {
        TokenKind::Space => return Pos::Space,
        TokenKind::Number => return Pos::Num,
        TokenKind::Punct => {
            return if token.text.chars().all(|c| SYMBOLS.contains(&c)) {
                Pos::Sym
            } else {
                Pos::Punct
            };
        }
        TokenKind::Word => {}
    }

    if let Some(pos) = model.closed_class.get(lower) {
        return *pos;
    }
    if is_acronym(&token.text) {
        return Pos::Propn;
    }
    // a capital at the start of a sentence says nothing on its own
    if is_capitalized(&token.text)
        && (!initial || model.gazetteer.contains_key(lower) || model.given_names.contains(lower))
    {
        return Pos::Propn;
    }
    suffix_pos(lower, model)
}

/// Plural to singular: "ciudades" → "ciudad", "madres" → "madre",
/// "veces" → "vez".
fn singular(word: &str) -> String {
    for (plural, single) in [("ciones", "ción"), ("siones", "sión")] {
        if let Some(stem) = word.strip_suffix(plural) {
            return format!("{stem}{single}");
        }
    }
    if word.chars().count() <= 3 || word.ends_with("is") || word.ends_with("us") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ces") {
        return format!("{stem}z");
    }
    if let Some(stem) = word.strip_suffix("es") {
        let mut rev = stem.chars().rev();
        if let (Some(last), Some(before)) = (rev.next(), rev.next())
            && ['l', 'r', 'n', 'd', 'j', 'y'].contains(&last)
            && VOWELS.contains(&before)
        {
            return stem.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix('s')
        && stem.ends_with(VOWELS)
    {
        return stem.to_string();
    }
    word.to_string()
}

fn masculine(word: &str) -> String {
    if FEMININE_ADJ_ENDINGS.iter().any(|e| word.ends_with(e))
        && let Some(stem) = word.strip_suffix('a')
    {
        return format!("{stem}o");
    }
    word.to_string()
}

fn verb_lemma(word: &str) -> String {
    for (suffix, ending) in VERB_SUFFIXES {
        if has_suffix(word, suffix)
            && let Some(stem) = word.strip_suffix(suffix)
        {
            return format!("{stem}{ending}");
        }
    }
    word.to_string()
}

fn lemma_of(token: &Token, lower: &str, pos: Pos, model: &RuleModel) -> String {
    if let Some(lemma) = model.lemmas.get(lower) {
        return lemma.clone();
    }
    match pos {
        Pos::Propn | Pos::Punct | Pos::Sym | Pos::Num | Pos::Space | Pos::X => token.text.clone(),
        Pos::Noun => singular(lower),
        Pos::Adj => masculine(&singular(lower)),
        Pos::Verb => verb_lemma(lower),
        _ => lower.to_string(),
    }
}

/// Fill in tag, lemma and stop-word flag for every token.
pub fn tag(tokens: &mut [Token], sentences: &[Range<usize>], model: &RuleModel) {
    for range in sentences {
        let initial = tokens[range.clone()]
            .iter()
            .position(|t| t.kind == TokenKind::Word)
            .map(|p| range.start + p);

        for i in range.clone() {
            let lower = tokens[i].lower();
            let pos = pos_of(&tokens[i], &lower, Some(i) == initial, model);
            let lemma = lemma_of(&tokens[i], &lower, pos, model);
            let token = &mut tokens[i];
            token.is_stop = model.stopwords.contains(&lower);
            token.pos = pos;
            token.lemma = lemma;
        }
    }
}
