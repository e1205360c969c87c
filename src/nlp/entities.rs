use std::ops::Range;

use super::tagger::{is_acronym, is_capitalized};
use super::{EntitySpan, RuleModel, Token, TokenKind};

/// Lower-case particles allowed inside a name when another capitalized
/// word follows: "Ciudad de México", "Secretaría de la Función Pública".
const CONNECTORS: &[&str] = &["de", "del", "la", "las", "los", "el"];

fn is_name_word(token: &Token) -> bool {
    token.kind == TokenKind::Word && is_capitalized(&token.text)
}

fn is_connector(token: &Token) -> bool {
    token.kind == TokenKind::Word && CONNECTORS.contains(&token.text.as_str())
}

/// End of the capitalized run starting at `start`, within `limit`.
fn run_end(tokens: &[Token], start: usize, limit: usize) -> usize {
    let mut end = start + 1;
    loop {
        if end < limit && is_name_word(&tokens[end]) {
            end += 1;
            continue;
        }
        let mut next = end;
        while next < limit && is_connector(&tokens[next]) {
            next += 1;
        }
        if next > end && next < limit && is_name_word(&tokens[next]) {
            end = next + 1;
            continue;
        }
        return end;
    }
}

fn label_of(tokens: &[Token], span: &str, model: &RuleModel) -> String {
    if let Some(label) = model.gazetteer.get(&span.to_lowercase()) {
        return label.clone();
    }
    let first = tokens[0].lower();
    let label = if model.org_keywords.contains(&first)
        || (tokens.len() == 1 && is_acronym(&tokens[0].text))
    {
        "ORG"
    } else if model.loc_keywords.contains(&first) {
        "LOC"
    } else if (2..=4).contains(&tokens.len()) && model.given_names.contains(&first) {
        "PER"
    } else {
        "MISC"
    };
    label.to_string()
}

/// Whether a sentence-initial capital may open a name: it needs a list
/// entry behind it.
fn opens_name(token: &Token, model: &RuleModel) -> bool {
    let lower = token.lower();
    if model.stopwords.contains(&lower) || model.closed_class.contains_key(&lower) {
        return false;
    }
    model.gazetteer.contains_key(&lower)
        || is_acronym(&token.text)
        || model.given_names.contains(&lower)
        || model.org_keywords.contains(&lower)
        || model.loc_keywords.contains(&lower)
}

/// Label a capitalized run, or reject it.
fn candidate(
    tokens: &[Token],
    run: Range<usize>,
    initial: Option<usize>,
    text: &str,
    model: &RuleModel,
) -> Option<EntitySpan> {
    let span = &text[tokens[run.start].idx..tokens[run.end - 1].end()];
    // alone, an opening capital must be a known place or an acronym
    if run.len() == 1
        && Some(run.start) == initial
        && !model.gazetteer.contains_key(&span.to_lowercase())
        && !is_acronym(span)
    {
        return None;
    }

    Some(EntitySpan {
        start: run.start,
        end: run.end,
        label: label_of(&tokens[run.clone()], span, model),
    })
}

/// Find entity mentions in document order. Every mention is reported, so a
/// name that appears three times yields three spans.
pub fn recognize(
    tokens: &[Token],
    sentences: &[Range<usize>],
    text: &str,
    model: &RuleModel,
) -> Vec<EntitySpan> {
    let mut spans = Vec::new();

    for range in sentences {
        let initial = tokens[range.clone()]
            .iter()
            .position(|t| t.kind == TokenKind::Word)
            .map(|p| range.start + p);

        let mut i = range.start;
        while i < range.end {
            if !is_name_word(&tokens[i])
                || (Some(i) == initial && !opens_name(&tokens[i], model))
            {
                i += 1;
                continue;
            }
            let end = run_end(tokens, i, range.end);
            spans.extend(candidate(tokens, i..end, initial, text, model));
            i = end;
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::super::Annotator;
    use super::*;

    fn entities(text: &str) -> Vec<(String, String)> {
        let doc = RuleModel::spanish().annotate(text).unwrap();
        doc.entities()
            .map(|e| (e.text().to_string(), e.label().to_string()))
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(t, l)| (t.to_string(), l.to_string()))
            .collect()
    }

    #[test]
    fn test_connector_inside_name() {
        assert_eq!(
            entities("Llegamos a la Ciudad de México ayer."),
            pairs(&[("Ciudad de México", "LOC")])
        );
    }

    #[test]
    fn test_initial_function_word_is_shed() {
        assert_eq!(
            entities("En la Secretaría de Educación Pública hubo cambios."),
            pairs(&[("Secretaría de Educación Pública", "ORG")])
        );
    }

    #[test]
    fn test_person_and_places() {
        assert_eq!(
            entities("El presidente Andrés Manuel López Obrador visitó Oaxaca y Puebla."),
            pairs(&[
                ("Andrés Manuel López Obrador", "PER"),
                ("Oaxaca", "LOC"),
                ("Puebla", "LOC"),
            ])
        );
    }

    #[test]
    fn test_repeated_mentions_are_kept() {
        assert_eq!(
            entities("Visitamos Chiapas. Chiapas creció. Volvimos a Chiapas."),
            pairs(&[("Chiapas", "LOC"), ("Chiapas", "LOC"), ("Chiapas", "LOC")])
        );
    }

    #[test]
    fn test_acronyms_are_organizations() {
        assert_eq!(
            entities("Crecieron el IMSS y la SEP."),
            pairs(&[("IMSS", "ORG"), ("SEP", "ORG")])
        );
    }

    #[test]
    fn test_trailing_connector_not_taken() {
        assert_eq!(
            entities("Habló el Instituto de la ciudad."),
            pairs(&[("Instituto", "ORG")])
        );
    }

    #[test]
    fn test_initial_verb_keeps_only_place() {
        assert_eq!(entities("Visitamos Oaxaca."), pairs(&[("Oaxaca", "LOC")]));
        assert_eq!(
            entities("Recorrimos Baja California Sur."),
            pairs(&[("Baja California Sur", "LOC")])
        );
    }

    #[test]
    fn test_initial_known_word_opens_name() {
        assert_eq!(
            entities("Andrés Manuel López Obrador inauguró la obra."),
            pairs(&[("Andrés Manuel López Obrador", "PER")])
        );
        assert_eq!(
            entities("Secretaría de Salud informó."),
            pairs(&[("Secretaría de Salud", "ORG")])
        );
        assert_eq!(
            entities("México y Guatemala firmaron."),
            pairs(&[("México", "LOC"), ("Guatemala", "LOC")])
        );
    }

    #[test]
    fn test_initial_given_name_alone_dropped() {
        assert!(entities("Andrés llegó tarde.").is_empty());
    }

    #[test]
    fn test_unknown_run_is_misc() {
        assert_eq!(
            entities("Se entregaron apoyos de Sembrando Vida."),
            pairs(&[("Sembrando Vida", "MISC")])
        );
    }

    #[test]
    fn test_lone_initial_capital_dropped() {
        assert!(entities("Mañana llueve.").is_empty());
        assert!(entities("").is_empty());
    }

    #[test]
    fn test_punctuation_breaks_run() {
        assert_eq!(
            entities("Estados visitados: Sonora, Sinaloa."),
            pairs(&[("Sonora", "LOC"), ("Sinaloa", "LOC")])
        );
    }
}
