use std::ops::Range;

use super::{Token, TokenKind};

const TERMINALS: &[&str] = &[".", "!", "?", "…"];
const CLOSERS: &[&str] = &["\"", "”", "’", "'", ")", "]", "}", "»"];
const BULLETS: &[&str] = &["•"];

/// Abbreviations that usually end a sentence when a capital follows.
const FINAL_ABBREVIATIONS: &[&str] = &["etc."];

fn is_terminal(tokens: &[Token], i: usize) -> bool {
    let t = &tokens[i];
    if t.kind == TokenKind::Punct {
        return TERMINALS.contains(&t.text.as_str()) || t.text.starts_with("..");
    }
    if t.kind == TokenKind::Word && FINAL_ABBREVIATIONS.contains(&t.lower().as_str()) {
        return tokens[i + 1..]
            .iter()
            .find(|n| n.kind != TokenKind::Space)
            .is_some_and(|n| n.text.chars().next().is_some_and(char::is_uppercase));
    }
    false
}

fn is_closer(t: &Token) -> bool {
    t.kind == TokenKind::Punct && CLOSERS.contains(&t.text.as_str())
}

/// Group tokens into sentences. The ranges are contiguous, non-empty and
/// cover every token.
///
/// A sentence ends after terminal punctuation, taking along any further
/// terminals, closing quotes or brackets, and whitespace tokens that follow.
/// A bullet always opens a new sentence.
pub fn segment(tokens: &[Token]) -> Vec<Range<usize>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < tokens.len() {
        if BULLETS.contains(&tokens[i].text.as_str()) && i > start {
            sentences.push(start..i);
            start = i;
        }

        if is_terminal(tokens, i) {
            let mut end = i + 1;
            while end < tokens.len()
                && (is_closer(&tokens[end])
                    || tokens[end].kind == TokenKind::Space
                    || is_terminal(tokens, end))
            {
                end += 1;
            }
            sentences.push(start..end);
            start = end;
            i = end;
            continue;
        }

        i += 1;
    }

    if start < tokens.len() {
        sentences.push(start..tokens.len());
    }
    sentences
}
