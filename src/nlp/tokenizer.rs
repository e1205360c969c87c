use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::{Token, TokenKind};

// Words start with a letter; numbers keep their internal separators
// ("1,250.5"); a run of dots is one ellipsis; anything else non-blank is a
// token on its own.
static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<word>[\p{L}\p{M}][\p{L}\p{M}\p{N}_]*)|(?P<num>\p{N}+(?:[.,]\p{N}+)*)|\.{2,}|\S",
    )
    .unwrap()
});

/// Split `text` into tokens. Every non-whitespace character lands in exactly
/// one token.
pub fn tokenize(text: &str, abbreviations: &HashSet<String>) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut pos = 0;

    while let Some(caps) = RE_TOKEN.captures_at(text, pos) {
        let Some(m) = caps.get(0) else { break };
        push_gap(&mut tokens, &text[pos..m.start()], pos);

        let kind = if caps.name("word").is_some() {
            TokenKind::Word
        } else if caps.name("num").is_some() {
            TokenKind::Number
        } else {
            TokenKind::Punct
        };

        let mut end = m.end();
        if kind == TokenKind::Word
            && text[end..].starts_with('.')
            && abbreviations.contains(&format!("{}.", m.as_str().to_lowercase()))
        {
            end += 1;
        }

        tokens.push(Token::new(&text[m.start()..end], m.start(), kind));
        pos = end;
    }
    push_gap(&mut tokens, &text[pos..], pos);

    tokens
}

/// Whitespace between tokens. One leading space is absorbed by the previous
/// token; whatever is left becomes a SPACE token.
fn push_gap(tokens: &mut Vec<Token>, gap: &str, offset: usize) {
    if gap.is_empty() {
        return;
    }
    let (rest, rest_offset) = match tokens.last_mut() {
        Some(last) if gap.starts_with(' ') => {
            last.whitespace = true;
            (&gap[1..], offset + 1)
        }
        _ => (gap, offset),
    };
    if !rest.is_empty() {
        tokens.push(Token::new(rest, rest_offset, TokenKind::Space));
    }
}
