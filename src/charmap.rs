/// Glyphs left behind by the report's broken font encoding, and what they
/// were supposed to be. Keys are single characters and never appear inside
/// any replacement, so one left-to-right pass gives the same result as
/// replacing each entry in turn.
///
/// Not exhaustive: an unlisted corrupted glyph passes through unchanged.
pub const CHARACTER_REPAIRS: &[(char, &str)] = &[
    ('ç', "Á"),
    ('⁄', "á"),
    ('…', "É"),
    ('”', "é"),
    ('ê', "Í"),
    ('™', "í"),
    ('î', "Ó"),
    ('Š', "ó"),
    ('ı', "ö"),
    ('ò', "Ú"),
    ('œ', "ú"),
    ('Œ', "ñ"),
    ('Ô', "‘"),
    ('Õ', "’"),
    ('¥', "• "),
    ('Ñ', "—"),
    ('¨', "®"),
    ('«', "´"),
    ('Ò', "“"),
];

fn replacement_for(c: char) -> Option<&'static str> {
    CHARACTER_REPAIRS
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, fixed)| *fixed)
}

/// Replace every known corrupted glyph in `text`.
pub fn repair(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match replacement_for(c) {
            Some(fixed) => out.push_str(fixed),
            None => out.push(c),
        }
    }
    out
}
