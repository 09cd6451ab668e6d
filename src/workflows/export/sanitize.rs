/// Highest code point a Latin-1 text encoder accepts.
const LATIN1_MAX: char = '\u{ff}';

fn substitute(ch: char) -> Option<&'static str> {
    let replacement = match ch {
        '\u{2018}' | '\u{2019}' => "'",
        '\u{201c}' | '\u{201d}' => "\"",
        '\u{2013}' | '\u{2014}' => "-",
        '\u{2022}' => "*",
        '\u{2192}' => "->",
        '\u{20ac}' => "EUR",
        '\u{2026}' => "...",
        _ => return None,
    };
    Some(replacement)
}

/// Normalises text for Latin-1-only export encoders: typographic punctuation is
/// substituted, everything else outside Latin-1 (emoji included) is dropped.
pub fn clean_text(input: &str) -> String {
    let mut cleaned = String::with_capacity(input.len());
    for ch in input.chars() {
        if let Some(replacement) = substitute(ch) {
            cleaned.push_str(replacement);
        } else if ch <= LATIN1_MAX {
            cleaned.push(ch);
        }
    }
    cleaned
}
