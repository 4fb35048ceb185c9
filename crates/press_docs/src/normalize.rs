//! Typographic punctuation to ASCII.
//!
//! The PDF writer only speaks a single-byte encoding, so curly quotes, long
//! dashes and friends are folded to plain ASCII before layout.

/// Characters rewritten by [`to_ascii`] and their replacements.
///
/// No replacement contains a key, which makes the rewrite idempotent.
pub const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "-"),   // em dash
    ('\u{201C}', "\""),  // left double quotation mark
    ('\u{201D}', "\""),  // right double quotation mark
    ('\u{2018}', "'"),   // left single quotation mark
    ('\u{2019}', "'"),   // right single quotation mark
    ('\u{2026}', "..."), // horizontal ellipsis
    ('\u{00A0}', " "),   // no-break space
];

fn replacement(c: char) -> Option<&'static str> {
    REPLACEMENTS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Rewrite every character listed in [`REPLACEMENTS`] in a single pass.
///
/// All other characters, including other non-ASCII ones, pass through.
pub fn to_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match replacement(c) {
            Some(to) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

/// True when `text` contains none of the characters [`to_ascii`] rewrites.
pub fn is_normalized(text: &str) -> bool {
    !text.chars().any(|c| replacement(c).is_some())
}
