use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\n\x0B\x0C\r]+").expect("whitespace pattern is valid")
});

/// Entities unescaped in listing text. `&ls;` is matched as the original rule
/// spells it, not as the standard `&lt;`.
const ENTITIES: [(&str, &str); 5] = [
    ("&quot;", "\""),
    ("&ls;", "<"),
    ("&gt;", ">"),
    ("&apos;", "'"),
    ("&amp;", "&"),
];

pub fn unescape(s: &str) -> String {
    ENTITIES
        .iter()
        .fold(s.to_string(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        })
}

/// Unescapes entities, trims the ends and collapses inner whitespace runs to one space.
pub fn prettify(s: &str) -> String {
    let unescaped = unescape(s);
    let trimmed = unescaped.trim_matches(|c: char| c <= ' ');
    WHITESPACE.replace_all(trimmed, " ").into_owned()
}
