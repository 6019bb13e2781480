use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Everything that is not an ASCII letter, digit, whitespace, period or comma.
/// `\x1C-\x1F` (file/group/record/unit separators) count as whitespace.
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9\s\x1C-\x1F\.,]").expect("static pattern compiles")
});

/// Strips accents and special characters, leaving plain ASCII text.
///
/// The input is decomposed (NFD) so that accented letters become a base
/// letter plus combining marks; anything outside ASCII is then dropped, and
/// finally every character that is not `[a-zA-Z0-9]`, whitespace, `.` or `,`
/// is removed. Never fails.
pub fn clean_text(text: &str) -> String {
    let ascii: String = text.nfd().filter(char::is_ascii).collect();
    DISALLOWED.replace_all(&ascii, "").into_owned()
}
