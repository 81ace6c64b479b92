use std::sync::OnceLock;

use regex::Regex;

fn uri_pattern() -> &'static Regex {
    static URI: OnceLock<Regex> = OnceLock::new();
    URI.get_or_init(|| Regex::new(r"(?i)^(?:/[a-z0-9\-_]+)+$").expect("uri pattern is valid"))
}

fn kebab_pattern() -> &'static Regex {
    static KEBAB: OnceLock<Regex> = OnceLock::new();
    KEBAB.get_or_init(|| Regex::new(r"^[a-z0-9-]+$").expect("kebab pattern is valid"))
}

/// Whether `input` is a rooted path of word segments, like
/// `/some/v4lu3s-go/here`. Letters match in either case.
pub fn is_string_uri(input: &str, allow_empty: bool) -> bool {
    if input.is_empty() {
        return allow_empty;
    }
    uri_pattern().is_match(input)
}

/// Whether `input` is lowercase kebab-case: `a-z`, digits and dashes.
pub fn is_string_kebab(input: &str, allow_empty: bool) -> bool {
    if input.is_empty() {
        return allow_empty;
    }
    kebab_pattern().is_match(input)
}
