use std::sync::OnceLock;

use regex_lite::Regex;

/// Returned when the input has nothing usable left in it.
pub const FALLBACK_NAME: &str = "empty";

/// Characters that are never allowed in a path segment, plus the space.
fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[<>:"/\\|?* ]"#).expect("valid character class"))
}

/// Turn an arbitrary string into a name that is safe to use as a single
/// directory or file name.
///
/// Forbidden characters and spaces become `_`, leading dots are dropped and
/// a trailing dot becomes `_`. Substitution happens before the dot rules, so
/// `" .name."` yields `"_.name_"`. Never fails and never returns an empty
/// string.
pub fn safe_name(raw: &str) -> String {
    if raw.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    let replaced = unsafe_chars().replace_all(raw, "_");
    let mut name = replaced.trim_start_matches('.').to_string();

    if name.ends_with('.') {
        name.pop();
        name.push('_');
    }

    if name.is_empty() {
        return FALLBACK_NAME.to_string();
    }
    name
}

/// Whether `safe_name` would leave `raw` untouched.
pub fn is_safe_name(raw: &str) -> bool {
    !raw.is_empty() && safe_name(raw) == raw
}
