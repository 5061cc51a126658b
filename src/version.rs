//! Version-string helpers. No semver parsing: only the leading digit run matters.

use once_cell::sync::OnceCell;
use regex::Regex;

fn re_major() -> &'static Regex {
    static RE_MAJOR: OnceCell<Regex> = OnceCell::new();
    RE_MAJOR.get_or_init(|| Regex::new(r"^\d+").expect("valid regex"))
}

/// Leading digit run of `version` as the major key.
/// No leading digits (or an absurdly long run) gives 0.
pub fn major_of(version: &str) -> u64 {
    re_major()
        .find(version)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .unwrap_or(0)
}
