//! Canonical member names.
//!
//! Every name is folded into lower snake case before it is stored or looked up, so
//! `"FourFiveSix"`, `"four_five_six"` and `"Four_Five_six"` address the same member.

use regex::Regex;
use std::sync::LazyLock;

// An uppercase run followed by an uppercase+lowercase pair: "HTTPServer" -> "HTTP_Server".
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("acronym pattern is valid"));

// An ASCII lowercase letter or digit followed by an uppercase letter: "fourFive" -> "four_Five".
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("word pattern is valid"));

/// Converts any name-like input into its canonical lower snake case form.
///
/// The transformation is idempotent. Word boundaries are only found between ASCII letters and
/// digits; other characters are lowercased in place.
///
/// # Example
/// ```rust
/// use elemental::canonical_name;
///
/// assert_eq!(canonical_name("FourFiveSix"), "four_five_six");
/// assert_eq!(canonical_name("Four_Five_six"), "four_five_six");
/// assert_eq!(canonical_name("HTTPServer-error"), "http_server_error");
/// ```
pub fn canonical_name(input: &str) -> String {
    let split = ACRONYM_BOUNDARY.replace_all(input, "${1}_${2}");
    let split = WORD_BOUNDARY.replace_all(&split, "${1}_${2}");
    split.replace('-', "_").to_lowercase()
}

/// Derives a readable label from a canonical name: drops a trailing `_id`, turns underscores
/// into spaces and capitalizes the first letter.
pub(crate) fn humanize(canonical: &str) -> String {
    let trimmed = canonical.strip_suffix("_id").unwrap_or(canonical);
    let spaced = trimmed.replace('_', " ");

    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_is_split_into_words() {
        assert_eq!(canonical_name("FourFiveSix"), "four_five_six");
        assert_eq!(canonical_name("Honda"), "honda");
        assert_eq!(canonical_name("oh_one"), "oh_one");
    }

    #[test]
    fn mixed_forms_share_one_canonical_name() {
        let expected = canonical_name("four_five_six");
        assert_eq!(canonical_name("FourFiveSix"), expected);
        assert_eq!(canonical_name("Four_Five_six"), expected);
    }

    #[test]
    fn acronyms_and_hyphens() {
        assert_eq!(canonical_name("ActiveRecordID"), "active_record_id");
        assert_eq!(canonical_name("XMLHttpRequest"), "xml_http_request");
        assert_eq!(canonical_name("editor-approval"), "editor_approval");
        assert_eq!(canonical_name("Version2Beta"), "version2_beta");
    }

    #[test]
    fn non_ascii_is_lowercased_without_new_boundaries() {
        assert_eq!(canonical_name("ÉtéFoo"), "étéfoo");
        assert_eq!(canonical_name("ΑθήναCity"), "αθήναcity");
        assert_eq!(canonical_name("a٣B"), "a٣b");
        assert_eq!(canonical_name("café-Bar"), "café_bar");
        assert_eq!(canonical_name("StraßeXMLParser"), "straße_xml_parser");

        for name in ["ÉtéFoo", "İstanbulCity", "\u{212A}elvinScale", "ΣΟΦΙΑ"] {
            let once = canonical_name(name);
            assert_eq!(canonical_name(&once), once);
        }
    }

    #[test]
    fn humanize_strips_id_suffix() {
        assert_eq!(humanize("testing"), "Testing");
        assert_eq!(humanize("oh_one"), "Oh one");
        assert_eq!(humanize("four_five_six"), "Four five six");
        assert_eq!(humanize("what_an_id"), "What an");
        assert_eq!(humanize("your_idea"), "Your idea");
        assert_eq!(humanize(""), "");
    }
}
