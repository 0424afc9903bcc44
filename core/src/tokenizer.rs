use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref LINK: Regex = Regex::new(r"^link:(-?\d+)").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &["el", "la", "los", "las", "un", "una", "de", "y", "en", "que"];
        words.iter().copied().collect()
    };
}

/// Case-sensitive; callers pass already normalized words.
pub fn is_stopword(word: &str) -> bool { STOPWORDS.contains(word) }

/// Case folding is the only normalization applied to words.
pub fn normalize(token: &str) -> String { token.to_lowercase() }

/// Whitespace-delimited tokens of `text`.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Target of a `link:<id>` marker. Anything after the leading digits is ignored,
/// and a marker without digits is not a link. Targets beyond `i64` saturate.
pub fn parse_link(word: &str) -> Option<i64> {
    let caps = LINK.captures(word)?;
    let digits = &caps[1];
    let saturated = if digits.starts_with('-') { i64::MIN } else { i64::MAX };
    Some(digits.parse().unwrap_or(saturated))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_stopwords() {
        assert!(is_stopword("de"));
        assert!(is_stopword("que"));
        assert!(!is_stopword("grafo"));
        assert!(!is_stopword("De"));
    }

    #[test]
    fn link_markers() {
        assert_eq!(parse_link("link:3"), Some(3));
        assert_eq!(parse_link("link:12,"), Some(12));
        assert_eq!(parse_link("link:-1"), Some(-1));
        assert_eq!(parse_link("link:"), None);
        assert_eq!(parse_link("link:abc"), None);
        assert_eq!(parse_link("xlink:3"), None);
        assert_eq!(parse_link("link:99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_link("link:-99999999999999999999"), Some(i64::MIN));
    }
}
