//! # Keyword Matcher
//!
//! Case-insensitive any-of substring matching used to filter listing titles.

/// Returns true iff at least one keyword occurs as a case-folded substring
/// of `text`.
///
/// An empty keyword list means "no filter was requested" and callers skip
/// this check entirely, so an empty list returning false here is fine.
pub fn matches_any(text: &str, keywords: &[String]) -> bool {
    let text = text.to_lowercase();
    keywords.iter().any(|kw| text.contains(&kw.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(matches_any("Senior Python Developer", &kw(&["python"])));
        assert!(matches_any("senior python developer", &kw(&["PYTHON"])));
    }

    #[test]
    fn test_any_keyword_is_enough() {
        assert!(matches_any("Rust Engineer", &kw(&["python", "rust"])));
    }

    #[test]
    fn test_substring_match() {
        assert!(matches_any("DevOps/SRE position", &kw(&["sre"])));
    }

    #[test]
    fn test_no_match() {
        assert!(!matches_any("Marketing Manager", &kw(&["python", "rust"])));
    }

    #[test]
    fn test_empty_keywords_match_nothing() {
        assert!(!matches_any("anything", &[]));
    }
}
