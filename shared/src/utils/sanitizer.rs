//! Input sanitizing shared by every value object that accepts free text

use once_cell::sync::Lazy;
use regex::Regex;

// HTML comments, complete tags and a dangling tag at the end of the input
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<[^>]*>?").unwrap()
});

/// Strip markup tags and NUL bytes, then trim surrounding whitespace
pub fn clean(input: &str) -> String {
    let without_tags = TAG_REGEX.replace_all(input, "");
    without_tags.replace('\0', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_trims_whitespace() {
        assert_eq!(clean("  john@example.com \n"), "john@example.com");
    }

    #[test]
    fn test_clean_strips_tags() {
        assert_eq!(clean("<b>Lunch</b> with <i>team</i>"), "Lunch with team");
        assert_eq!(clean("<script>alert(1)</script>Taxi"), "alert(1)Taxi");
    }

    #[test]
    fn test_clean_strips_comments_and_dangling_tags() {
        assert_eq!(clean("Hotel<!-- note --> stay"), "Hotel stay");
        assert_eq!(clean("Dinner <img src=x"), "Dinner");
    }
}
