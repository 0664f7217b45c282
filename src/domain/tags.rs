//! Parsing and rendering of the free-text tag field.

/// Longest accepted tag name, in characters.
pub const MAX_TAG_LENGTH: usize = 50;

/// Splits a comma-separated tag field into distinct tag names.
///
/// Tokens are trimmed, empty tokens dropped and duplicates collapsed keeping
/// the first occurrence. Names are case-sensitive: `Food` and `food` are two
/// different tags.
///
/// ```
/// use blog::domain::tags::parse_tag_names;
///
/// assert_eq!(parse_tag_names("Food, Drink ,Food"), vec!["Food", "Drink"]);
/// ```
pub fn parse_tag_names(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !names.iter().any(|n| n == token) {
            names.push(token.to_string());
        }
    }

    names
}

/// Renders tag names back into the form field.
pub fn format_tag_names<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_and_whitespace() {
        assert_eq!(parse_tag_names("Food, Drink ,Food"), vec!["Food", "Drink"]);
    }

    #[test]
    fn test_case_is_preserved_and_significant() {
        assert_eq!(parse_tag_names("Food,food,FOOD"), vec!["Food", "food", "FOOD"]);
    }

    #[test]
    fn test_empty_tokens_are_dropped() {
        assert!(parse_tag_names("").is_empty());
        assert!(parse_tag_names(" , ,, ").is_empty());
        assert_eq!(parse_tag_names(",rust,"), vec!["rust"]);
    }

    #[test]
    fn test_inner_spaces_are_kept() {
        assert_eq!(parse_tag_names(" street food , tea"), vec!["street food", "tea"]);
    }

    #[test]
    fn test_format_round_trips_through_parse() {
        let rendered = format_tag_names(&["Drink", "Food"]);
        assert_eq!(rendered, "Drink, Food");
        assert_eq!(parse_tag_names(&rendered), vec!["Drink", "Food"]);
        assert_eq!(format_tag_names::<String>(&[]), "");
    }
}
