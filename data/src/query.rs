use std::sync::LazyLock;

use regex::Regex;

/// What one submit asks the server for.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery<F> {
    Image(F),
    Text(String),
}

static COLOR_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:de\s+)?(?:colou?r(?:es)?|colorid[oa]s?)\b").expect("valid color regex")
});

fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drops generic color words ("color", "de colores", "colorido") from a query.
pub fn strip_color_phrase(text: &str) -> String {
    squash_whitespace(&COLOR_PHRASE.replace_all(text, " "))
}

/// Query sent when a refinement chip is clicked: the previous query without
/// its generic color phrase, followed by the chosen suggestion.
///
/// Best effort only. The pattern knows Spanish and English spellings.
pub fn refine_query(original: &str, suggestion: &str) -> String {
    let base = strip_color_phrase(original);
    let suggestion = squash_whitespace(suggestion);
    match (base.is_empty(), suggestion.is_empty()) {
        (true, _) => suggestion,
        (false, true) => base,
        (false, false) => format!("{base} {suggestion}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_generic_color_words() {
        assert_eq!(strip_color_phrase("camisa de color"), "camisa");
        assert_eq!(strip_color_phrase("delantal de colores lindo"), "delantal lindo");
        assert_eq!(strip_color_phrase("Gorra COLORIDA"), "Gorra");
        assert_eq!(strip_color_phrase("shirt colour"), "shirt");
    }

    #[test]
    fn keeps_words_that_only_contain_color() {
        assert_eq!(strip_color_phrase("multicolor camisa"), "multicolor camisa");
        assert_eq!(strip_color_phrase("camisa colorada"), "camisa colorada");
    }

    #[test]
    fn refinement_appends_suggestion() {
        assert_eq!(refine_query("camisa color", "azul"), "camisa azul");
        assert_eq!(refine_query("delantal", "negro"), "delantal negro");
        assert_eq!(refine_query("colores", " azul  marino "), "azul marino");
        assert_eq!(refine_query("camisa", ""), "camisa");
    }
}
