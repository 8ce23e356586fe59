//! String utility functions for common text manipulation operations.

/// Capitalize the first letter of a word
///
/// Converts the first character to uppercase and leaves the rest unchanged.
/// Returns an empty string if the input is empty.
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a kebab-case name to PascalCase
///
/// Each `-`-separated word is capitalized and the words are joined.
/// Empty words (leading, trailing or doubled dashes) are dropped.
///
/// ```text
/// hero-section -> HeroSection
/// footer       -> Footer
/// ```
pub fn to_pascal_case(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize_word)
        .collect()
}

/// Pluralize a noun for a count (`1 file`, `2 files`)
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
