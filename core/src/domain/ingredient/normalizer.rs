/// Splits raw ingredient text into trimmed, non-empty names.
///
/// Commas, semicolons and newlines separate names. Order and duplicates are kept.
pub fn normalize(text: &str) -> Vec<String> {
    text.split([',', ';', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
