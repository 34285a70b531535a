// rowgrade-core/src/domain/validation/delimited.rs

/// Separates materials and steps.
pub const ITEM_DELIMITER: char = ';';
/// Separates skills and hashtags.
pub const TAG_DELIMITER: char = ',';

/// Splits a delimited cell into trimmed, non-empty segments.
///
/// A cell without the delimiter is a single segment when non-empty, so
/// "Crayons" counts as one item and "" as none.
pub fn parse_delimited_list(value: &str, delimiter: char) -> Vec<&str> {
    value
        .split(delimiter)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}
