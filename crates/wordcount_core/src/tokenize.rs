use crate::CountRecord;

/// Whitespace-delimited tokens of one line, left to right.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> + '_ {
    line.split_whitespace()
}

/// Pairs every token of `line` with a count of one.
pub fn emit_counts(line: &str) -> impl Iterator<Item = CountRecord> + '_ {
    tokens(line).map(|token| CountRecord::new(token, 1))
}
