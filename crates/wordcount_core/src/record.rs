use std::fmt;

use thiserror::Error;

/// Field separator used by the mapper and reducer record format.
pub const DEFAULT_SEPARATOR: char = '\t';

/// A `(key, count)` pair flowing between the mapper and the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountRecord {
    pub key: String,
    pub count: u64,
}

impl CountRecord {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }

    /// Renders the record as `key<separator>count`, without a line terminator.
    pub fn to_line(&self, separator: char) -> String {
        format!("{}{}{}", self.key, separator, self.count)
    }
}

/// Tuple style used when printing micro-batch results.
impl fmt::Display for CountRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.key, self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("line {line}: missing separator {separator:?} in {text:?}")]
    MissingSeparator {
        line: usize,
        separator: char,
        text: String,
    },
    #[error("line {line}: invalid count {count:?} for key {key:?}")]
    InvalidCount {
        line: usize,
        key: String,
        count: String,
    },
    #[error("count overflow while summing key {key:?}")]
    Overflow { key: String },
}

impl RecordError {
    /// The grouping key of the offending line. A line without a separator is
    /// its own key.
    pub fn key(&self) -> &str {
        match self {
            RecordError::MissingSeparator { text, .. } => text,
            RecordError::InvalidCount { key, .. } | RecordError::Overflow { key } => key,
        }
    }
}

/// Grouping key of a raw record line: everything before the first separator,
/// or the whole line when there is none.
pub fn record_key(text: &str, separator: char) -> &str {
    text.split_once(separator).map_or(text, |(key, _)| key)
}

/// Parses one `key<separator>count` line. `line_no` is 1-based and only used for errors.
///
/// The line is split at the first separator. The key is kept verbatim; the count
/// tolerates surrounding whitespace and must be a non-negative integer.
pub fn parse_record(
    text: &str,
    separator: char,
    line_no: usize,
) -> Result<CountRecord, RecordError> {
    let Some((key, count)) = text.split_once(separator) else {
        return Err(RecordError::MissingSeparator {
            line: line_no,
            separator,
            text: text.to_string(),
        });
    };

    let parsed = count
        .trim()
        .parse::<u64>()
        .map_err(|_| RecordError::InvalidCount {
            line: line_no,
            key: key.to_string(),
            count: count.to_string(),
        })?;

    Ok(CountRecord::new(key, parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_separator_only() {
        let record = parse_record("a\tb\t3", '\t', 1);
        // "b\t3" is not a number
        assert!(matches!(record, Err(RecordError::InvalidCount { .. })));

        let record = parse_record("key with spaces\t 12 ", '\t', 1).unwrap();
        assert_eq!(record, CountRecord::new("key with spaces", 12));
    }

    #[test]
    fn missing_separator_reports_line() {
        let err = parse_record("lonely", '\t', 7).unwrap_err();
        assert_eq!(
            err,
            RecordError::MissingSeparator {
                line: 7,
                separator: '\t',
                text: "lonely".to_string(),
            }
        );
        assert!(err.to_string().starts_with("line 7:"));
    }

    #[test]
    fn key_is_known_before_the_count_parses() {
        assert_eq!(record_key("fox\tmany", '\t'), "fox");
        assert_eq!(record_key("broken", '\t'), "broken");
        assert_eq!(parse_record("fox\tmany", '\t', 3).unwrap_err().key(), "fox");
        assert_eq!(parse_record("broken", '\t', 4).unwrap_err().key(), "broken");
    }

    #[test]
    fn negative_and_non_numeric_counts_are_rejected() {
        assert!(parse_record("a\t-1", '\t', 1).is_err());
        assert!(parse_record("a\tone", '\t', 1).is_err());
        assert!(parse_record("a\t", '\t', 1).is_err());
    }

    #[test]
    fn custom_separator() {
        let record = parse_record("fox,2", ',', 1).unwrap();
        assert_eq!(record.to_line(','), "fox,2");
        assert_eq!(record.to_string(), "(fox, 2)");
    }
}
