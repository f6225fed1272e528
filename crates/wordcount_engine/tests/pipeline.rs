use std::io::{self, Cursor, Write};

use pretty_assertions::assert_eq;
use wordcount_core::RecordError;
use wordcount_engine::{run_mapper, run_reducer, PassSummary, PipelineConfig, PipelineError};

fn map_str(input: &str, config: &PipelineConfig) -> (PassSummary, String) {
    let mut out = Vec::new();
    let summary = run_mapper(Cursor::new(input), &mut out, config).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

fn reduce_str(
    input: &str,
    config: &PipelineConfig,
) -> Result<(PassSummary, String), PipelineError> {
    let mut out = Vec::new();
    let summary = run_reducer(Cursor::new(input), &mut out, config)?;
    Ok((summary, String::from_utf8(out).unwrap()))
}

#[test]
fn mapper_emits_tab_separated_ones() {
    let (summary, out) = map_str("the quick fox the\n", &PipelineConfig::default());
    assert_eq!(out, "the\t1\nquick\t1\nfox\t1\nthe\t1\n");
    assert_eq!(
        summary,
        PassSummary {
            lines_read: 1,
            records_written: 4
        }
    );
}

#[test]
fn mapper_handles_crlf_and_blank_lines() {
    let (summary, out) = map_str("a b\r\n\r\n\n  c\n", &PipelineConfig::default());
    assert_eq!(out, "a\t1\nb\t1\nc\t1\n");
    assert_eq!(summary.lines_read, 4);
}

#[test]
fn reducer_handles_crlf_input() {
    let input = "a\t1\r\na\t2\r\nb\t1\r\n";
    let (summary, out) = reduce_str(input, &PipelineConfig::default()).unwrap();
    assert_eq!(out, "a\t3\nb\t1\n");
    assert_eq!(
        summary,
        PassSummary {
            lines_read: 3,
            records_written: 2
        }
    );
}

#[test]
fn empty_input_gives_empty_output() {
    let (_, mapped) = map_str("", &PipelineConfig::default());
    assert_eq!(mapped, "");
    let (summary, reduced) = reduce_str("", &PipelineConfig::default()).unwrap();
    assert_eq!(reduced, "");
    assert_eq!(summary, PassSummary::default());
}

#[test]
fn reducer_sums_grouped_runs() {
    let input = "fox\t1\nfox\t1\nquick\t1\nthe\t1\nthe\t1\n";
    let (summary, out) = reduce_str(input, &PipelineConfig::default()).unwrap();
    assert_eq!(out, "fox\t2\nquick\t1\nthe\t2\n");
    assert_eq!(summary.records_written, 3);
}

#[test]
fn reducer_keeps_non_adjacent_runs_apart() {
    let (_, out) = reduce_str("a\t1\nb\t1\na\t1\n", &PipelineConfig::default()).unwrap();
    assert_eq!(out, "a\t1\nb\t1\na\t1\n");
}

#[test]
fn mapper_then_sort_then_reducer() {
    let config = PipelineConfig::default();
    let (_, mapped) = map_str("b a\nc a b\na\n", &config);
    let mut lines: Vec<&str> = mapped.lines().collect();
    lines.sort_unstable();
    let sorted = lines.join("\n") + "\n";

    let (_, reduced) = reduce_str(&sorted, &config).unwrap();
    assert_eq!(reduced, "a\t3\nb\t2\nc\t1\n");
}

#[test]
fn custom_separator_round_trips_through_both_passes() {
    let config = PipelineConfig { separator: ',' };
    let (_, mapped) = map_str("x x y", &config);
    assert_eq!(mapped, "x,1\nx,1\ny,1\n");
    let (_, reduced) = reduce_str(&mapped, &config).unwrap();
    assert_eq!(reduced, "x,2\ny,1\n");
}

#[test]
fn reducer_fails_fast_on_bad_count() {
    let input = "fox\t1\nfox\tmany\nthe\t1\n";
    let err = reduce_str(input, &PipelineConfig::default()).unwrap_err();
    match err {
        PipelineError::Record(RecordError::InvalidCount { line, key, count }) => {
            assert_eq!(line, 2);
            assert_eq!(key, "fox");
            assert_eq!(count, "many");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reducer_fails_fast_on_missing_separator() {
    let err = reduce_str("fox\t1\n\nthe\t1\n", &PipelineConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Record(RecordError::MissingSeparator { line: 2, .. })
    ));
}

#[test]
fn reducer_closes_run_before_failing_on_new_key() {
    let mut out = Vec::new();
    let result = run_reducer(
        Cursor::new("a\t1\nb\t1\nbroken\n"),
        &mut out,
        &PipelineConfig::default(),
    );
    assert!(matches!(
        result,
        Err(PipelineError::Record(RecordError::MissingSeparator { line: 3, .. }))
    ));
    assert_eq!(String::from_utf8(out).unwrap(), "a\t1\nb\t1\n");
}

#[test]
fn reducer_closes_run_before_bad_count_with_new_key() {
    let mut out = Vec::new();
    let result = run_reducer(
        Cursor::new("fox\t1\nfox\t1\nquick\tmany\nthe\t1\n"),
        &mut out,
        &PipelineConfig::default(),
    );
    assert!(result.is_err());
    assert_eq!(String::from_utf8(out).unwrap(), "fox\t2\n");
}

#[test]
fn reducer_drops_run_when_bad_count_shares_its_key() {
    let mut out = Vec::new();
    let result = run_reducer(
        Cursor::new("a\t1\na\tx\n"),
        &mut out,
        &PipelineConfig::default(),
    );
    assert!(result.is_err());
    assert_eq!(String::from_utf8(out).unwrap(), "");
}

#[test]
fn invalid_utf8_is_an_io_error() {
    let mut out = Vec::new();
    let err = run_mapper(
        Cursor::new(vec![b'o', b'k', b'\n', 0xff, 0xfe, b'\n']),
        &mut out,
        &PipelineConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::Io(ref e) if e.kind() == io::ErrorKind::InvalidData));
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn closed_output_is_fatal() {
    let err = run_mapper(Cursor::new("a b c\n"), BrokenPipe, &PipelineConfig::default())
        .unwrap_err();
    assert!(matches!(err, PipelineError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}
