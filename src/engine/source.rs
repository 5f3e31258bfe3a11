//! Where snapshots come from.
//!
//! Digitization (camera capture, calibration, piece detection) lives
//! outside this crate. Whatever produces snapshots implements
//! `SnapshotSource` and is handed to the engine for each cycle.

use std::io::{self, BufRead};
use anyhow::{Context, Result};

use crate::core::BoardSnapshot;

pub trait SnapshotSource {
    /// Next observed snapshot, or `None` once the source is exhausted
    fn next_snapshot(&mut self) -> Result<Option<BoardSnapshot>>;
}

/// Reads one snapshot notation per line. Blank lines and lines starting
/// with `#` are skipped.
pub struct LineSource<R> {
    reader: R,
    line_num: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line_num: 0 }
    }
}

impl<R: BufRead> SnapshotSource for LineSource<R> {
    fn next_snapshot(&mut self) -> Result<Option<BoardSnapshot>> {
        let mut line = String::new();

        loop {
            line.clear();
            self.line_num += 1;
            let read = self.reader.read_line(&mut line)
                .with_context(|| format!("Failed to read line {}", self.line_num))?;
            if read == 0 {
                return Ok(None);
            }

            let notation = line.trim();
            if notation.is_empty() || notation.starts_with('#') {
                continue;
            }

            let snapshot = BoardSnapshot::from_notation(notation)
                .with_context(|| format!("Invalid snapshot on line {}", self.line_num))?;
            return Ok(Some(snapshot));
        }
    }
}

/// Whether `err` came from reading the input rather than from its contents
pub fn is_read_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<io::Error>())
}

impl SnapshotSource for std::vec::IntoIter<BoardSnapshot> {
    fn next_snapshot(&mut self) -> Result<Option<BoardSnapshot>> {
        Ok(self.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_line_source_skips_comments() {
        let input = indoc! {"
            # opening
            2/P1

            1p/2
        "};
        let mut source = LineSource::new(input.as_bytes());

        let first = source.next_snapshot().unwrap().unwrap();
        let second = source.next_snapshot().unwrap().unwrap();

        assert_eq!(first.to_notation(), "2/P1");
        assert_eq!(second.to_notation(), "1p/2");
        assert!(source.next_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_line_source_reports_line_number() {
        let mut source = LineSource::new("2/2\n2/3\n".as_bytes());

        assert!(source.next_snapshot().unwrap().is_some());
        let err = source.next_snapshot().unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert!(!is_read_error(&err));
    }

    #[test]
    fn test_unreadable_line_counts_towards_line_numbers() {
        let input: &[u8] = b"2/P1\n\xff\xfe\n2/3\n";
        let mut source = LineSource::new(input);

        assert!(source.next_snapshot().unwrap().is_some());

        let err = source.next_snapshot().unwrap_err();
        assert!(is_read_error(&err));
        assert!(err.to_string().contains("line 2"));

        let err = source.next_snapshot().unwrap_err();
        assert!(!is_read_error(&err));
        assert!(err.to_string().contains("line 3"));
    }
}
