use super::Error;
use crate::error;
use crate::mach::STATEMENT_TERMINATOR;

pub const LINE_BUFFER_SIZE: usize = 80;

/// ## Script line assembly
///
/// Collects script bytes into lines. Line feeds count as carriage
/// returns and upper case is folded to lower case before storing.
/// A line longer than the buffer is discarded and reported once its
/// terminator arrives; the next line starts clean.

#[derive(Debug, Default)]
pub struct LineReader {
    buffer: Vec<u8>,
    overflowed: bool,
}

impl LineReader {
    pub fn new() -> LineReader {
        LineReader {
            buffer: Vec::with_capacity(LINE_BUFFER_SIZE),
            overflowed: false,
        }
    }

    /// Accepts one byte. Returns the completed line, without its
    /// terminator, when the byte ends a line.
    pub fn accept(&mut self, b: u8) -> Option<Result<Vec<u8>, Error>> {
        let b = match b {
            b'\n' => STATEMENT_TERMINATOR,
            _ => b.to_ascii_lowercase(),
        };
        if b == STATEMENT_TERMINATOR {
            let line = std::mem::replace(&mut self.buffer, Vec::with_capacity(LINE_BUFFER_SIZE));
            if std::mem::replace(&mut self.overflowed, false) {
                return Some(Err(error!(LineTooLong)));
            }
            return Some(Ok(line));
        }
        if self.buffer.len() == LINE_BUFFER_SIZE {
            self.overflowed = true;
        } else if !self.overflowed {
            self.buffer.push(b);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(reader: &mut LineReader, s: &str) -> Vec<Result<Vec<u8>, Error>> {
        s.bytes().filter_map(|b| reader.accept(b)).collect()
    }

    #[test]
    fn test_folds_case_and_line_feeds() {
        let mut r = LineReader::new();
        let lines = feed(&mut r, "MOVE 50\nTurn 9\r");
        assert_eq!(lines, vec![Ok(b"move 50".to_vec()), Ok(b"turn 9".to_vec())]);
    }

    #[test]
    fn test_overflow_recovers_at_terminator() {
        let mut r = LineReader::new();
        let long = "x".repeat(LINE_BUFFER_SIZE + 5);
        let lines = feed(&mut r, &format!("{}\rred\r", long));
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0].as_ref().unwrap_err().code(),
            super::super::ErrorCode::LineTooLong
        );
        assert_eq!(lines[1], Ok(b"red".to_vec()));
    }

    #[test]
    fn test_exact_fit_is_kept() {
        let mut r = LineReader::new();
        let full = "y".repeat(LINE_BUFFER_SIZE);
        let lines = feed(&mut r, &format!("{}\r", full));
        assert_eq!(lines, vec![Ok(full.into_bytes())]);
    }
}
