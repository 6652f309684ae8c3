use super::STATEMENT_TERMINATOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    LineStart,
    GotR,
    Storing,
    Skipping,
}

/// What to do with one downloaded byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Download {
    Ignore,
    Store(u8),
    Finish,
    Abort,
}

/// ## Download line filter
///
/// Classifies the bytes of a program download. Lines are stored
/// verbatim except those starting with `r`, which are reserved for the
/// `RX` (finish) and `RA` (abort) markers and are never stored.

#[derive(Debug)]
pub struct Downloader {
    state: LineState,
    write_pos: usize,
    overrun: bool,
}

impl Downloader {
    pub fn new(start: usize) -> Downloader {
        Downloader {
            state: LineState::LineStart,
            write_pos: start,
            overrun: false,
        }
    }

    /// Claims the next store position for a byte.
    pub fn advance(&mut self) -> usize {
        let pos = self.write_pos;
        self.write_pos += 1;
        pos
    }

    pub fn overrun(&self) -> bool {
        self.overrun
    }

    /// Records a failed store write. Returns true only the first time.
    pub fn mark_overrun(&mut self) -> bool {
        !std::mem::replace(&mut self.overrun, true)
    }

    pub fn accept(&mut self, b: u8) -> Download {
        if (b < 32 || b > 128) && b != STATEMENT_TERMINATOR {
            return Download::Ignore;
        }
        match self.state {
            LineState::LineStart => {
                if b == b'r' || b == b'R' {
                    self.state = LineState::GotR;
                    return Download::Ignore;
                }
                self.state = LineState::Storing;
            }
            LineState::GotR => {
                return match b {
                    b'x' | b'X' => Download::Finish,
                    b'a' | b'A' => Download::Abort,
                    _ => {
                        self.state = if b == STATEMENT_TERMINATOR {
                            LineState::LineStart
                        } else {
                            LineState::Skipping
                        };
                        Download::Ignore
                    }
                };
            }
            LineState::Skipping => {
                if b == STATEMENT_TERMINATOR {
                    self.state = LineState::LineStart;
                }
                return Download::Ignore;
            }
            LineState::Storing => {}
        }
        if b == STATEMENT_TERMINATOR {
            self.state = LineState::LineStart;
        }
        Download::Store(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(d: &mut Downloader, s: &[u8]) -> (Vec<u8>, Option<Download>) {
        let mut stored = vec![];
        for b in s {
            match d.accept(*b) {
                Download::Store(b) => stored.push(b),
                Download::Ignore => {}
                end => return (stored, Some(end)),
            }
        }
        (stored, None)
    }

    #[test]
    fn test_finish() {
        let mut d = Downloader::new(20);
        assert_eq!(
            run(&mut d, b"hello\rrx\r"),
            (b"hello\r".to_vec(), Some(Download::Finish))
        );
    }

    #[test]
    fn test_abort() {
        let mut d = Downloader::new(20);
        assert_eq!(
            run(&mut d, b"PNr\rRA\r"),
            (b"PNr\r".to_vec(), Some(Download::Abort))
        );
    }

    #[test]
    fn test_other_r_lines_are_skipped() {
        let mut d = Downloader::new(20);
        assert_eq!(run(&mut d, b"RS\rMF1\r"), (b"MF1\r".to_vec(), None));
    }

    #[test]
    fn test_control_bytes_dropped() {
        let mut d = Downloader::new(20);
        assert_eq!(run(&mut d, b"P\x01N\tr\r"), (b"PNr\r".to_vec(), None));
    }

    #[test]
    fn test_overrun_reported_once() {
        let mut d = Downloader::new(0);
        assert!(d.mark_overrun());
        assert!(!d.mark_overrun());
        assert!(d.overrun());
    }
}
