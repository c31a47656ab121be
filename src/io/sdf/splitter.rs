use std::io;

use log::debug;

const TERMINATOR: &str = "$$$$";

/// Returns `true` for a record-terminator line (`$$$$...`).
#[inline]
pub fn is_terminator(line: &str) -> bool {
    line.starts_with(TERMINATOR)
}

/// The lines of one molecule, terminator line included as the last entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based position in the whole stream, skipped chunks included.
    pub occurrence: usize,
    pub lines: Vec<String>,
}

/// Splits a line stream into terminator-delimited molecule chunks.
///
/// The first `skip` complete chunks are consumed without being buffered.
/// At most `limit` chunks are produced afterwards (`0` = no limit). Lines
/// after the last terminator never form a chunk. An I/O error is yielded
/// once and ends the iteration.
pub struct RecordSplitter<I> {
    lines: I,
    skip: usize,
    limit: usize,
    seen: usize,
    emitted: usize,
    done: bool,
}

impl<I> RecordSplitter<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I, skip: usize, limit: usize) -> Self {
        Self {
            lines,
            skip,
            limit,
            seen: 0,
            emitted: 0,
            done: false,
        }
    }

    fn skip_leading(&mut self) -> io::Result<()> {
        while self.seen < self.skip {
            match self.lines.next() {
                Some(line) => {
                    if is_terminator(&line?) {
                        self.seen += 1;
                    }
                }
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if self.seen > 0 {
            debug!("skipped {} leading molecule block(s)", self.seen);
        }
        Ok(())
    }

    fn next_chunk(&mut self) -> io::Result<Option<Chunk>> {
        if self.seen < self.skip {
            self.skip_leading()?;
        }

        let mut lines = Vec::new();
        for line in self.lines.by_ref() {
            let line = line?;
            let end = is_terminator(&line);
            lines.push(line);
            if end {
                self.seen += 1;
                return Ok(Some(Chunk {
                    occurrence: self.seen,
                    lines,
                }));
            }
        }

        if !lines.is_empty() {
            debug!(
                "discarding {} trailing line(s) without a terminator",
                lines.len()
            );
        }
        Ok(None)
    }
}

impl<I> Iterator for RecordSplitter<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || (self.limit != 0 && self.emitted >= self.limit) {
            return None;
        }

        match self.next_chunk() {
            Ok(Some(chunk)) => {
                self.emitted += 1;
                Some(Ok(chunk))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> impl Iterator<Item = io::Result<String>> + '_ {
        text.lines().map(|l| Ok(l.to_string()))
    }

    const THREE: &str = "a\n$$$$\nb\nb2\n$$$$\nc\n$$$$\n";

    #[test]
    fn splits_on_terminators_and_keeps_them() {
        let chunks: Vec<Chunk> = RecordSplitter::new(lines(THREE), 0, 0)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].occurrence, 2);
        assert_eq!(chunks[1].lines, vec!["b", "b2", "$$$$"]);
    }

    #[test]
    fn terminator_match_is_prefix_only() {
        assert!(is_terminator("$$$$"));
        assert!(is_terminator("$$$$ trailing"));
        assert!(!is_terminator(" $$$$"));
        assert!(!is_terminator("$$$"));
    }

    #[test]
    fn skip_offsets_occurrence_index() {
        let chunks: Vec<Chunk> = RecordSplitter::new(lines(THREE), 2, 0)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].occurrence, 3);
        assert_eq!(chunks[0].lines, vec!["c", "$$$$"]);
    }

    #[test]
    fn limit_stops_early() {
        let chunks: Vec<Chunk> = RecordSplitter::new(lines(THREE), 0, 2)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(chunks.iter().map(|c| c.occurrence).collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn skip_beyond_end_yields_nothing() {
        let mut splitter = RecordSplitter::new(lines(THREE), 10, 0);
        assert!(splitter.next().is_none());
    }

    #[test]
    fn unterminated_tail_is_dropped() {
        let chunks: Vec<Chunk> = RecordSplitter::new(lines("a\n$$$$\nhalf\nblock\n"), 0, 0)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn io_error_is_yielded_once() {
        let source = vec![
            Ok("a".to_string()),
            Err(io::Error::other("broken pipe")),
            Ok("$$$$".to_string()),
        ];
        let mut splitter = RecordSplitter::new(source.into_iter(), 0, 0);
        assert!(splitter.next().unwrap().is_err());
        assert!(splitter.next().is_none());
    }
}
