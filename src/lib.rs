//!A small library to read text files by their lines, turning every failure into a logged
//!"no result" value instead of an error the caller has to handle.

/// Line splitting on top of any std::io::BufRead
pub mod bufreader;
pub mod error;
/// A wrapper around std::fs::File which implements ReadByLine
pub mod file;
/// The file reader handing out absence values on failure
pub mod reader;
/// Lazy, echoing line streams
pub mod stream;

pub use file::File;
pub use reader::TextFileReader;
pub use stream::StreamLines;

use regex::Regex;

pub type Result<T> = std::result::Result<T, error::Error>;

/// The separator used to join lines back into a single text block.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// The separator used to join lines back into a single text block.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// A trait defining behavior for reading text sequentially, line by line. Every method continues
/// from wherever the previous one stopped.
pub trait ReadByLine {
    /// Should read from the current position until the end of the line, omitting the line
    /// terminator. Returns `false` if there was no line left to read.
    fn read_current_line(&mut self, buf: &mut Vec<u8>) -> Result<bool>;

    /// Should return the 1-indexed number of the last line read, or 0 if nothing was read yet.
    fn current_line(&self) -> usize;

    /// Reads the next line
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if !self.read_current_line(&mut buf)? {
            return Ok(None);
        }

        String::from_utf8(buf)
            .map(Some)
            .map_err(|_| error::Error::Utf8 {
                line: self.current_line(),
            })
    }

    /// Returns an iterator over the remaining lines. Stops after the first error.
    #[inline]
    fn lines(&mut self) -> Lines<'_, Self> {
        Lines {
            reader: self,
            failed: false,
        }
    }

    /// Reads forward until the 1-indexed line `line` and returns it. Returns `None` if the line
    /// was already passed or the text ends before it.
    fn read_line(&mut self, line: usize) -> Result<Option<String>> {
        if line <= self.current_line() {
            return Ok(None);
        }

        while let Some(text) = self.next_line()? {
            if self.current_line() == line {
                return Ok(Some(text));
            }
        }

        Ok(None)
    }

    /// Counts the remaining lines by reading all of them
    fn count_lines(&mut self) -> Result<usize> {
        itertools::process_results(self.lines(), |lines| lines.count())
    }

    /// Pushes all remaining lines into `out`. On failure `out` keeps the lines read so far.
    fn read_lines_into(&mut self, out: &mut Vec<String>) -> Result<()> {
        itertools::process_results(self.lines(), |lines| out.extend(lines))
    }

    /// Splits all remaining lines by `pattern` and pushes the fragments into `out`, keeping empty
    /// fragments. On failure `out` keeps the fragments of the lines read so far.
    fn split_lines_into(&mut self, pattern: &Regex, out: &mut Vec<String>) -> Result<()> {
        itertools::process_results(self.lines(), |lines| {
            for line in lines {
                out.extend(pattern.split(&line).map(str::to_owned));
            }
        })
    }

    /// Reads all remaining lines into a single string, terminating each one with `separator`.
    fn join_lines(&mut self, separator: &str) -> Result<String> {
        itertools::process_results(self.lines(), |lines| {
            let mut out = String::new();
            for line in lines {
                out.push_str(&line);
                out.push_str(separator);
            }
            out
        })
    }
}

/// Iterator over the lines of a `ReadByLine`, created by `ReadByLine::lines`
#[derive(Debug)]
pub struct Lines<'a, R: ?Sized> {
    reader: &'a mut R,
    failed: bool,
}

impl<'a, R: ReadByLine + ?Sized> Iterator for Lines<'a, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let res = self.reader.next_line().transpose();
        self.failed = matches!(res, Some(Err(_)));
        res
    }
}

impl<'a, R: ReadByLine + ?Sized> std::iter::FusedIterator for Lines<'a, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bufreader::LineReader;
    use std::{
        fs::read_to_string,
        io::{prelude::*, BufReader, Cursor},
    };

    const INPUT_FILES: &[&str] = &["simple", "crlf", "no_newline", "empty", "blank_lines"];

    #[test]
    fn test() {
        for input_file in INPUT_FILES {
            let file = format!("./testfiles/{}", input_file);
            test_sequencially(&file);
            test_each_line(&file);
            test_count(&file);
            test_join(&file);
        }
    }

    fn std_lines(original_file: &str) -> Vec<String> {
        let original = BufReader::new(std::fs::File::open(&original_file).unwrap());
        original.lines().map(|i| i.unwrap()).collect()
    }

    fn test_sequencially(original_file: &str) {
        let mut reader = File::open(original_file).expect("failed opening file");
        let orig_content = std_lines(original_file);

        for (line, original) in orig_content.iter().enumerate() {
            let read = reader.next_line().unwrap();
            assert_eq!(Some(original), read.as_ref());
            assert_eq!(reader.current_line(), line + 1);
        }

        assert_eq!(reader.next_line().unwrap(), None);
    }

    fn test_each_line(original_file: &str) {
        let orig_content = std_lines(original_file);

        for (pos, original) in orig_content.iter().enumerate() {
            let mut reader = File::open(original_file).unwrap();
            let read = reader.read_line(pos + 1).unwrap();
            assert_eq!(Some(original), read.as_ref());
        }

        let mut reader = File::open(original_file).unwrap();
        assert_eq!(reader.read_line(orig_content.len() + 1).unwrap(), None);
    }

    fn test_count(original_file: &str) {
        let mut reader = File::open(original_file).unwrap();
        assert_eq!(reader.count_lines().unwrap(), std_lines(original_file).len());
    }

    fn test_join(original_file: &str) {
        let mut reader = File::open(original_file).unwrap();
        let joined = reader.join_lines("\n").unwrap();

        let expected = read_to_string(original_file).unwrap().replace("\r\n", "\n");
        if expected.is_empty() || expected.ends_with('\n') {
            assert_eq!(joined, expected);
        } else {
            assert_eq!(joined, format!("{}\n", expected));
        }
    }

    #[test]
    fn test_read_line_only_forward() {
        let mut reader = LineReader::new(Cursor::new("one\ntwo\nthree\n"));
        assert_eq!(reader.read_line(2).unwrap().as_deref(), Some("two"));
        assert_eq!(reader.read_line(1).unwrap(), None);
        assert_eq!(reader.read_line(3).unwrap().as_deref(), Some("three"));
        assert_eq!(reader.read_line(0).unwrap(), None);
    }

    #[test]
    fn test_split() {
        let mut reader = LineReader::new(Cursor::new("a,b\nc\n,x,,\n\n"));
        let mut out = Vec::new();
        reader
            .split_lines_into(&Regex::new(",").unwrap(), &mut out)
            .unwrap();
        assert_eq!(out, vec!["a", "b", "c", "", "x", "", "", ""]);
    }

    #[test]
    fn test_split_pattern() {
        let mut reader = LineReader::new(Cursor::new("1 2\t 3\n4"));
        let mut out = Vec::new();
        reader
            .split_lines_into(&Regex::new(r"\s+").unwrap(), &mut out)
            .unwrap();
        assert_eq!(out, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_invalid_utf8_truncates() {
        let data: &[u8] = b"first\nsecond\n\xff\xfe\nfourth\n";
        let mut reader = LineReader::new(Cursor::new(data));

        let mut out = Vec::new();
        let res = reader.read_lines_into(&mut out);

        assert!(matches!(res, Err(error::Error::Utf8 { line: 3 })));
        assert_eq!(out, vec!["first", "second"]);
    }

    #[test]
    fn test_lines_stop_after_error() {
        let data: &[u8] = b"\xff\nok\n";
        let mut reader = LineReader::new(Cursor::new(data));
        let mut lines = reader.lines();

        assert!(matches!(lines.next(), Some(Err(_))));
        assert!(lines.next().is_none());
    }
}
