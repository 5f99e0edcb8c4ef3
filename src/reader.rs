use std::{
    convert::TryFrom,
    io::{self, Stdout, Write},
    path::Path,
};

use log::error;
use regex::Regex;

use crate::{error::Error, File, ReadByLine, Result, StreamLines, LINE_SEPARATOR};

const READ_CONTEXT: &str = "error reading file";
const COUNT_CONTEXT: &str = "error counting lines";
const SPLIT_CONTEXT: &str = "error splitting file";

/// Logs a failed operation on `path`. This is the only place failures get reported.
pub(crate) fn log_failure(context: &str, path: &Path, err: &Error) {
    error!("{}: {}: {}", context, path.display(), err);
}

/// Reads text files by their lines. Each call opens the file, reads what it needs and closes it
/// again before returning.
///
/// Methods without `try_` prefix never fail. They log the failure and return an empty value
/// instead: `None`, an empty `Vec` or `-1`. Use the `try_` methods to get the error itself.
#[derive(Debug, Clone)]
pub struct TextFileReader {
    separator: String,
}

impl Default for TextFileReader {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TextFileReader {
    /// Create a new `TextFileReader` joining lines with `LINE_SEPARATOR`
    #[inline]
    pub fn new() -> TextFileReader {
        Self {
            separator: LINE_SEPARATOR.to_owned(),
        }
    }

    /// Use `separator` instead of `LINE_SEPARATOR` when joining lines in `read_all`
    #[inline]
    pub fn with_line_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.separator = separator.into();
        self
    }

    #[inline]
    pub fn line_separator(&self) -> &str {
        &self.separator
    }

    /// Returns a lazy sequence of the lines of `path` and prints each of them to stdout as it gets
    /// read.
    pub fn stream_lines<P: AsRef<Path>>(&self, path: P) -> StreamLines<Stdout> {
        self.stream_lines_to(path, io::stdout())
    }

    /// Like `stream_lines` but writes the lines into `sink`.
    pub fn stream_lines_to<P: AsRef<Path>, W: Write>(&self, path: P, sink: W) -> StreamLines<W> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => StreamLines::new(file, sink, true),
            Err(err) => {
                log_failure(READ_CONTEXT, path, &err);
                StreamLines::failed(path, sink, err)
            }
        }
    }

    /// Like `stream_lines_to` but returns an error if the file can't be opened. Errors while
    /// streaming end the sequence and are available through `StreamLines::error`.
    pub fn try_stream_lines_to<P: AsRef<Path>, W: Write>(
        &self,
        path: P,
        sink: W,
    ) -> Result<StreamLines<W>> {
        Ok(StreamLines::new(File::open(path)?, sink, false))
    }

    /// Reads the whole file, terminating each line with the line separator. Returns `None` if the
    /// file couldn't be read.
    pub fn read_all<P: AsRef<Path>>(&self, path: P) -> Option<String> {
        let path = path.as_ref();
        self.try_read_all(path)
            .map_err(|err| log_failure(READ_CONTEXT, path, &err))
            .ok()
    }

    pub fn try_read_all<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        File::open(path)?.join_lines(&self.separator)
    }

    /// Reads all lines of the file. If reading fails midway the lines read until then are
    /// returned.
    pub fn read_all_lines<P: AsRef<Path>>(&self, path: P) -> Vec<String> {
        let path = path.as_ref();
        let mut lines = Vec::new();
        if let Err(err) = File::open(path).and_then(|mut file| file.read_lines_into(&mut lines)) {
            log_failure(READ_CONTEXT, path, &err);
        }
        lines
    }

    pub fn try_read_all_lines<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        File::open(path)?.read_lines_into(&mut lines)?;
        Ok(lines)
    }

    /// Reads the 1-indexed line `line`. Returns `None` for numbers smaller than 1, numbers past
    /// the end of the file and if the file couldn't be read.
    pub fn read_line_by_number<P: AsRef<Path>>(&self, path: P, line: i64) -> Option<String> {
        let path = path.as_ref();
        self.try_read_line_by_number(path, line)
            .unwrap_or_else(|err| {
                log_failure(READ_CONTEXT, path, &err);
                None
            })
    }

    pub fn try_read_line_by_number<P: AsRef<Path>>(
        &self,
        path: P,
        line: i64,
    ) -> Result<Option<String>> {
        let mut file = File::open(path)?;
        match usize::try_from(line) {
            Ok(line) if line > 0 => file.read_line(line),
            _ => Ok(None),
        }
    }

    /// Counts the lines of the file. Returns `-1` if the file couldn't be read.
    pub fn count_lines<P: AsRef<Path>>(&self, path: P) -> i64 {
        let path = path.as_ref();
        match self.try_count_lines(path) {
            Ok(count) => i64::try_from(count).unwrap_or(i64::MAX),
            Err(err) => {
                log_failure(COUNT_CONTEXT, path, &err);
                -1
            }
        }
    }

    pub fn try_count_lines<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        File::open(path)?.count_lines()
    }

    /// Splits every line of the file by the regular expression `delimiter` and returns all
    /// fragments in file order. Empty fragments are kept, trailing ones included, so `"a,b,"`
    /// split by `","` gives `["a", "b", ""]`. If reading fails midway the fragments read until
    /// then are returned; an invalid `delimiter` returns nothing.
    pub fn read_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: &str) -> Vec<String> {
        let path = path.as_ref();
        let mut fragments = Vec::new();

        let res = Regex::new(delimiter).map_err(Error::from).and_then(|pattern| {
            File::open(path)?.split_lines_into(&pattern, &mut fragments)
        });
        if let Err(err) = res {
            log_failure(SPLIT_CONTEXT, path, &err);
        }

        fragments
    }

    pub fn try_read_with_delimiter<P: AsRef<Path>>(
        &self,
        path: P,
        delimiter: &str,
    ) -> Result<Vec<String>> {
        let pattern = Regex::new(delimiter)?;
        let mut fragments = Vec::new();
        File::open(path)?.split_lines_into(&pattern, &mut fragments)?;
        Ok(fragments)
    }
}
