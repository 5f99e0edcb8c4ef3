use std::{
    io::Write,
    iter::FusedIterator,
    path::{Path, PathBuf},
};

use crate::{error::Error, reader::log_failure, File, ReadByLine};

const STREAM_CONTEXT: &str = "error streaming file";

/// A lazy sequence of the lines of a file which writes every line into a sink as it's produced.
///
/// The file is closed once the last line was read or reading failed. A failure ends the sequence
/// and is kept in `error`. Streams created by `TextFileReader::stream_lines` additionally log it.
#[derive(Debug)]
pub struct StreamLines<W: Write> {
    file: Option<File>,
    path: PathBuf,
    sink: W,
    log_failures: bool,
    error: Option<Error>,
}

impl<W: Write> StreamLines<W> {
    pub(crate) fn new(file: File, sink: W, log_failures: bool) -> StreamLines<W> {
        Self {
            path: file.path().to_path_buf(),
            file: Some(file),
            sink,
            log_failures,
            error: None,
        }
    }

    /// A stream which never yields anything, for files that couldn't be opened
    pub(crate) fn failed(path: &Path, sink: W, error: Error) -> StreamLines<W> {
        Self {
            file: None,
            path: path.to_path_buf(),
            sink,
            log_failures: true,
            error: Some(error),
        }
    }

    /// Returns the error which ended the stream, if any
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Returns `true` while the underlying file is still open
    #[inline]
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Consumes the stream and returns the sink
    #[inline]
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn fail(&mut self, error: Error) {
        self.file = None;
        if self.log_failures {
            log_failure(STREAM_CONTEXT, &self.path, &error);
        }
        self.error = Some(error);
    }
}

impl<W: Write> Iterator for StreamLines<W> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let file = self.file.as_mut()?;

        match file.next_line() {
            Ok(Some(line)) => {
                if let Err(err) = writeln!(self.sink, "{}", line) {
                    self.fail(err.into());
                    return None;
                }
                Some(line)
            }
            Ok(None) => {
                self.file = None;
                None
            }
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }
}

impl<W: Write> FusedIterator for StreamLines<W> {}
