use std::{
    fs,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{bufreader::LineReader, ReadByLine, Result};

/// A wrapper around `std::fs::File` which implements `ReadByLine`. The handle is closed as soon as
/// the `File` is dropped.
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    inner_file: LineReader<BufReader<fs::File>>,
}

impl File {
    /// Open a text file for reading.
    ///
    /// Returns an error if the file can't be opened
    pub fn open<P: AsRef<Path>>(path: P) -> Result<File> {
        let path = path.as_ref();
        let inner_file = LineReader::new(BufReader::new(fs::File::open(path)?));

        Ok(Self {
            path: path.to_path_buf(),
            inner_file,
        })
    }

    /// The path this file was opened with
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReadByLine for File {
    #[inline(always)]
    fn read_current_line(&mut self, buf: &mut Vec<u8>) -> Result<bool> {
        self.inner_file.read_current_line(buf)
    }

    #[inline(always)]
    fn current_line(&self) -> usize {
        self.inner_file.current_line()
    }
}
