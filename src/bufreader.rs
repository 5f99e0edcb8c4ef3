use std::io::{self, BufRead};

use crate::{ReadByLine, Result};

/// A wrapper around any `BufRead` which implements `ReadByLine` and keeps track of the line
/// number. Lines end at `\n`, `\r` or `\r\n`; a last line without terminator is still a line.
#[derive(Debug)]
pub struct LineReader<R: BufRead> {
    pub reader: R,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    #[inline(always)]
    pub fn new(reader: R) -> LineReader<R> {
        Self { reader, line: 0 }
    }

    /// Returns the wrapped reader
    #[inline]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> ReadByLine for LineReader<R> {
    fn read_current_line(&mut self, buf: &mut Vec<u8>) -> Result<bool> {
        let mut read_any = false;

        loop {
            let (terminator, used) = {
                let available = match self.reader.fill_buf() {
                    Ok(available) => available,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                };
                if available.is_empty() {
                    break;
                }
                read_any = true;

                match available.iter().position(|b| *b == b'\n' || *b == b'\r') {
                    Some(pos) => {
                        buf.extend_from_slice(&available[..pos]);
                        (Some(available[pos]), pos + 1)
                    }
                    None => {
                        buf.extend_from_slice(available);
                        (None, available.len())
                    }
                }
            };
            self.reader.consume(used);

            match terminator {
                // \r\n counts as one terminator, even across buffer boundaries
                Some(b'\r') => {
                    if self.reader.fill_buf()?.first() == Some(&b'\n') {
                        self.reader.consume(1);
                    }
                    break;
                }
                Some(_) => break,
                None => {}
            }
        }

        if read_any {
            self.line += 1;
        }
        Ok(read_any)
    }

    #[inline(always)]
    fn current_line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
