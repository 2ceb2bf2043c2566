//! BitSource: the character feed for the BitPacker.
//!
//! Anything that yields `io::Result<char>` one character at a time can be packed. Two adapters are
//! provided: the characters of a literal string, and a lazy decoder over a buffered reader.
//!
//! NOTE: The source is consumed in a single forward pass. There is no seeking back.
//!

use std::io::{self, BufRead, BufReader, Read};

const BUFFER_SIZE: usize = 64 * 1024;
const REPLACEMENT: char = '\u{FFFD}';

/// True when `s` is non-empty and made only of '0' and '1'.
pub fn is_bit_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c == '0' || c == '1')
}

/// Feed the characters of a literal string to the packer.
pub fn literal_source(s: &str) -> impl Iterator<Item = io::Result<char>> + '_ {
    s.chars().map(Ok)
}

/// Decodes a reader as UTF-8, one character per call to next(). Malformed sequences come back as
/// U+FFFD. A read error is returned once, after which the iterator is finished.
#[derive(Debug)]
pub struct FileChars<R> {
    reader: BufReader<R>,
    failed: bool,
}

impl<R: Read> FileChars<R> {
    /// Creates a new FileChars (with a 64k buffer).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::with_capacity(BUFFER_SIZE, source),
            failed: false,
        }
    }

    /// Look at the next byte without consuming it. None at end of input.
    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }

    fn decode(&mut self) -> io::Result<Option<char>> {
        let lead = match self.next_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };
        if lead < 0x80 {
            return Ok(Some(lead as char));
        }
        let width = match lead {
            0xc2..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf4 => 4,
            _ => return Ok(Some(REPLACEMENT)),
        };

        let mut seq = [lead, 0, 0, 0];
        for slot in seq.iter_mut().take(width).skip(1) {
            // A byte that is not a continuation byte starts the next character, so leave it
            match self.peek_byte()? {
                Some(b) if b & 0xc0 == 0x80 => {
                    *slot = b;
                    self.reader.consume(1);
                }
                _ => return Ok(Some(REPLACEMENT)),
            }
        }
        // from_utf8 rejects overlong forms and surrogates
        Ok(Some(
            std::str::from_utf8(&seq[..width])
                .ok()
                .and_then(|s| s.chars().next())
                .unwrap_or(REPLACEMENT),
        ))
    }
}

impl<R: Read> Iterator for FileChars<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.decode() {
            Ok(c) => c.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
