use std::io::{self, Write};

use log::{debug, trace};

/// Summary of one packing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackReport {
    /// Bytes written to the destination, including any padded final byte.
    pub bytes_written: usize,
    /// Count of meaningful ('0'/'1') characters consumed.
    pub bits_packed: usize,
    /// Zero bits added to the low end of the final byte (0-7).
    pub padding: u8,
}

impl PackReport {
    pub fn padded(&self) -> bool {
        self.padding > 0
    }
}

/// Packs bits most-significant-first into bytes. Every completed byte is written straight through
/// to the destination. Call flush() once the source is exhausted to write any partial last byte.
pub struct BitPacker<W: Write> {
    writer: W,
    queue: u8,
    q_bits: u8,
    bytes_written: usize,
    bits_packed: usize,
}

impl<W: Write> BitPacker<W> {
    /// Create a new BitPacker that writes to `writer`. Hand it an unbuffered writer if each byte
    /// should reach the destination as soon as it is complete.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            queue: 0,
            q_bits: 0,
            bytes_written: 0,
            bits_packed: 0,
        }
    }

    /// Internal write function. Writes the queue as one byte once it holds 8 bits.
    fn write_stream(&mut self) -> io::Result<()> {
        if self.q_bits == 8 {
            self.writer.write_all(&[self.queue])?;
            trace!("Packed byte {:#04x} at {}", self.queue, self.bytes_written);
            self.bytes_written += 1;
            self.queue = 0;
            self.q_bits = 0;
        }
        Ok(())
    }

    /// Shift one bit into the low end of the queue.
    pub fn push_bit(&mut self, bit: bool) -> io::Result<()> {
        self.queue = (self.queue << 1) | bit as u8;
        self.q_bits += 1;
        self.bits_packed += 1;
        self.write_stream()
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits. Returns the number of padding bits written.
    pub fn flush(&mut self) -> io::Result<u8> {
        let mut padding = 0;
        if self.q_bits > 0 {
            padding = 8 - self.q_bits;
            self.queue <<= padding; //pad the queue with zeros
            self.q_bits = 8;
            self.write_stream()?;
        }
        self.writer.flush()?;
        Ok(padding)
    }

    /// Debugging function to return the number of bytes.bits packed so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bytes_written, self.q_bits)
    }

    pub fn bits_packed(&self) -> usize {
        self.bits_packed
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Give back the destination. Bits still in the queue are dropped, so flush() first.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Pack every '0' and '1' in `source` into `writer`, skipping all other characters. The final
/// partial byte, if any, is zero padded. Stops at the first read or write error.
pub fn pack<S, W>(source: S, writer: W) -> io::Result<(PackReport, W)>
where
    S: IntoIterator<Item = io::Result<char>>,
    W: Write,
{
    let mut bp = BitPacker::new(writer);
    for c in source {
        match c? {
            '0' => bp.push_bit(false)?,
            '1' => bp.push_bit(true)?,
            _ => {}
        }
    }
    let padding = bp.flush()?;
    debug!("Packing finished at {}", bp.loc());

    let report = PackReport {
        bytes_written: bp.bytes_written(),
        bits_packed: bp.bits_packed(),
        padding,
    };
    Ok((report, bp.into_inner()))
}

#[cfg(test)]
mod test {
    use super::{pack, BitPacker, PackReport};
    use crate::bitstream::bitsource::{literal_source, FileChars};
    use std::io::{self, Write};

    /// Accepts `limit` bytes, then fails every write.
    #[derive(Debug)]
    struct FailingWriter {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() >= self.limit {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.written.push(buf[0]);
            Ok(1)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn pack_str(s: &str) -> (PackReport, Vec<u8>) {
        pack(literal_source(s), Vec::new()).unwrap()
    }

    #[test]
    fn push_bit_test() {
        let mut bp = BitPacker::new(Vec::new());
        for bit in [false, true, false, false, false, false, false, true] {
            bp.push_bit(bit).unwrap();
        }
        assert_eq!("[1.0]", &bp.loc());
        bp.push_bit(true).unwrap();
        assert_eq!("[1.1]", &bp.loc());
        assert_eq!(bp.flush().unwrap(), 7);
        assert_eq!("[2.0]", &bp.loc());
        assert_eq!(bp.bytes_written(), 2);
        assert_eq!(bp.into_inner(), vec![0x41, 0x80]);
    }

    #[test]
    fn flush_empty_test() {
        let mut bp = BitPacker::new(Vec::new());
        assert_eq!(bp.flush().unwrap(), 0);
        assert!(bp.into_inner().is_empty());
    }

    #[test]
    fn single_byte_test() {
        let (report, out) = pack_str("01000001");
        assert_eq!(out, vec![0x41]);
        assert_eq!(report.bits_packed, 8);
        assert!(!report.padded());
    }

    #[test]
    fn padding_test() {
        let (report, out) = pack_str("101");
        assert_eq!(out, vec![0b1010_0000]);
        assert_eq!(report.padding, 5);
        assert_eq!(report.bytes_written, 1);
    }

    #[test]
    fn byte_count_test() {
        for n in 0..40 {
            let bits: String = (0..n).map(|i| if i % 3 == 0 { '1' } else { '0' }).collect();
            let (report, out) = pack_str(&bits);
            assert_eq!(out.len(), (n + 7) / 8, "length {}", n);
            assert_eq!(report.bytes_written, out.len());
            assert_eq!(report.bits_packed, n);
            assert_eq!(report.padding as usize, (8 - n % 8) % 8);
        }
    }

    #[test]
    fn two_bytes_no_padding_test() {
        let (report, out) = pack_str("1111000000001111");
        assert_eq!(out, vec![0xf0, 0x0f]);
        assert!(!report.padded());
    }

    #[test]
    fn skips_other_characters_test() {
        let (from_file, file_out) = pack(FileChars::new("10\n10\n".as_bytes()), Vec::new()).unwrap();
        let (from_str, str_out) = pack_str("1010");
        assert_eq!(file_out, str_out);
        assert_eq!(file_out, vec![0xa0]);
        assert_eq!(from_file, from_str);
        assert_eq!(from_file.padding, 4);
    }

    #[test]
    fn no_meaningful_bits_test() {
        let (report, out) = pack(FileChars::new("   \n".as_bytes()), Vec::new()).unwrap();
        assert!(out.is_empty());
        assert_eq!(report, PackReport::default());
    }

    #[test]
    fn write_error_keeps_prefix_test() {
        let writer = FailingWriter {
            written: Vec::new(),
            limit: 1,
        };
        let mut bp = BitPacker::new(writer);
        let bits = "1111111100000000";
        let mut result = Ok(());
        for c in bits.chars() {
            result = bp.push_bit(c == '1');
            if result.is_err() {
                break;
            }
        }
        assert!(result.is_err());
        assert_eq!(bp.into_inner().written, vec![0xff]);
    }

    #[test]
    fn pack_write_error_test() {
        let writer = FailingWriter {
            written: Vec::new(),
            limit: 0,
        };
        let err = pack(literal_source("1"), writer).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn pack_read_error_test() {
        let source = vec![Ok('1'), Err(io::Error::new(io::ErrorKind::Other, "read failed"))];
        let err = pack(source, Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "read failed");
    }
}
