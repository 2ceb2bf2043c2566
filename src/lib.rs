//! bit2bin: packs a human readable string of binary digits into a binary file.
//!
//! Version 0.1.0
//!
//! Every 8 consecutive '0'/'1' characters become one byte, most significant bit first. If the
//! number of digits is not a multiple of 8, the last byte is padded with zeros in its low-order
//! bits. The output file is raw bytes, with no header.
//!
//! Basic usage:
//!
//! `$> bit2bin 01000001 a.bin`
//!
//! `$> bit2bin bits.txt out.bin`
//!
//! A first argument made only of 0s and 1s is always taken as the bits themselves. Anything else is
//! read as the name of a text file, where characters other than 0 and 1 (spaces, newlines) are
//! skipped.
//!
pub mod bitstream;
pub mod conversion;
pub mod error;
pub mod tools;
