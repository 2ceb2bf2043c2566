//! The bitstream module is the core of bit2bin.
//!
//! A BitSource is any lazy, single-pass feed of characters. The BitPacker consumes one, keeps the
//! '0' and '1' characters, and packs them most-significant-bit first into bytes, writing each
//! byte through to the destination as soon as it is complete. A final partial byte is padded with
//! zeros in its low-order bits.
//!
//! Both input modes (literal string and text file) go through the same pack() routine.
//!
pub mod bitpacker;
pub mod bitsource;
