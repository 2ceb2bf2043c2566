//! The conversion module runs one bit2bin invocation.
//!
//! It decides whether the first argument is a literal bit string or a file name, opens the input
//! and output files, hands both to the bitstream packer, and builds the report lines shown to the
//! user.
//!
pub mod convert;
