//! The tools module provides the command line front end for bit2bin.
//!
//! - cli: Command line interface, verbosity and the usage text.
//!
pub mod cli;
