use std::ffi::OsString;
use std::path::PathBuf;
use std::{fmt::Display, fmt::Formatter};

use clap::error::ErrorKind;
use clap::Parser;
use log::{info, warn};

use crate::conversion::convert::InputMode;
use crate::error::{Bit2BinError, Bit2BinResult};

/// Short usage printed when the arguments can't be used.
pub const USAGE: &str = "Usage: bit2bin <input.txt> <output.bin>   (file input)
   or: bit2bin \"10101010\" output.bin    (string input)";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    fn from_level(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate. The input and output paths are split
/// off before clap runs, so only the options after them are declared here.
#[derive(Parser, Debug)]
#[clap(
    name = "bit2bin",
    version,
    override_usage = "bit2bin <INPUT> <OUTPUT> [OPTIONS]",
    about = "Packs a string of 0/1 digits into a binary file",
    long_about = "
    Packs '0' and '1' characters, most significant bit first, into bytes. INPUT is either a
    literal bit string (only 0s and 1s) or the path of a text file. In a text file every character
    other than 0 and 1 is skipped. If the bit count is not a multiple of 8 the last byte is padded
    with zeros. OUTPUT is created or truncated.

    The first two arguments are always INPUT and OUTPUT, even when they start with '-'.
    Options go after them.")]
struct Args {
    /// Sets verbosity. -v0 is silent, -v5 is chatty. Levels above 2 (warnings) only take effect
    /// in debug builds
    #[clap(short = 'v', long = "verbose", value_parser, default_value_t = 2)]
    verbose: u8,

    /// Anything after the output path is ignored
    #[clap(value_parser, hide = true)]
    extra: Vec<OsString>,
}

/// Options for one conversion.
#[derive(Debug)]
pub struct BitOpts {
    /// Literal bits or the file to read them from
    pub input: InputMode,
    /// Where the packed bytes go
    pub output: PathBuf,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

/// Read the process arguments into BitOpts.
pub fn bitopts_init() -> Bit2BinResult<BitOpts> {
    bitopts_from(std::env::args_os())
}

/// Build BitOpts from an argument list (first item is the program name). The first two values
/// after the program name are the input and output, taken as given: a leading '-' or invalid
/// UTF-8 is fine. Help and version requests after them print and exit. Fewer than two values, or
/// anything else clap rejects, comes back as a usage error.
pub fn bitopts_from<I, T>(args: I) -> Bit2BinResult<BitOpts>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() < 3 {
        return Err(Bit2BinError::Usage(format!(
            "expected <INPUT> <OUTPUT>, got {} argument(s)",
            args.len().saturating_sub(1)
        )));
    }
    let output = args.remove(2);
    let input = args.remove(1);

    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => return Err(Bit2BinError::Usage(e.to_string())),
        },
    };

    let opts = BitOpts {
        input: InputMode::detect(&input),
        output: PathBuf::from(output),
        verbose: Verbosity::from_level(args.verbose),
    };

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    info!("---- bit2bin Initialization Start ----");
    info!("Verbosity set to {}", opts.verbose);
    info!("Input: {}", opts.input);
    info!("Output: {}", opts.output.display());
    if !args.extra.is_empty() {
        let extra: Vec<_> = args.extra.iter().map(|a| a.to_string_lossy()).collect();
        warn!("Ignoring extra arguments: {}", extra.join(" "));
    }
    info!("---- bit2bin Initialization End ----");
    Ok(opts)
}
