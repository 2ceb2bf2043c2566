use std::ffi::OsStr;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::{fmt::Display, fmt::Formatter};

use log::{debug, info, warn};

use crate::bitstream::bitpacker::{pack, PackReport};
use crate::bitstream::bitsource::{is_bit_string, literal_source, FileChars};
use crate::error::{Bit2BinError, Bit2BinResult};
use crate::tools::cli::BitOpts;

/// Where the bits come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// The argument itself is the bit string
    Literal(String),
    /// Path of a text file holding the bits
    File(PathBuf),
}

impl InputMode {
    /// A valid bit string is always literal input, even when a file of that name exists. An
    /// argument that is not UTF-8 can't be a bit string, so it names a file.
    pub fn detect<A: AsRef<OsStr>>(arg: A) -> Self {
        let arg = arg.as_ref();
        match arg.to_str() {
            Some(bits) if is_bit_string(bits) => InputMode::Literal(bits.to_string()),
            _ => InputMode::File(PathBuf::from(arg)),
        }
    }
}

impl Display for InputMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMode::Literal(bits) => write!(f, "literal string of {} bits", bits.len()),
            InputMode::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// Convert the input described in opts <BitOpts> to a packed binary file.
pub fn convert(opts: &BitOpts) -> Bit2BinResult<PackReport> {
    convert_to(&opts.input, &opts.output)
}

/// Pack `input` into the file at `output`. The output file is created (or truncated) only after
/// the input has been opened. Bytes written before a failure are left in place.
pub fn convert_to(input: &InputMode, output: &Path) -> Bit2BinResult<PackReport> {
    let report = match input {
        InputMode::Literal(bits) => {
            let f_out = create_output(output)?;
            pack(literal_source(bits), f_out)?.0
        }
        InputMode::File(path) => {
            let fin = File::open(path).map_err(Bit2BinError::OpenInput)?;
            debug!("Opened {}", path.display());
            let f_out = create_output(output)?;
            pack(FileChars::new(fin), f_out)?.0
        }
    };

    if report.bits_packed == 0 {
        warn!("No 0 or 1 digits found in the input; {} is empty", output.display());
    }
    info!(
        "Packed {} bits into {} bytes ({} padding bits)",
        report.bits_packed, report.bytes_written, report.padding
    );
    Ok(report)
}

/// Open the destination unbuffered so each packed byte is written as soon as it is complete.
fn create_output(output: &Path) -> Bit2BinResult<File> {
    let f_out = File::create(output).map_err(Bit2BinError::CreateOutput)?;
    debug!("Created {}", output.display());
    Ok(f_out)
}

/// Lines reported to the user after a successful conversion.
pub fn report_lines(report: &PackReport, output: &Path) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    if report.padded() {
        lines.push(format!(
            "Note: Padded last byte with {} zeros to complete the byte.",
            report.padding
        ));
    }
    lines.push(format!(
        "Successfully wrote {} bytes to {}",
        report.bytes_written,
        output.display()
    ));
    lines
}
