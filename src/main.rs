//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::exit;

use bit2bin::conversion::convert::{convert, report_lines};
use bit2bin::tools::cli::{bitopts_init, USAGE};

use log::{info, warn, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. The command line narrows this.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Unable to start logging: {}", e);
    }
    log::set_max_level(LevelFilter::Warn);

    let opts = match bitopts_init() {
        Ok(opts) => opts,
        Err(e) => {
            warn!("{}", e);
            println!("{}", USAGE);
            exit(1);
        }
    };

    match convert(&opts) {
        Ok(report) => {
            report_lines(&report, &opts.output)
                .iter()
                .for_each(|line| println!("{}", line));
        }
        Err(e) => {
            println!("Error: {}", e);
            exit(1);
        }
    }

    println!("Conversion complete.");
    info!("Done.");
}
