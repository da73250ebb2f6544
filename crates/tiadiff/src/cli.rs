//! CLI definitions.

use std::path::PathBuf;

use clap::Parser;

/// Exit code when every frame matches.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for I/O or parse failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when at least one frame mismatches.
pub const EXIT_MISMATCH: i32 = -1;

#[derive(Parser)]
#[command(name = "tiadiff")]
#[command(about = "Compare a Stella TIA register trace against a reference register dump")]
#[command(version)]
pub struct Cli {
    /// Directory containing stella.log.out and RegisterDump.txt
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Emulator trace file name inside DIR
    #[arg(long, default_value = tiadiff::TRACE_FILE)]
    pub actual_name: PathBuf,

    /// Reference dump file name inside DIR
    #[arg(long, default_value = tiadiff::DUMP_FILE)]
    pub expected_name: PathBuf,

    /// Stop at the first mismatching frame
    #[arg(long)]
    pub stop_on_first: bool,

    /// Only print mismatching frames
    #[arg(long)]
    pub mismatches_only: bool,

    /// Default to debug logging on stderr (RUST_LOG still takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors and drop non-error status lines; the frame report is still printed
    #[arg(short, long, conflicts_with = "verbose")]
    pub silent: bool,
}

impl Cli {
    /// Default log directive for the chosen verbosity.
    pub const fn log_directive(&self) -> &'static str {
        if self.verbose {
            "tiadiff=debug"
        } else if self.silent {
            "tiadiff=error"
        } else {
            "tiadiff=info"
        }
    }
}
