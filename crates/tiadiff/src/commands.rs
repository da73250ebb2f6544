//! Comparator command.

use std::io::{self, Write};

use tiadiff::report::write_report;
use tiadiff::{CompareConfig, FrameComparison, LogFiles, RegisterMap, Verdict, compare_dir};

use crate::cli::{Cli, EXIT_FAILURE, EXIT_MISMATCH, EXIT_SUCCESS};
use crate::terminal;

/// Compare the logs in `cli.dir` and print the frame report.
pub fn run_command(cli: &Cli) -> i32 {
    let files = LogFiles {
        actual: cli.actual_name.clone(),
        expected: cli.expected_name.clone(),
    };
    let config = CompareConfig {
        stop_on_first: cli.stop_on_first,
        mismatches_only: cli.mismatches_only,
    };

    let result = match compare_dir(&cli.dir, &files, &RegisterMap::tia(), &config) {
        Ok(result) => result,
        Err(e) => {
            terminal::error(&e.to_string());
            return EXIT_FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let printed = writeln!(out, "read {} frames", result.actual_frames)
        .and_then(|()| writeln!(out, "read {} frames", result.expected_frames))
        .and_then(|()| write_report(&mut out, &result.comparison, &config))
        .and_then(|()| out.flush());
    if let Err(e) = printed {
        terminal::error(&format!("failed to write report: {e}"));
        return EXIT_FAILURE;
    }

    summarize(&result.comparison, cli.silent)
}

fn summarize(comparison: &FrameComparison, silent: bool) -> i32 {
    let compared = comparison.frames.len();

    if let Some(first) = comparison.first_mismatch() {
        let mismatched = comparison.mismatches().count();
        let detail = match first.verdict {
            Verdict::Mismatch(divergence) => divergence.to_string(),
            Verdict::Good => String::new(),
        };
        terminal::error(&format!(
            "{mismatched} of {compared} frames differ (first at frame {}: {detail})",
            first.index
        ));
        return EXIT_MISMATCH;
    }

    if !silent {
        if compared == 0 {
            terminal::warning("no frames compared");
        } else {
            if comparison.actual_len != comparison.expected_len {
                terminal::info(&format!(
                    "compared first {compared} frames (actual {}, expected {})",
                    comparison.actual_len, comparison.expected_len
                ));
            }
            terminal::success(&format!("all {compared} frames match"));
        }
    }
    EXIT_SUCCESS
}
