//! Terminal rendering of a check run.

use console::style;

use crate::services::checker::CheckOutcome;
use crate::services::verdict::{FileStatus, Verdict};

/// Human label for a verdict.
pub fn verdict_text(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::NotFound => "could not find",
        Verdict::Modrinth => "found on modrinth",
        Verdict::Curseforge => "found on curseforge",
        Verdict::Both => "found on both",
    }
}

fn verdict_label(verdict: Verdict) -> console::StyledObject<&'static str> {
    let text = verdict_text(verdict);
    match verdict {
        Verdict::NotFound => style(text).red(),
        _ => style(text).green(),
    }
}

/// Print warnings to stderr and one verdict line per file to stdout.
pub fn print(outcome: &CheckOutcome) {
    for warning in &outcome.warnings {
        eprintln!("{} {warning}", style("warning:").yellow().bold());
    }

    for report in &outcome.reports {
        let path = style(report.path.display()).blue();
        match &report.status {
            FileStatus::Checked(verdict) => {
                println!("{path}: {}", verdict_label(*verdict));
            }
            FileStatus::Unreadable(error) => {
                println!("{path}: {} ({error})", style("unreadable").yellow());
            }
        }
    }
}
