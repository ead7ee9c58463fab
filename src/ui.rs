//! Terminal presentation
//!
//! This module handles:
//! - Human-readable display of a resolved diff source
//! - A spinner for the remote refresh, which can take a while on slow networks

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::source::DiffSource;

/// Start a spinner on stderr
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Label/value rows describing a diff source, optional rows omitted
pub fn diff_source_rows(source: &DiffSource) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Kind:", source.kind().to_string())];

    match source {
        DiffSource::PublicUrl { url } => rows.push(("URL:", url.clone())),
        DiffSource::LocalFile { path } => rows.push(("Path:", path.display().to_string())),
        DiffSource::GitRevision(revision) => {
            rows.push(("Commit:", revision.commit.clone()));
            rows.push(("Snapshot:", revision.snapshot_file_path.clone()));
            let optional = [
                ("Remote:", revision.remote()),
                ("Branch:", revision.branch()),
                ("Tag:", revision.tag()),
            ];
            rows.extend(
                optional
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|v| (label, v.to_string()))),
            );
        }
    }

    rows
}

/// Print a diff source to stdout
pub fn display_diff_source(source: &DiffSource) {
    let label_style = Style::new().bold();
    let value_style = Style::new().cyan();

    for (label, value) in diff_source_rows(source) {
        println!(
            "{:<10} {}",
            label_style.apply_to(label),
            value_style.apply_to(value)
        );
    }
}
