//! Progress spinner for network waits.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Start a ticking spinner with `msg`, or a hidden one when `quiet`.
///
/// Callers must `finish_and_clear()` before logging results so the spinner
/// line does not interleave with output.
pub(crate) fn start(quiet: bool, msg: impl Into<String>) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
