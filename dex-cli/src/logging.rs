//! Logger setup for the CLI.
//!
//! All user-facing output goes through the `log` macros, so the logger is
//! also the output channel: message-only lines on stdout by default,
//! timestamped and level-tagged lines with `--verbose`, and an optional copy
//! of everything in a log file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::LevelFilter;

/// Writes to stdout and, when configured, to a file with ANSI escapes removed.
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = &mut self.file {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }
}

fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. `RUST_LOG`, when set, overrides the level
/// chosen by the flags.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let file = match logfile {
        Some(path) => Some(File::create(path)?),
        None => None,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(quiet, verbose));
    // HTTP internals are noisy at debug level
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
    builder
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}
