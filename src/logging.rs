//! Log setup: console plus an append-only log file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::Error;

/// Writer copying every log line to the log file, when open, and stderr.
struct LogSink<C = io::Stderr> {
    file: Option<File>,
    console: C,
}

impl<C: Write> Write for LogSink<C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.file.as_mut() {
            Some(file) => {
                file.write_all(buf)?;
                // The file has the line; a broken console must not lose it.
                let _ = self.console.write_all(buf);
            }
            None => self.console.write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        let _ = self.console.flush();
        Ok(())
    }
}

/// Install the global logger. Level defaults to `info`, `RUST_LOG` overrides.
///
/// Lines are appended to `log_file`, which is created if needed. If it
/// cannot be opened the logger writes to stderr only and says so. The only
/// error is a logger that was already installed.
pub fn init(log_file: impl AsRef<Path>) -> Result<(), Error> {
    let path = log_file.as_ref();
    let opened = OpenOptions::new().create(true).append(true).open(path);
    let (file, open_err) = match opened {
        Ok(file) => (Some(file), None),
        Err(err) => (None, Some(err)),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        })
        .target(env_logger::Target::Pipe(Box::new(LogSink {
            file,
            console: io::stderr(),
        })))
        .try_init()?;

    if let Some(err) = open_err {
        log::warn!(
            "Cannot open log file {}: {}; logging to stderr only",
            path.display(),
            err
        );
    }
    Ok(())
}
