use anyhow::{Context, Result};
use backtrace::Backtrace;
use log::{Level, LevelFilter};
use std::{
    convert::TryInto,
    fmt::Display,
    io::{self, BufRead, BufReader, Seek, SeekFrom, Write},
    path::Path,
};

use crate::dirs::log_file_path;

/// Log files are cut down to this size when the logger starts.
const MAX_LOG_FILE_LEN: usize = 1024 * 1024;

/// Writes log records into `~/.parkinglot/log/<name>.log`. Stdout is left
/// alone since it carries command responses.
pub fn install_logger(name: &str, level: LevelFilter) -> Result<()> {
    let path = log_file_path(name)?;
    if path.exists() {
        shrink_file(&path, MAX_LOG_FILE_LEN)
            .with_context(|| format!("failed to shrink {}", path.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{filename}:{lineno}] {prefix}{message}",
                prefix = match record.level() {
                    Level::Error => "Error: ",
                    Level::Warn => "Warn: ",
                    _ => "",
                },
                filename = record.file().unwrap_or_else(|| record.target()),
                lineno = record.line().unwrap_or(0),
                message = message
            ))
        })
        .level(level)
        .chain(
            fern::log_file(&path)
                .with_context(|| format!("failed to open {}", path.display()))?,
        )
        .apply()
        .context("failed to initialize the logger")?;

    std::panic::set_hook(Box::new(|info| {
        error!("{}", info);
        prettify_backtrace(Backtrace::new());
        let _ = write_panic_report(&mut io::stderr(), info);
    }));

    Ok(())
}

pub fn write_panic_report<W: Write, D: Display + ?Sized>(out: &mut W, info: &D) -> io::Result<()> {
    writeln!(out, "parkinglot panicked: {}", info)
}

/// The default level when the config file does not specify one.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    }
}

pub fn prettify_backtrace(backtrace: Backtrace) {
    for (i, frame) in backtrace.frames().iter().enumerate() {
        for symbol in frame.symbols() {
            if let Some(path) = symbol.filename() {
                let filename = path.to_str().unwrap_or("(non-utf8 path)");
                if filename.contains("/.rustup/")
                    || filename.contains("/.cargo/")
                    || filename.starts_with("/rustc/")
                {
                    continue;
                }

                error!(
                    "    #{} {}:{}, col {}",
                    i,
                    filename,
                    symbol.lineno().unwrap_or(0),
                    symbol.colno().unwrap_or(0),
                );
            }
        }
    }
}

/// Drops the head of the file so that at most `max_len` bytes remain,
/// cutting at a line boundary.
pub fn shrink_file(path: &Path, max_len: usize) -> Result<()> {
    let meta = std::fs::metadata(path)?;
    let current_len: usize = meta.len().try_into()?;
    if current_len <= max_len {
        return Ok(());
    }

    let skip_len = current_len - max_len;

    // Look for the nearest newline character.
    let mut file = std::fs::OpenOptions::new().read(true).open(path)?;
    file.seek(SeekFrom::Start(skip_len.try_into()?))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;

    // Copy contents after the newline character and replace the old file.
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut new_file = tempfile::NamedTempFile::new_in(dir)?;
    std::io::copy(&mut reader, &mut new_file)?;
    new_file.persist(path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_panic_report() {
        let mut out = Vec::new();
        write_panic_report(&mut out, "index out of bounds").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "parkinglot panicked: index out of bounds\n"
        );
    }

    #[test]
    fn test_shrink_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        std::fs::write(&path, "aaaa\nbbbb\ncccc\n").unwrap();

        shrink_file(&path, 100).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "aaaa\nbbbb\ncccc\n");

        // Cutting 7 bytes lands in the middle of "bbbb".
        shrink_file(&path, 8).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "cccc\n");
    }
}
