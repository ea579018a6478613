use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "WITCHTERM_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Picks the log filter: `--log-level`, then `--verbose`, then `WITCHTERM_LOG`,
/// then `warn`.
fn filter_directive(log_level: Option<&str>, verbose: bool) -> String {
    if let Some(level) = log_level {
        return level.to_string();
    }
    if verbose {
        return "debug".to_string();
    }
    std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string())
}

/// Stderr with `\n` rewritten to `\r\n`, for raw mode.
struct RawStderr(io::Stderr);

impl Write for RawStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        write_crlf(&mut self.0, buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

fn write_crlf<W: Write>(out: &mut W, buf: &[u8]) -> io::Result<()> {
    for chunk in buf.split_inclusive(|b| *b == b'\n') {
        match chunk.strip_suffix(b"\n") {
            Some(line) => {
                out.write_all(line)?;
                out.write_all(b"\r\n")?;
            }
            None => out.write_all(chunk)?,
        }
    }
    Ok(())
}

/// Logs go to stderr so they never interleave with the prompt on stdout.
/// `raw` is set while the terminal is in raw mode.
pub fn init(log_level: Option<&str>, verbose: bool, raw: bool) {
    let directive = filter_directive(log_level, verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    let _ = if raw {
        builder.with_writer(|| RawStderr(io::stderr())).try_init()
    } else {
        builder.with_writer(io::stderr).try_init()
    };
}
