use std::fs::File;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming a file to log into instead of stderr.
pub const LOG_FILE_ENV: &str = "FLAGPACKS_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "flagpacks=debug,info"
    } else {
        "info"
    }
}

/// Initialize tracing.
///
/// Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
/// overrides the level; `-v` raises the crate's own level to debug. When
/// `FLAGPACKS_LOG` names a file the logs are appended there instead.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let file = std::env::var(LOG_FILE_ENV).ok().and_then(|path| {
        match File::options().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: Failed to open log file {}: {}", path, e);
                None
            }
        }
    });

    let registry = tracing_subscriber::registry().with(filter);

    // try_init: tests may install a subscriber first.
    let _ = match file {
        Some(file) => registry
            .with(
                fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false)
                    .with_timer(UtcTime::rfc_3339())
                    .with_target(true),
            )
            .try_init(),
        None => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_timer(UtcTime::rfc_3339())
                    .with_target(false),
            )
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_crate_level() {
        assert_eq!(default_directive(false), "info");
        assert!(default_directive(true).starts_with("flagpacks=debug"));
    }
}
