use std::sync::OnceLock;

use flexi_logger::{FileSpec, Logger, LoggerHandle};

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Start best-effort file logging under the OS temp directory.
///
/// The viewer owns the terminal once the alternate screen is entered,
/// so diagnostics go to a file instead of stderr. If the logger cannot
/// start, the app simply runs without one.
pub fn init() {
    let dir = std::env::temp_dir().join("lectern");

    let started = Logger::try_with_env_or_str("info").and_then(|logger| {
        logger
            .log_to_file(FileSpec::default().directory(&dir).basename("lectern"))
            .append()
            .start()
    });

    match started {
        // The handle must stay alive for the process lifetime
        Ok(handle) => {
            let _ = LOGGER.set(handle);
        }
        Err(err) => {
            eprintln!("warning: logging disabled: {err}");
        }
    }
}
