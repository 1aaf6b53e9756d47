//! GitHub Actions workflow commands written to stdout.

use std::io::Write;

/// Escape a message for use as workflow command data.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// `::error::` annotation line for `message`.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Print a plain informational line to the job log.
pub fn info(message: &str) {
    let _ = writeln!(std::io::stdout(), "{message}");
}
