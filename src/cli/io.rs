//! JSON output for one-shot commands
//!
//! - Output: single JSON document via stdout
//! - UTF-8 only

use std::io::{self, Write};

use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Write a JSON document to stdout, followed by a newline
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let stdout = io::stdout();
    write_json_to(&mut stdout.lock(), value)
}

/// Write a JSON document to any writer
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)
        .map_err(|e| CliError::io_error(format!("Failed to encode output: {}", e)))?;
    writeln!(out).map_err(|e| CliError::io_error(e.to_string()))?;
    out.flush().map_err(|e| CliError::io_error(e.to_string()))?;
    Ok(())
}
