//! JSON output for CLI commands
//!
//! One JSON object per line on stdout, UTF-8.

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_response_to(&mut io::stdout(), data)
}

/// Write a success response to any writer
pub fn write_response_to<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *writer, &response)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_is_one_json_line() {
        let mut buffer = Vec::new();
        write_response_to(&mut buffer, json!({"tables": []})).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));
        assert_eq!(output.lines().count(), 1);

        let parsed: Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["data"], json!({"tables": []}));
    }
}
