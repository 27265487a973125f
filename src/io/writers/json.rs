use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::types::CheckResults;

const INDENT: &[u8] = b"    ";

fn write_pretty<W: Write>(writer: W, results: &CheckResults) -> Result<()> {
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    results.serialize(&mut ser)?;
    Ok(())
}

/// Serialize results as JSON with 4-space indentation, keys in insertion (check-list) order.
pub fn to_pretty_json(results: &CheckResults) -> Result<String> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, results)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Write the report followed by a newline.
pub fn write_report<W: Write>(mut writer: W, results: &CheckResults) -> Result<()> {
    write_pretty(&mut writer, results)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
