#![forbid(unsafe_code)]

//! JSON output for machine consumption
//!
//! Result sets are written one JSON object per line unless pretty printing
//! is requested. Lint descriptors are exported by `Registry::write_json`.

use crate::engine::ResultSet;
use crate::types::LintSource;
use std::io::{self, Write};

/// Write one result set followed by a newline
pub fn write_result_set<W: Write>(
    mut writer: W,
    result_set: &ResultSet,
    pretty: bool,
) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, result_set)?;
    } else {
        serde_json::to_writer(&mut writer, result_set)?;
    }
    writer.write_all(b"\n")
}

/// Write the lint names as a schema record of boolean lint fields
pub fn write_schema<W: Write>(mut writer: W, names: &[String]) -> io::Result<()> {
    writeln!(writer, "Lints = SubRecord({{")?;
    for name in names {
        writeln!(writer, "    {:?}:LintBool(),", name)?;
    }
    writeln!(writer, "}})")
}

/// Write lint sources sorted by label, one per line
pub fn write_sources<W: Write>(mut writer: W, sources: &[LintSource]) -> io::Result<()> {
    let mut sorted = sources.to_vec();
    sorted.sort_by_key(|source| source.as_str());
    for source in sorted {
        writeln!(writer, "    {}", source)?;
    }
    Ok(())
}
