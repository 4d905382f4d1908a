use std::io::Write;

use anyhow::Result;

use crate::api_client::LanguageRecord;

/// Escapes a text field so the emitted line stays a valid Rust string
/// literal even when the catalog ships a quote or backslash.
fn escape(field: &str) -> String {
    field.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders one record as a `Language` struct-literal entry for the
/// LANGUAGES static. Field order is fixed: name, code, native_name,
/// deprecated_codes.
pub fn render_entry(record: &LanguageRecord) -> String {
    let deprecated_codes: Vec<String> = record
        .deprecated_codes
        .iter()
        .map(|code| format!("\"{}\"", escape(code)))
        .collect();

    format!(
        "Language {{name: \"{}\", code: \"{}\", native_name: \"{}\", deprecated_codes: &[{}]}},",
        escape(&record.name),
        escape(&record.code),
        escape(&record.native_name),
        deprecated_codes.join(",")
    )
}

/// Writes one entry line per record, in input order.
pub fn write_entries<W: Write>(out: &mut W, records: &[LanguageRecord]) -> Result<()> {
    for record in records {
        writeln!(out, "{}", render_entry(record))?;
    }
    Ok(())
}
