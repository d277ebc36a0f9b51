//! Serialize glyph tables as `{"0x<code point>": "<glyph name>"}` text
use std::fmt::Write;

use crate::{
    error::Error,
    record::{GlyphRecord, GlyphTable},
    source::GlyphSource,
};

/// The key used for glyphs with no Unicode mapping
///
/// Font editors report these with a code point of -1, which renders in
/// signed hexadecimal as `-0x1`.
pub const UNENCODED_KEY: &str = "-0x1";

/// How glyph names are written into the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameEscaping {
    /// Write names exactly as the font has them, between quotes.
    ///
    /// A name containing `"`, `\` or control characters produces output
    /// that is not valid JSON.
    #[default]
    Verbatim,
    /// Write names as JSON string literals.
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub escaping: NameEscaping,
}

/// Render a code point as the key of a table entry
pub fn code_point_key(code_point: Option<u32>) -> String {
    match code_point {
        Some(cp) => format!("{:#x}", cp),
        None => UNENCODED_KEY.to_string(),
    }
}

fn push_entry(out: &mut String, record: &GlyphRecord, escaping: NameEscaping) {
    let key = code_point_key(record.code_point);
    // Writing to a String cannot fail
    let _ = match escaping {
        NameEscaping::Verbatim => writeln!(out, "  \"{}\": \"{}\",", key, record.name),
        NameEscaping::Json => writeln!(
            out,
            "  \"{}\": {},",
            key,
            serde_json::Value::String(record.name.clone())
        ),
    };
}

/// Serialize a glyph table
///
/// Entries are written in table order, one per line, and the separator
/// after the final entry is removed so that the result parses as JSON.
/// An empty table serializes as `{\n}`.
pub fn table_to_string(table: &GlyphTable, options: ExportOptions) -> String {
    let mut out = String::from("{\n");
    for record in table {
        push_entry(&mut out, record, options.escaping);
    }
    out.push('}');
    if out.ends_with("\",\n}") {
        let len = out.len();
        out.replace_range(len - 3..len - 2, "");
    }
    out
}

/// Export every non-`.notdef` glyph of a source to text
pub fn export_with(source: &impl GlyphSource, options: ExportOptions) -> Result<String, Error> {
    let table: GlyphTable = source.glyphs()?.into_iter().collect();
    if table.is_empty() {
        log::warn!("No glyphs to export besides .notdef");
    } else {
        log::debug!("Exporting {} glyphs", table.len());
    }
    Ok(table_to_string(&table, options))
}

/// Export every non-`.notdef` glyph of a source to text, names unescaped
pub fn export(source: &impl GlyphSource) -> Result<String, Error> {
    export_with(source, ExportOptions::default())
}
