//! List the glyphs of a font as a JSON map from code point to glyph name
//!
//! The output looks like this, with one entry per glyph in glyph order and
//! the `.notdef` glyph left out:
//!
//! ```text
//! {
//!   "0xf101": "home",
//!   "0xf102": "gear"
//! }
//! ```
//!
//! Glyphs are read through the [`GlyphSource`] trait, which is implemented
//! for parsed fonts ([`skrifa::FontRef`]), for font files on disk
//! ([`FontFile`]) and for plain lists of [`GlyphRecord`]s.
mod error;
pub mod export;
pub mod load;
pub mod namemap;
pub mod output;
pub mod record;
pub mod source;

pub use error::Error;
pub use export::{export, export_with, table_to_string, ExportOptions, NameEscaping};
pub use load::load_table;
pub use output::{export_font_file, json_path_for, write_table};
pub use record::{GlyphRecord, GlyphTable, NOTDEF};
pub use source::{FontFile, GlyphSource};
