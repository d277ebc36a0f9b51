//! Glyph records and the tables built from them

/// The name fonts give their "missing glyph" placeholder
pub const NOTDEF: &str = ".notdef";

/// A glyph's name and the Unicode code point it is encoded at, if any
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlyphRecord {
    pub code_point: Option<u32>,
    pub name: String,
}

impl GlyphRecord {
    pub fn new(code_point: impl Into<Option<u32>>, name: impl Into<String>) -> Self {
        GlyphRecord {
            code_point: code_point.into(),
            name: name.into(),
        }
    }

    /// Is this the `.notdef` placeholder glyph?
    pub fn is_sentinel(&self) -> bool {
        self.name == NOTDEF
    }
}

/// The exportable glyphs of a font, in the font's own glyph order
///
/// Sentinel glyphs are dropped on construction. Code points are not
/// deduplicated; if a source reports the same code point twice, both
/// records are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable(Vec<GlyphRecord>);

impl GlyphTable {
    pub fn iter(&self) -> std::slice::Iter<'_, GlyphRecord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<GlyphRecord> for GlyphTable {
    fn from_iter<I: IntoIterator<Item = GlyphRecord>>(iter: I) -> Self {
        GlyphTable(iter.into_iter().filter(|r| !r.is_sentinel()).collect())
    }
}

impl<'a> IntoIterator for &'a GlyphTable {
    type Item = &'a GlyphRecord;
    type IntoIter = std::slice::Iter<'a, GlyphRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
