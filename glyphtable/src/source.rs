//! Things we can enumerate glyphs from
use std::path::{Path, PathBuf};

use read_fonts::TableProvider;
use skrifa::{FontRef, GlyphId, GlyphId16};

use crate::{
    error::Error,
    namemap::{reverse_cmap, NameMap},
    record::GlyphRecord,
};

/// Anything which can list its glyphs in its own native order
pub trait GlyphSource {
    fn glyphs(&self) -> Result<Vec<GlyphRecord>, Error>;
}

impl GlyphSource for [GlyphRecord] {
    fn glyphs(&self) -> Result<Vec<GlyphRecord>, Error> {
        Ok(self.to_vec())
    }
}

impl GlyphSource for Vec<GlyphRecord> {
    fn glyphs(&self) -> Result<Vec<GlyphRecord>, Error> {
        self.as_slice().glyphs()
    }
}

impl<T: GlyphSource + ?Sized> GlyphSource for &T {
    fn glyphs(&self) -> Result<Vec<GlyphRecord>, Error> {
        (**self).glyphs()
    }
}

/// Glyphs of an OpenType font, in glyph ID order
impl GlyphSource for FontRef<'_> {
    fn glyphs(&self) -> Result<Vec<GlyphRecord>, Error> {
        let num_glyphs = self
            .maxp()
            .map_err(Error::resource("maxp table"))?
            .num_glyphs();
        let cmapping = reverse_cmap(self);
        let names = NameMap::new(self, num_glyphs, &cmapping);
        let records = (0..num_glyphs)
            .zip(names)
            .map(|(gid, name)| {
                let code_point = cmapping.get(&GlyphId::from(GlyphId16::new(gid))).copied();
                GlyphRecord::new(code_point, name)
            })
            .collect::<Vec<_>>();
        log::debug!(
            "Enumerated {} glyphs, {} encoded",
            records.len(),
            records.iter().filter(|r| r.code_point.is_some()).count()
        );
        Ok(records)
    }
}

/// A font file read into memory
///
/// The bytes are held until the `FontFile` is dropped; every `FontRef`
/// borrowed from it must be gone by then.
pub struct FontFile {
    path: PathBuf,
    backing: Vec<u8>,
}

impl FontFile {
    /// Read a font file from disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let backing = std::fs::read(path).map_err(Error::io(path))?;
        log::debug!("Read {} bytes from {}", backing.len(), path.display());
        Ok(FontFile {
            path: path.to_path_buf(),
            backing,
        })
    }

    /// Wrap font data which is already in memory
    pub fn from_bytes(path: impl Into<PathBuf>, backing: Vec<u8>) -> Self {
        FontFile {
            path: path.into(),
            backing,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the font; for a collection, the first font in it
    pub fn fontref(&self) -> Result<FontRef<'_>, Error> {
        FontRef::from_index(&self.backing, 0).map_err(Error::resource("font header"))
    }
}

impl GlyphSource for FontFile {
    fn glyphs(&self) -> Result<Vec<GlyphRecord>, Error> {
        self.fontref()?.glyphs()
    }
}
