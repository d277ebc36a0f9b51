use std::collections::HashMap;

use read_fonts::TableProvider;
use skrifa::{FontRef, GlyphId, GlyphId16, MetadataProvider};

use crate::record::NOTDEF;

/// Glyph names for every glyph in a font, indexed by glyph ID
///
/// Names come from the `post` table where it has them. Glyphs it doesn't
/// name get a name derived from their code point (`uniXXXX` or `uXXXXX`),
/// or from their glyph ID if they are unencoded. Glyph 0 is always
/// `.notdef` in that case.
#[derive(Debug, Clone)]
pub struct NameMap(Vec<String>);

impl NameMap {
    /// Generate a new NameMap covering `num_glyphs` glyphs of a font
    pub fn new(font: &FontRef, num_glyphs: u16, cmapping: &HashMap<GlyphId, u32>) -> Self {
        let post = font.post().ok();
        let mut synthesized = 0;
        let names = (0..num_glyphs)
            .map(|gid| {
                let gid16 = GlyphId16::new(gid);
                // first check post, then do fallback
                if let Some(name) = post
                    .as_ref()
                    .and_then(|post| post.glyph_name(gid16))
                    .filter(|name| !name.is_empty())
                {
                    return name.to_string();
                }
                synthesized += 1;
                fallback_name(gid, cmapping.get(&GlyphId::from(gid16)).copied())
            })
            .collect();
        if synthesized > 0 {
            log::warn!(
                "No post table names for {} of {} glyphs, synthesizing names",
                synthesized,
                num_glyphs
            );
        }
        Self(names)
    }
}

/// Names in glyph ID order, one for each glyph the map was built for
impl IntoIterator for NameMap {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn fallback_name(gid: u16, codepoint: Option<u32>) -> String {
    match codepoint {
        Some(raw) if raw <= 0xFFFF => format!("uni{raw:04X}"),
        Some(raw) => format!("u{raw:X}"),
        None if gid == 0 => NOTDEF.to_string(),
        None => format!("glyph{:05}", gid),
    }
}

/// Map each encoded glyph to the code point it is encoded at
///
/// Multiple code points may map to the same glyph; we always keep the
/// lowest one.
pub fn reverse_cmap(font: &FontRef) -> HashMap<GlyphId, u32> {
    let mut reverse = HashMap::new();
    for (codepoint, gid) in font.charmap().mappings() {
        let val = reverse.entry(gid).or_insert(codepoint);
        *val = codepoint.min(*val);
    }
    reverse
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_names() {
        assert_eq!(fallback_name(0, None), ".notdef");
        assert_eq!(fallback_name(3, Some(0x41)), "uni0041");
        assert_eq!(fallback_name(4, Some(0xF101)), "uniF101");
        assert_eq!(fallback_name(5, Some(0x1F600)), "u1F600");
        assert_eq!(fallback_name(17, None), "glyph00017");
        // An encoded glyph 0 is named after its code point
        assert_eq!(fallback_name(0, Some(0x20)), "uni0020");
    }
}
