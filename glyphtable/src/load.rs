//! Read exported glyph tables back in
use indexmap::IndexMap;
use serde_json::Value;

use crate::{error::Error, export::UNENCODED_KEY};

/// Keys are `0x` followed by lowercase or uppercase hex digits only, and
/// must name a Unicode scalar value.
fn parse_key(key: &str) -> Result<u32, Error> {
    key.strip_prefix("0x")
        .filter(|hex| !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()))
        .and_then(|hex| u32::from_str_radix(hex, 16).ok())
        .filter(|&cp| char::from_u32(cp).is_some())
        .ok_or_else(|| Error::InvalidKey(key.to_string()))
}

/// Parse an exported table into a map from code point to glyph name
///
/// Entries keep their file order. Unencoded glyphs (key `-0x1`) are
/// skipped. If a code point appears more than once, the last entry's name
/// wins and the entry keeps the position of its first appearance.
pub fn load_table(text: &str) -> Result<IndexMap<u32, String>, Error> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(entries) = value else {
        return Err(Error::NotAnObject);
    };
    let mut table = IndexMap::new();
    for (key, name) in entries {
        if key == UNENCODED_KEY {
            continue;
        }
        let code_point = parse_key(&key)?;
        let Value::String(name) = name else {
            return Err(Error::InvalidName(key));
        };
        table.insert(code_point, name);
    }
    Ok(table)
}
