//! Writing glyph tables next to (or away from) their fonts
use std::path::{Path, PathBuf};

use crate::{
    error::Error,
    export::{export_with, ExportOptions},
    source::FontFile,
};

/// Where the table for a font goes: the font's file name with a `.json`
/// extension, in `output_dir` if given, otherwise beside the font.
pub fn json_path_for(font_path: &Path, output_dir: Option<&Path>) -> PathBuf {
    let destination = font_path.with_extension("json");
    match (output_dir, destination.file_name()) {
        (Some(dir), Some(file_name)) => dir.join(file_name),
        _ => destination,
    }
}

/// Export the glyph table of a font file, returning the text
pub fn export_font_file(font_path: &Path, options: ExportOptions) -> Result<String, Error> {
    let font = FontFile::open(font_path)?;
    let text = export_with(&font, options)?;
    log::debug!("Exported glyph table for {}", font.path().display());
    Ok(text)
}

/// Export the glyph table of a font file and write it out
///
/// Any existing file at the destination is overwritten. Nothing is
/// written unless the whole table was serialized.
pub fn write_table(
    font_path: &Path,
    output_dir: Option<&Path>,
    options: ExportOptions,
) -> Result<PathBuf, Error> {
    let text = export_font_file(font_path, options)?;
    let destination = json_path_for(font_path, output_dir);
    std::fs::write(&destination, text).map_err(Error::io(&destination))?;
    log::info!(
        "Wrote glyph table for {} to {}",
        font_path.display(),
        destination.display()
    );
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{load::load_table, source::tests::build_font};

    #[test]
    fn test_json_path() {
        assert_eq!(
            json_path_for(Path::new("Data/LineAwesome/la-solid-900.ttf"), None),
            PathBuf::from("Data/LineAwesome/la-solid-900.json")
        );
        assert_eq!(
            json_path_for(Path::new("fonts/Icons.v2.otf"), Some(Path::new("out"))),
            PathBuf::from("out/Icons.v2.json")
        );
        assert_eq!(
            json_path_for(Path::new("noextension"), None),
            PathBuf::from("noextension.json")
        );
    }

    #[test]
    fn test_write_table_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let font_path = dir.path().join("icons.ttf");
        std::fs::write(
            &font_path,
            build_font(3, Some(&[".notdef", "home", "gear"]), &[('\u{f101}', 1), ('\u{f102}', 2)]),
        )
        .unwrap();
        let json_path = dir.path().join("icons.json");
        std::fs::write(&json_path, "stale contents which are much longer than the table").unwrap();

        let written = write_table(&font_path, None, ExportOptions::default()).unwrap();
        assert_eq!(written, json_path);
        let text = std::fs::read_to_string(&json_path).unwrap();
        assert_eq!(text, "{\n  \"0xf101\": \"home\",\n  \"0xf102\": \"gear\"\n}");
        assert_eq!(load_table(&text).unwrap().len(), 2);
    }

    #[test]
    fn test_failed_export_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let font_path = dir.path().join("broken.ttf");
        std::fs::write(&font_path, b"not a font").unwrap();
        assert!(matches!(
            write_table(&font_path, None, ExportOptions::default()),
            Err(Error::Resource { .. })
        ));
        assert!(!dir.path().join("broken.json").exists());
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let font_path = dir.path().join("a.ttf");
        std::fs::write(&font_path, build_font(2, Some(&[".notdef", "A"]), &[('A', 1)])).unwrap();
        let missing = dir.path().join("no").join("such").join("dir");
        match write_table(&font_path, Some(&missing), ExportOptions::default()) {
            Err(Error::Io { path, .. }) => assert_eq!(path, missing.join("a.json")),
            other => panic!("expected I/O error, got {:?}", other),
        }
    }
}
