/// Write a code point to glyph name map for each of a set of fonts
///
/// For every font given, this writes a `.json` file with the same base name
/// beside the font (or into `--output-dir`), overwriting any file already
/// there. Fonts are processed one at a time; a font which can't be read is
/// reported and skipped, and the exit status is non-zero if any failed.
mod utils;

use clap::Parser;
use env_logger::Env;
use glyphtable::{export_font_file, write_table, ExportOptions, NameEscaping};
use std::path::PathBuf;
use utils::describe;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Escape glyph names so the output is always valid JSON
    #[clap(long = "escape-names")]
    escape_names: bool,

    /// Print the tables to standard output instead of writing files
    #[clap(long = "stdout", conflicts_with = "output_dir")]
    stdout: bool,

    /// Directory to write tables to, instead of beside each font
    #[clap(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Font files to list glyphs from
    #[clap(required = true)]
    fonts: Vec<PathBuf>,
}

impl Cli {
    fn options(&self) -> ExportOptions {
        ExportOptions {
            escaping: if self.escape_names {
                NameEscaping::Json
            } else {
                NameEscaping::Verbatim
            },
        }
    }
}

/// Process every font, carrying on past failures; returns how many failed
fn run(cli: &Cli) -> usize {
    let options = cli.options();
    let mut failures = 0;
    for font in &cli.fonts {
        let result = if cli.stdout {
            export_font_file(font, options).map(|text| println!("{}", text))
        } else {
            write_table(font, cli.output_dir.as_deref(), options).map(|_| ())
        };
        if let Err(e) = result {
            log::error!("{}", describe(&format!("processing {}", font.display()), &e));
            failures += 1;
        }
    }
    if failures > 0 {
        log::error!("{} of {} fonts failed", failures, cli.fonts.len());
    }
    failures
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if run(&cli) > 0 {
        std::process::exit(1);
    }
}
