use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{RasterError, Result};
use crate::types::Palette;

/// List the palette colours
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Print as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs) -> Result<()> {
    let stdout = io::stdout();
    write_palette(&mut stdout.lock(), args.json).map_err(|e| RasterError::Io {
        path: PathBuf::from("<stdout>"),
        message: format!("Failed to write palette: {}", e),
    })
}

/// Write the palette as text lines (`index name #RRGGBB`) or a JSON array.
fn write_palette<W: Write>(out: &mut W, json: bool) -> io::Result<()> {
    if json {
        let entries: Vec<_> = Palette::iter()
            .map(|(color, name, rgb)| {
                serde_json::json!({
                    "index": color.index(),
                    "name": name,
                    "hex": rgb.to_string(),
                    "rgb": rgb.to_array(),
                })
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        return writeln!(out);
    }

    for (color, name, rgb) in Palette::iter() {
        writeln!(out, "{} {:<6} {}", color.index(), name, rgb)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_listing() {
        let mut buf = Vec::new();
        write_palette(&mut buf, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "0 red    #FF0000");
        assert_eq!(lines[4], "4 orange #FFA400");
        assert_eq!(lines[8], "8 white  #FFFFFF");
    }

    #[test]
    fn test_json_listing() {
        let mut buf = Vec::new();
        write_palette(&mut buf, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[6]["name"], "brown");
        assert_eq!(entries[6]["hex"], "#A52A2A");
        assert_eq!(entries[6]["rgb"], serde_json::json!([165, 42, 42]));
    }

    #[test]
    fn test_failed_write_reported() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        assert!(write_palette(&mut Broken, true).is_err());
        assert!(write_palette(&mut Broken, false).is_err());
    }
}
