//! Plain-text PPM (P3) output.
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! r g b r g b ... (one trailing space per triple)
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{RasterError, Result};
use crate::types::{Palette, Rgb};

use super::Canvas;

/// Suffix appended to export destination names.
pub const PPM_EXTENSION: &str = "ppm";

/// Serialize a canvas as P3 text.
///
/// Only exported rows are written; the gutter is skipped.
pub fn write_ppm<W: Write>(canvas: &Canvas, mut out: W) -> std::io::Result<()> {
    let (width, height) = canvas.dimensions();

    writeln!(out, "P3")?;
    writeln!(out, "{} {}", width, height)?;
    writeln!(out, "255")?;

    for row in canvas.rows() {
        for &color in row {
            let Rgb { r, g, b } = Palette::rgb(color).unwrap_or(Rgb::new(0, 0, 0));
            write!(out, "{} {} {} ", r, g, b)?;
        }
        writeln!(out)?;
    }

    out.flush()
}

/// Serialize a canvas to an in-memory string.
pub fn to_ppm_string(canvas: &Canvas) -> String {
    let mut buf = Vec::new();
    let _ = write_ppm(canvas, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// File name for an export destination: the name as given plus `.ppm`.
pub fn ppm_path(name: impl AsRef<Path>) -> PathBuf {
    let mut path = name.as_ref().as_os_str().to_owned();
    path.push(".");
    path.push(PPM_EXTENSION);
    PathBuf::from(path)
}

/// Write a canvas to `<name>.ppm` and return the path written.
///
/// A failure part way through may leave a truncated file behind.
pub fn export(canvas: &Canvas, name: impl AsRef<Path>) -> Result<PathBuf> {
    let path = ppm_path(name);

    let file = File::create(&path).map_err(|e| RasterError::Io {
        path: path.clone(),
        message: format!("Failed to create file: {}", e),
    })?;

    write_ppm(canvas, BufWriter::new(file)).map_err(|e| RasterError::Io {
        path: path.clone(),
        message: format!("Failed to write PPM: {}", e),
    })?;

    Ok(path)
}

impl Canvas {
    /// Write this canvas to `<name>.ppm`. See [`export`].
    pub fn export(&self, name: impl AsRef<Path>) -> Result<PathBuf> {
        export(self, name)
    }
}
