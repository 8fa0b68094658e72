use miette::Diagnostic;
use thiserror::Error;

use crate::types::{Color, Point};

/// Main error type for scanfill operations
#[derive(Error, Diagnostic, Debug)]
pub enum RasterError {
    #[error("Invalid colour index {0}")]
    #[diagnostic(
        code(scanfill::color),
        help("Colour indices run from 0 (red) to 8 (white)")
    )]
    InvalidColor(Color),

    #[error("Point {point} is out of bounds for a {width}x{height} canvas")]
    #[diagnostic(code(scanfill::bounds))]
    OutOfBounds {
        point: Point,
        width: i32,
        height: i32,
    },

    #[error("IO error: {0}")]
    #[diagnostic(code(scanfill::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(scanfill::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(scanfill::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RasterError>;
