//! Draw command implementation.
//!
//! Loads a scene file, draws its shapes and exports the canvas as PPM.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::parser::{load_scene, Scene};
use crate::render::preview;
use crate::types::Draw;

/// Draw a scene file and export it as PPM
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Scene file (YAML, or JSON when the extension is .json)
    #[arg(required = true)]
    pub scene: PathBuf,

    /// Output name; `.ppm` is appended
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print a text preview of the canvas to stdout
    #[arg(long)]
    pub preview: bool,
}

pub fn run(args: DrawArgs, printer: &Printer) -> Result<()> {
    let scene = load_scene(&args.scene)?;
    printer.status(
        "Loaded",
        &format!(
            "{} ({}x{}, {})",
            display_path(&args.scene),
            scene.width,
            scene.height,
            plural(scene.shapes.len(), "shape", "shapes")
        ),
    );

    let mut canvas = scene.canvas();
    for (i, shape) in scene.shapes.iter().enumerate() {
        if let Err(e) = canvas.draw(shape) {
            printer.error("Failed", &format!("shape {} ({})", i + 1, shape.name()));
            return Err(e);
        }
    }

    if args.preview {
        print!("{}", preview(&canvas));
    }

    let path = canvas.export(output_name(&args, &scene))?;
    printer.success("Exported", &printer.cyan(&display_path(&path)));

    Ok(())
}

/// Export name: `--output`, then the scene's `output`, then the scene file
/// path without its extension.
fn output_name(args: &DrawArgs, scene: &Scene) -> PathBuf {
    args.output
        .clone()
        .or_else(|| scene.output.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| args.scene.with_extension(""))
}
