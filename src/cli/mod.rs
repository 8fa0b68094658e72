pub mod completions;
pub mod draw;
pub mod palette;

use clap::{Parser, Subcommand};

/// scanfill - Indexed-colour scanline rasterizer
#[derive(Parser, Debug)]
#[command(name = "scanfill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw a scene file and export it as PPM
    Draw(draw::DrawArgs),

    /// List the palette colours
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
