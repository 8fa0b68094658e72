use clap::Parser;
use miette::Result;
use scanfill::cli::{Cli, Commands};
use scanfill::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Draw(args) => scanfill::cli::draw::run(args, &printer)?,
        Commands::Palette(args) => scanfill::cli::palette::run(args)?,
        Commands::Completions(args) => scanfill::cli::completions::run(args)?,
    }

    Ok(())
}
