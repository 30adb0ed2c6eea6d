use clap::Parser;
use miette::Result;
use ochre::cli::{Cli, Commands};
use ochre::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Lookup(args) => ochre::cli::lookup::run(args, &printer)?,
        Commands::Group(args) => ochre::cli::group::run(args, &printer)?,
        Commands::Palette(args) => ochre::cli::palette::run(args, &printer)?,
        Commands::List(args) => ochre::cli::list::run(args, &printer)?,
        Commands::Css(args) => ochre::cli::css::run(args, &printer)?,
        Commands::Completions(args) => ochre::cli::completions::run(args)?,
    }

    Ok(())
}
