use alchemy_core::*;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

mod render;
mod session;

use session::Session;

#[derive(Parser)]
#[command(name = "alchemy")]
#[command(about = "Alchemy workshop recipe and stock manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start without the seed recipes from the config file
    #[arg(long, global = true)]
    no_seed: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive workshop menu (default)
    Shell,

    /// Print the recipe list and exit
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the stock of every potion and exit
    Stock {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    alchemy_core::logging::init_with_level(level);

    let errors = config.validate();
    if !errors.is_empty() {
        eprintln!("Configuration errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::Config("Invalid configuration".into()));
    }

    let workshop = if cli.no_seed {
        Workshop::new()
    } else {
        Workshop::from_seeds(&config.seed)
    };

    match cli.command {
        Some(Commands::List { json }) => cmd_list(&workshop, json),
        Some(Commands::Stock { json }) => cmd_stock(&workshop, json),
        Some(Commands::Shell) | None => cmd_shell(workshop, &config),
    }
}

fn cmd_shell(workshop: Workshop, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(
        workshop,
        stdin.lock(),
        stdout.lock(),
        config.session.terminators.clone(),
    );
    session.run()
}

fn cmd_list(workshop: &Workshop, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();

    if json {
        let contents = serde_json::to_string_pretty(workshop.list_recipes())?;
        writeln!(out, "{}", contents)?;
    } else {
        render::recipe_list(&mut out, workshop.list_recipes())?;
    }
    Ok(())
}

fn cmd_stock(workshop: &Workshop, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();

    if json {
        let rows: Vec<StockRow> = workshop.stock_snapshot().collect();
        let contents = serde_json::to_string_pretty(&rows)?;
        writeln!(out, "{}", contents)?;
    } else {
        render::stock_table(&mut out, workshop.stock_snapshot())?;
    }
    Ok(())
}
