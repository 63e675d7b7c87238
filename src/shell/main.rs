#![deny(clippy::all)]

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use simplelog::LevelFilter;
use simplelog::SimpleLogger;

#[derive(Parser)]
#[command(name = "xwinsel", version, about = "List and activate top-level X11 windows")]
struct Cli {
    /// Log protocol-level details to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every listable window as "<ident>\t<name>"
    List,
    /// Raise and focus the window with the given identifier (e.g. 0x1c00006)
    Activate { ident: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    SimpleLogger::init(level, simplelog::Config::default())?;

    match cli.command {
        Command::List => {
            let entries = winlist::switcher::enumerate().context("unable to list windows")?;

            for entry in entries {
                println!("{}\t{}", entry.ident(), entry.name());
            }
        }
        Command::Activate { ident } => {
            winlist::switcher::activate(&ident)
                .with_context(|| format!("unable to activate window {}", ident))?;
        }
    }

    Ok(())
}
