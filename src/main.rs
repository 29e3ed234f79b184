use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

use komodo::commands;
use komodo::core::catalog::Platform;
use komodo::core::config::Config;
use komodo::core::download::Downloader;
use komodo::error::KomodoError;
use komodo::repl;

#[derive(Parser)]
#[clap(name = "komodo")]
#[clap(about = "Komodo game-development toolchain shell")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a PawnCC compiler release without entering the shell
    Pawncc {
        /// Target platform: linux or windows (defaults to the configured OS)
        #[clap(long)]
        platform: Option<String>,
    },
    /// Download a SA-MP or open.mp server package without entering the shell
    Gamemode {
        /// Target platform: linux or windows (defaults to the configured OS)
        #[clap(long)]
        platform: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load(Path::new("."))?;

    let result = match cli.command {
        Some(Commands::Pawncc { platform }) => {
            one_shot(&config, platform, commands::pawncc::download)
        }
        Some(Commands::Gamemode { platform }) => {
            one_shot(&config, platform, commands::gamemode::download)
        }
        None => repl::run(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn one_shot(
    config: &Config,
    platform: Option<String>,
    command: fn(&Downloader, Platform) -> komodo::error::Result<()>,
) -> komodo::error::Result<()> {
    let platform: Platform = match platform {
        Some(name) => name.parse()?,
        None => config.default_platform().ok_or_else(|| {
            KomodoError::config_error("configured os is \"unknown\"; pass --platform")
        })?,
    };

    let downloader = Downloader::with_options(config.download.cleanup_partial);
    command(&downloader, platform)
}
