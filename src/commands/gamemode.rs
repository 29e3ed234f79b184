use crate::core::acquire;
use crate::core::catalog::{self, Platform, SERVER_RELEASES};
use crate::core::download::Downloader;
use crate::error::Result;
use crate::utils::prompt;

/// Interactive `gamemode` command: platform, confirmation, release, download.
pub fn run(downloader: &Downloader) -> Result<()> {
    let Some(platform) = super::select_platform()? else {
        return Ok(());
    };
    download(downloader, platform)
}

/// Acquires one server release for a known platform. Also the entry point
/// for the non-interactive `komodo gamemode` subcommand.
pub fn download(downloader: &Downloader, platform: Platform) -> Result<()> {
    if !prompt::confirm(":: Do you want to continue downloading SA-MP?")? {
        return Ok(());
    }

    println!("Select the SA-MP version to download:");
    for release in &SERVER_RELEASES {
        println!(
            "[{}/{}] {}",
            release.key,
            release.key.to_ascii_lowercase(),
            release.name
        );
    }

    let selection = prompt::read_selection()?;
    let Some(release) = selection.and_then(catalog::server_release) else {
        println!("Invalid selection");
        return Ok(());
    };

    let package = release.package(platform);
    acquire::acquire(downloader, &package.url, &package.filename)
}
