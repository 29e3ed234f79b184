use crate::core::acquire;
use crate::core::catalog::{self, Platform, PAWNCC_VERSIONS};
use crate::core::download::Downloader;
use crate::error::Result;
use crate::utils::prompt;

/// Interactive `pawncc` command: platform, confirmation, version, download.
pub fn run(downloader: &Downloader) -> Result<()> {
    let Some(platform) = super::select_platform()? else {
        return Ok(());
    };
    download(downloader, platform)
}

/// Acquires one PawnCC release for a known platform. Also the entry point
/// for the non-interactive `komodo pawncc` subcommand.
pub fn download(downloader: &Downloader, platform: Platform) -> Result<()> {
    if !prompt::confirm(":: Do you want to continue downloading PawnCC?")? {
        return Ok(());
    }

    println!("Select the PawnCC version to download:");
    for (index, version) in PAWNCC_VERSIONS.iter().enumerate() {
        let upper = (b'A' + index as u8) as char;
        println!("[{upper}/{}] PawnCC {version}", upper.to_ascii_lowercase());
    }

    let selection = prompt::read_selection()?;
    let Some(index) = selection.and_then(catalog::pawncc_index) else {
        println!("Invalid selection.");
        return Ok(());
    };

    let package = catalog::pawncc_package(PAWNCC_VERSIONS[index], platform);
    acquire::acquire(downloader, &package.url, &package.filename)
}
