pub mod gamemode;
pub mod help;
pub mod pawncc;

use crate::core::catalog::Platform;
use crate::error::Result;
use crate::utils::prompt;

/// Shared platform prompt for the package commands.
pub(crate) fn select_platform() -> Result<Option<Platform>> {
    println!("Select platform:");
    println!("[L/l] Linux");
    println!("[W/w] Windows");

    let selection = prompt::read_selection()?;
    let platform = selection.and_then(Platform::from_selection);
    if platform.is_none() {
        println!("Invalid platform selection.");
    }
    Ok(platform)
}
