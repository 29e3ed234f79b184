//! Komodo Toolchain
//!
//! An interactive shell for SA-MP and open.mp game development: commands are
//! resolved with typo tolerance, and the package commands download versioned
//! compiler/server releases and unpack them automatically.

pub mod commands;
pub mod core;
pub mod error;
pub mod repl;
pub mod utils;
