//! The interactive shell loop.

use crate::commands;
use crate::core::config::Config;
use crate::core::download::Downloader;
use crate::core::resolver::{self, Dispatch};
use crate::error::{ErrorKind, Result};
use crate::utils::terminal;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

const PROMPT: &str = "user:~$ ";

/// Runs the shell until the user confirms `exit`.
///
/// Every recoverable command error prints and returns to the prompt; only
/// `ErrorKind::Fatal` tears the loop down.
pub fn run(config: &Config) -> Result<()> {
    let downloader = Downloader::with_options(config.download.cleanup_partial);
    let mut editor = DefaultEditor::new()?;

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = editor.load_history(path);
    }

    terminal::set_title(terminal::DEFAULT_TITLE);
    println!("\x1b[4mWelcome to Komodo!\x1b[0m");

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            // End-of-input redisplays the prompt, same as an empty line.
            Err(ReadlineError::Eof) => continue,
            Err(e) => return Err(e.into()),
        };

        if !line.is_empty() {
            let _ = editor.add_history_entry(line.as_str());
        }

        let result = match resolver::resolve(&line) {
            Dispatch::Help { topic } => {
                terminal::set_command_title("help");
                commands::help::show(&topic);
                Ok(())
            }
            Dispatch::Pawncc => {
                terminal::set_command_title("pawncc");
                commands::pawncc::run(&downloader)
            }
            Dispatch::Gamemode => {
                terminal::set_command_title("gamemode");
                commands::gamemode::run(&downloader)
            }
            Dispatch::Clear => {
                terminal::set_command_title("clear");
                terminal::clear_screen();
                Ok(())
            }
            Dispatch::Kill => {
                terminal::set_command_title("kill");
                terminal::clear_screen();
                Ok(())
            }
            Dispatch::Title { title } => {
                if title.is_empty() {
                    println!("usage: title [<title>]");
                } else {
                    terminal::set_title(&title);
                }
                Ok(())
            }
            Dispatch::Exit => {
                terminal::set_command_title("exit");
                println!("exit");
                if confirm_exit(&mut editor)? {
                    break;
                }
                Ok(())
            }
            Dispatch::Suggest { command } => {
                terminal::set_command_title("undefined");
                println!("Did you mean: '{command}'?");
                Ok(())
            }
            Dispatch::NotFound => {
                terminal::set_command_title("not found");
                println!("{line} not found!");
                Ok(())
            }
            Dispatch::Empty => Ok(()),
        };

        if let Err(e) = result {
            if e.kind() == ErrorKind::Fatal {
                return Err(e);
            }
            eprintln!("Error: {e}");
        }
    }

    if let Some(ref path) = history_path {
        let _ = editor.save_history(path);
    }

    Ok(())
}

/// Exit takes a second `exit` line to go through.
fn confirm_exit(editor: &mut DefaultEditor) -> Result<bool> {
    match editor.readline(PROMPT) {
        Ok(line) => Ok(line == "exit"),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn history_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".komodo_history"))
}
