use std::io::Write;

/// Title restored when no command is active.
pub const DEFAULT_TITLE: &str = "Komodo Toolchain";

/// Sets the terminal window title via the xterm escape sequence.
pub fn set_title(title: &str) {
    print!("\x1b]0;{title}\x07");
    let _ = std::io::stdout().flush();
}

/// Title shown while a command runs.
pub fn set_command_title(command: &str) {
    set_title(&format!("{DEFAULT_TITLE} | @ {command}"));
}

/// Clears the screen and homes the cursor. Shared by `clear` and `kill`.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
    let _ = std::io::stdout().flush();
}
