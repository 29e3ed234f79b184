/// Usage line for one help topic.
pub fn usage_for(topic: &str) -> Option<&'static str> {
    match topic {
        "exit" => Some("exit: exit from Komodo. | Usage: \"exit\""),
        "clear" => Some("clear: clear screen Komodo. | Usage: \"clear\""),
        "kill" => Some("kill: kill - restart terminal Komodo. | Usage: \"kill\""),
        "title" => Some("title: set-title Terminal Komodo. | Usage: \"title\" | [<args>]"),
        "pawncc" => Some("pawncc: download a PawnCC compiler release. | Usage: \"pawncc\""),
        "gamemode" => {
            Some("gamemode: download a SA-MP/open.mp server package. | Usage: \"gamemode\"")
        }
        _ => None,
    }
}

/// Handles `help [<cmd>]`.
pub fn show(topic: &str) {
    if topic.is_empty() {
        println!("usage: help | help [<cmds>]");
        println!("cmds:");
        println!(" clear, exit, kill, title");
        println!(" gamemode, pawncc");
        return;
    }

    match usage_for(topic) {
        Some(usage) => println!("{usage}"),
        None => println!("help not found for: '{topic}'"),
    }
}
