//! Maps raw shell input to a command, tolerating single-character typos.

use crate::core::distance::levenshtein;

/// Commands the shell understands, in comparison order. The order matters:
/// distance ties resolve to the earliest entry.
pub const VOCABULARY: [&str; 7] = [
    "exit", "clear", "kill", "title", "help", "gamemode", "pawncc",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub command: &'a str,
    pub distance: usize,
}

/// Candidate with the smallest edit distance to `input`. Ties keep the
/// first candidate seen, so callers get a stable answer.
pub fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<MatchResult<'a>> {
    let mut best: Option<MatchResult<'a>> = None;
    for candidate in candidates {
        let distance = levenshtein(input, candidate);
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(MatchResult {
                command: candidate,
                distance,
            });
        }
    }
    best
}

/// Resolved meaning of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Help { topic: String },
    Pawncc,
    Gamemode,
    Clear,
    Exit,
    Kill,
    Title { title: String },
    Suggest { command: &'static str },
    NotFound,
    Empty,
}

/// Decides what an input line means.
///
/// `help` and `title` match by prefix and consume the rest of the line as
/// their argument; the other commands require a full-string match. Inputs
/// within edit distance 1 of a command produce a `Suggest` instead of
/// dispatching.
pub fn resolve(input: &str) -> Dispatch {
    if let Some(rest) = input.strip_prefix("help") {
        return Dispatch::Help {
            topic: rest.trim_start_matches(' ').to_string(),
        };
    }

    match input {
        "pawncc" => return Dispatch::Pawncc,
        "gamemode" => return Dispatch::Gamemode,
        "clear" => return Dispatch::Clear,
        "exit" => return Dispatch::Exit,
        "kill" => return Dispatch::Kill,
        _ => {}
    }

    if let Some(rest) = input.strip_prefix("title") {
        return Dispatch::Title {
            title: rest.trim_start_matches(' ').to_string(),
        };
    }

    if input.is_empty() {
        return Dispatch::Empty;
    }

    if let Some(best) = closest(input, &VOCABULARY) {
        if best.distance <= 1 && input != best.command {
            return Dispatch::Suggest {
                command: best.command,
            };
        }
    }

    Dispatch::NotFound
}
