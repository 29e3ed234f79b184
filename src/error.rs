use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KomodoError>;

/// How a failure affects the shell loop: everything except `Fatal` prints
/// a message and returns control to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UserInput,
    FileSystem,
    Transport,
    Archive,
    Fatal,
}

#[derive(Error, Debug)]
pub enum KomodoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid selection: '{input}'")]
    InvalidSelection { input: String },

    #[error("cannot create '{path}': {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("download failed: {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("extraction failed: {path}: {message}")]
    Archive { path: PathBuf, message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl KomodoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KomodoError::InvalidSelection { .. } => ErrorKind::UserInput,
            KomodoError::Io(_)
            | KomodoError::CreateFile { .. }
            | KomodoError::WriteFile { .. }
            | KomodoError::Config { .. }
            | KomodoError::TomlParse(_)
            | KomodoError::TomlSerialize(_) => ErrorKind::FileSystem,
            KomodoError::Transport { .. } => ErrorKind::Transport,
            KomodoError::Archive { .. } => ErrorKind::Archive,
            KomodoError::Prompt(_) | KomodoError::Readline(_) => ErrorKind::Fatal,
        }
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        KomodoError::Config {
            message: message.into(),
        }
    }
}
