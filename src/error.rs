use std::{error::Error, fmt::Display, io};

#[derive(Debug)]
pub enum GameRollError {
    NoDataDir,
    InvalidIndex(usize),
    Launch { name: String, source: io::Error },
    Json(serde_json::Error),
    IOError(io::Error),
}

impl Error for GameRollError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameRollError::NoDataDir => None,
            GameRollError::InvalidIndex(_) => None,
            GameRollError::Launch { ref source, .. } => Some(source),
            GameRollError::Json(ref source) => Some(source),
            GameRollError::IOError(ref source) => Some(source),
        }
    }
}

impl Display for GameRollError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameRollError::NoDataDir => write!(f, "unable to determine the data directory"),
            GameRollError::InvalidIndex(index) => write!(f, "no entry at position {}", index),
            GameRollError::Launch { name, source } => {
                write!(f, "failed to launch '{}': {}", name, source)
            }
            GameRollError::Json(ref source) => write!(f, "invalid game list: {}", source),
            GameRollError::IOError(ref source) => source.fmt(f),
        }
    }
}

impl From<io::Error> for GameRollError {
    fn from(source: io::Error) -> Self {
        GameRollError::IOError(source)
    }
}

impl From<serde_json::Error> for GameRollError {
    fn from(source: serde_json::Error) -> Self {
        GameRollError::Json(source)
    }
}
