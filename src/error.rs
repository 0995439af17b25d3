//! Crate error type

/// Transliteration, rating and artifact errors
#[derive(Debug)]
pub enum Error {
    /// A character no rewrite rule can map (input was not pre-filtered)
    UnknownCharacter { ch: char, word: String },
    /// Frequency service returned a non-success status or an incomplete payload
    RatingService(String),
    /// A persisted rating line is not `<latin> <cyrillic> <count>`
    MalformedRecord { line: usize, content: String },
    /// Artifact file I/O failure
    Io(std::io::Error),
    /// Invalid configuration value
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownCharacter { ch, word } => {
                write!(f, "unknown character {:?} in word {:?}", ch, word)
            }
            Error::RatingService(s) => write!(f, "rating service error: {}", s),
            Error::MalformedRecord { line, content } => {
                write!(f, "malformed rating record at line {}: {:?}", line, content)
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Config(s) => write!(f, "configuration error: {}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::RatingService(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
