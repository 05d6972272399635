use std::error::Error;
use std::fmt;
use std::io;

/// Indicates that an error occurred while building the dictionary or while
/// picking a starter word.
#[derive(Debug)]
pub enum AnagramError {
    /// Indicates that the dictionary source could not be read. No dictionary
    /// is produced in this case.
    Io(io::Error),
    /// Indicates that a dictionary entry contained something other than ASCII
    /// lowercase letters.
    InvalidWord(String),
    /// Indicates that no word of the given length has enough one-letter-longer
    /// anagrams to serve as a starter word.
    NoStarterWord { word_length: usize },
}

impl fmt::Display for AnagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnagramError::Io(error) => write!(f, "Error reading the word list: {}", error),
            AnagramError::InvalidWord(word) => write!(
                f,
                "Invalid word {:?}: words must be ASCII lowercase letters only",
                word
            ),
            AnagramError::NoStarterWord { word_length } => write!(
                f,
                "No word of length {} has enough one-letter-longer anagrams",
                word_length
            ),
        }
    }
}

impl Error for AnagramError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AnagramError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for AnagramError {
    fn from(error: io::Error) -> AnagramError {
        AnagramError::Io(error)
    }
}
