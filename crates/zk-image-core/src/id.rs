// crates/zk-image-core/src/id.rs - Random identifiers for catalogued images
//
// Every image gets a 16 character token drawn from [0-9a-z]. The same token is
// the primary key of its metadata row and the stem of its file on disk, so the
// format doubles as a guard against ids that would escape the images directory.

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Symbols an identifier may contain, in generation order
pub const ID_ALPHABET: &[u8; 36] = b"1234567890abcdefghijklmnopqrstuvwxyz";

/// Exact length of every generated identifier
pub const ID_LENGTH: usize = 16;

/// Errors that can occur when validating an identifier
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdError {
    #[error("Empty ID not allowed")]
    EmptyId,

    #[error("Invalid ID length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid character '{ch}' in ID: {id}")]
    InvalidCharacter { ch: char, id: String },
}

/// Result type for ID operations
pub type IdResult<T> = Result<T, IdError>;

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"^[0-9a-z]{{{}}}$", ID_LENGTH)).expect("static id pattern")
    })
}

/// Identifier of a catalogued image (e.g. "k3v9x0c2m1qz7a4b")
///
/// Generation draws each symbol uniformly and independently. No collision
/// check is made against existing rows: with 36^16 possible values the odds
/// are negligible for a personal catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageId(String);

impl ImageId {
    /// Generate a fresh identifier from the thread-local RNG
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate an identifier from the given RNG
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let token = (0..ID_LENGTH)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        Self(token)
    }

    /// Parse and validate an identifier string
    pub fn parse<S: AsRef<str>>(s: S) -> IdResult<Self> {
        let s = s.as_ref();
        if s.is_empty() {
            return Err(IdError::EmptyId);
        }

        if !id_pattern().is_match(s) {
            if let Some(ch) = s.chars().find(|c| !is_id_char(*c)) {
                return Err(IdError::InvalidCharacter {
                    ch,
                    id: s.to_string(),
                });
            }
            return Err(IdError::InvalidLength {
                expected: ID_LENGTH,
                actual: s.chars().count(),
            });
        }

        Ok(Self(s.to_string()))
    }

    /// Check whether a string is a well-formed identifier
    pub fn is_valid(s: &str) -> bool {
        id_pattern().is_match(s)
    }

    /// File name of the stored image, e.g. "k3v9x0c2m1qz7a4b.jpg"
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase()
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ImageId {
    type Err = IdError;

    fn from_str(s: &str) -> IdResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ImageId {
    type Error = IdError;

    fn try_from(value: String) -> IdResult<Self> {
        Self::parse(value)
    }
}

impl From<ImageId> for String {
    fn from(id: ImageId) -> Self {
        id.0
    }
}

impl AsRef<str> for ImageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
