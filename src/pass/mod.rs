//! Password generation, strength scoring and output.

pub mod charset;
mod generate;
pub mod output;
pub mod strength;

use std::fmt;

use thiserror::Error;
use zeroize::Zeroizing;

pub use generate::{generate, generate_batch, validate};
pub use strength::{Strength, StrengthAssessment, assess};

/// Generation failure. The message is the reason, shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("{0}")]
    InvalidConfiguration(&'static str),
}

pub const NO_CHARSET: &str = "no character set selected";
pub const ZERO_LENGTH: &str = "length must be greater than zero";

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    /// Custom symbol alphabet. Empty selects the default set.
    pub symbols: String,
}

/// A generated password. The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(Zeroizing<String>);

impl GeneratedPassword {
    pub(crate) fn new(value: String) -> Self {
        GeneratedPassword(Zeroizing::new(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep secrets out of debug output and logs.
impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.len())
    }
}
