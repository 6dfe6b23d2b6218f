//! passgen: password generation from selected character classes, with a
//! strength estimate and a bounded history.
//!
//! The core is [`pass::generate`] and [`pass::assess`]. The rest is the
//! interactive and flag-driven shells around them.

pub mod app;
pub mod cli;
pub mod exits;
pub mod history;
pub mod pass;
pub mod random;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use pass::{
    GenerateError, GeneratedPassword, GenerationRequest, Strength, StrengthAssessment, assess,
    generate,
};
pub use random::{Csprng, RandomSource};
