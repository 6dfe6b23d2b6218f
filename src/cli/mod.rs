//! Flag-driven CLI.

mod args;
mod context;
pub mod prompts;

pub use args::Args;
pub use context::{CliError, Context};

use crate::random::RandomSource;
use crate::settings::PreferenceStore;

/// Run CLI mode. Returns the process exit code.
pub fn run<S: PreferenceStore, R: RandomSource>(args: Args, store: S, rng: &mut R) -> i32 {
    let mut ctx = Context::new(args, store);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match ctx.run(rng, &mut out) {
        Ok(()) => 0,
        Err(CliError::Aborted) => 0,
        Err(e) => {
            prompts::error(&format!("Error: {}", e));
            1
        }
    }
}
