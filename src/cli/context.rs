//! CLI context - bundles arguments, settings, history and the store.

use std::io::{self, Write};
use std::ops::ControlFlow;

use copypasta::ClipboardContext;
use thiserror::Error;

use super::{Args, prompts};
use crate::history::History;
use crate::pass::{self, GenerateError, GeneratedPassword, charset, output, strength};
use crate::random::RandomSource;
use crate::settings::{KEY_HISTORY_LIMIT, PreferenceStore, Settings, StoreError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("aborted")]
    Aborted,
}

/// Application context for CLI mode.
pub struct Context<S: PreferenceStore> {
    pub settings: Settings,
    pub history: History,
    args: Args,
    store: S,
}

impl<S: PreferenceStore> Context<S> {
    pub fn new(args: Args, store: S) -> Self {
        let settings = Settings::load(&store);
        let history = History::load(&store, settings.history_limit);
        Self {
            settings,
            history,
            args,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run CLI, writing passwords to `out`.
    pub fn run<R: RandomSource, W: Write>(&mut self, rng: &mut R, out: &mut W) -> Result<(), CliError> {
        prompts::set_quiet(self.args.quiet);

        if self.handle_history(out)?.is_break() {
            return Ok(());
        }
        self.apply_flags();
        if self.args.save {
            pass::validate(&self.settings.request())?;
            self.settings.save(&mut self.store);
            self.store.flush()?;
            prompts::settings_saved();
        }
        self.generate_output(rng, out)
    }

    fn handle_history<W: Write>(&mut self, out: &mut W) -> Result<ControlFlow<()>, CliError> {
        if let Some(limit) = self.args.history_limit {
            self.settings.history_limit = limit;
            self.history.set_limit(limit);
            self.store.set(KEY_HISTORY_LIMIT, limit.to_string());
            self.history.save(&mut self.store);
            self.store.flush()?;
        }

        if self.args.clear_history {
            self.history.clear();
            self.history.save(&mut self.store);
            self.store.flush()?;
            prompts::history_cleared();
            return Ok(ControlFlow::Break(()));
        }

        if self.args.history {
            for entry in self.history.iter() {
                writeln!(out, "{}", entry)?;
            }
            return Ok(ControlFlow::Break(()));
        }

        // A bare limit change is a complete command.
        if self.args.history_limit.is_some() && !self.generation_requested() {
            return Ok(ControlFlow::Break(()));
        }

        Ok(ControlFlow::Continue(()))
    }

    fn generation_requested(&self) -> bool {
        self.args.length.is_some()
            || self.args.number.is_some()
            || self.args.any_class()
            || self.args.special.is_some()
            || self.args.board
            || self.args.quiet
            || self.args.save
    }

    /// Apply CLI flags to settings. Class flags, when present, replace the
    /// saved selection entirely.
    fn apply_flags(&mut self) {
        if let Some(len) = self.args.length {
            self.settings.length = len;
        }

        if self.args.any_class() {
            let all = self.args.all;
            self.settings.include_upper = all || self.args.upper;
            self.settings.include_lower = all || self.args.lower;
            self.settings.include_digits = all || self.args.digits;
            self.settings.include_symbols = all || self.args.symbols;
        }

        if let Some(ref chars) = self.args.special {
            self.settings.symbol_set = chars.clone();
        }
    }

    fn generate_output<R: RandomSource, W: Write>(&mut self, rng: &mut R, out: &mut W) -> Result<(), CliError> {
        let request = self.settings.request();
        let count = self.args.number.unwrap_or(1);
        let passwords = pass::generate_batch(&request, count, rng)?;

        for password in &passwords {
            self.history.push(password);
        }
        self.history.save(&mut self.store);
        if let Err(e) = self.store.flush() {
            prompts::warn(&format!("Failed to save history: {}", e));
        }

        if self.args.board {
            self.copy_or_print(&passwords, out)?;
        } else {
            output::write_lines(out, &passwords)?;
        }

        prompts::strength(
            &strength::assess_request(&request),
            charset::entropy_bits(request.length, charset::size(&request)),
        );
        Ok(())
    }

    fn copy_or_print<W: Write>(&self, passwords: &[GeneratedPassword], out: &mut W) -> Result<(), CliError> {
        let mut ctx = match ClipboardContext::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                log::warn!("clipboard unavailable: {}", e);
                if !prompts::clipboard_fallback_prompt() {
                    return Err(CliError::Aborted);
                }
                output::write_lines(out, passwords)?;
                return Ok(());
            }
        };

        match output::to_clipboard(&mut ctx, passwords) {
            Ok(()) => prompts::clipboard_copied(),
            Err(e) => prompts::clipboard_error(&e),
        }
        Ok(())
    }
}
