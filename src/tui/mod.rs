//! Interactive TUI.

mod input;
mod menu;
mod text;

pub use input::*;
pub use menu::*;
pub use text::*;

use crate::app::App;
use crate::random::RandomSource;
use crate::settings::PreferenceStore;

/// Run TUI interactive mode.
pub fn run<S: PreferenceStore, R: RandomSource>(store: S, rng: &mut R) {
    let mut app = App::new(store);
    main_menu(&mut app, rng);
}
