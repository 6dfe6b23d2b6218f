use clap::Parser;

use passgen::cli::{self, Args, prompts};
use passgen::random::Csprng;
use passgen::settings::{FileStore, default_path};
use passgen::{exits, tui};

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let args = Args::parse();

    let path = args.config.clone().unwrap_or_else(default_path);
    let store = match FileStore::open(&path) {
        Ok(store) => store,
        Err(e) => {
            prompts::warn(&format!("Failed to load settings, using defaults: {}", e));
            FileStore::empty(&path)
        }
    };

    let mut rng = Csprng::from_entropy();

    if args.has_explicit_args() {
        std::process::exit(cli::run(args, store, &mut rng));
    }
    tui::run(store, &mut rng);
}
