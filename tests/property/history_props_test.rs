//! Property-based tests for history bounds and persistence.

use passgen::history::History;
use passgen::settings::{FileStore, PreferenceStore, Settings};
use passgen::{Csprng, GenerationRequest, generate};
use proptest::prelude::*;
use tempfile::TempDir;

fn request(symbols: String) -> GenerationRequest {
    GenerationRequest {
        length: 6,
        include_symbols: true,
        symbols,
        ..Settings::default().request()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    // History never exceeds its limit and keeps the newest entries first.
    #[test]
    fn history_is_bounded_newest_first(limit in 0usize..8, pushes in 0usize..20, seed in any::<u64>()) {
        let mut rng = Csprng::seeded(seed);
        let mut history = History::new(limit);
        let mut generated = Vec::new();

        for _ in 0..pushes {
            let password = generate(&request(String::new()), &mut rng).unwrap();
            history.push(&password);
            generated.push(password.as_str().to_string());
        }

        let expected: Vec<&str> = generated.iter().rev().take(limit).map(String::as_str).collect();
        prop_assert_eq!(history.iter().collect::<Vec<_>>(), expected);
    }

    // Passwords drawn from separator-heavy symbol sets survive a file round trip.
    #[test]
    fn history_survives_file_store(symbols in "[,|=\\n]{1,4}", seed in any::<u64>()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings");
        let mut rng = Csprng::seeded(seed);

        let mut history = History::new(5);
        for _ in 0..3 {
            history.push(&generate(&request(symbols.clone()), &mut rng).unwrap());
        }

        let mut store = FileStore::open(&path).unwrap();
        history.save(&mut store);
        store.flush().unwrap();

        let loaded = History::load(&FileStore::open(&path).unwrap(), 5);
        prop_assert_eq!(
            loaded.iter().collect::<Vec<_>>(),
            history.iter().collect::<Vec<_>>()
        );
    }
}
