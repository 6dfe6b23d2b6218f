//! Unit tests for CLI argument handling and the CLI context.

use clap::Parser;
use passgen::Csprng;
use passgen::cli::{Args, CliError, Context};
use passgen::settings::{MemoryStore, PreferenceStore};

fn args(list: &[&str]) -> Args {
    let mut argv = vec!["passgen"];
    argv.extend_from_slice(list);
    Args::try_parse_from(argv).unwrap()
}

fn run(list: &[&str], store: MemoryStore) -> (Result<(), CliError>, String, Context<MemoryStore>) {
    let mut ctx = Context::new(args(list), store);
    let mut out = Vec::new();
    let result = ctx.run(&mut Csprng::seeded(1), &mut out);
    (result, String::from_utf8(out).unwrap(), ctx)
}

// ─── Parsing ───

#[test]
fn test_no_args_means_interactive() {
    assert!(!args(&[]).has_explicit_args());
    assert!(!args(&["--config", "/tmp/x"]).has_explicit_args());
}

#[test]
fn test_short_flags_combine() {
    let a = args(&["-l", "20", "-n", "3", "-LD"]);
    assert_eq!(a.length, Some(20));
    assert_eq!(a.number, Some(3));
    assert!(a.lower && a.digits && !a.upper && !a.symbols);
    assert!(a.has_explicit_args());
}

#[test]
fn test_negative_length_is_rejected_by_parser() {
    assert!(Args::try_parse_from(["passgen", "-l", "-5"]).is_err());
}

#[test]
fn test_history_flags_conflict() {
    assert!(Args::try_parse_from(["passgen", "--history", "--clear-history"]).is_err());
}

// ─── Generation ───

#[test]
fn test_prints_requested_count_and_length() {
    let (result, out, _) = run(&["-q", "-l", "16", "-n", "3", "-a"], MemoryStore::new());
    result.unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.chars().count() == 16));
}

#[test]
fn test_class_flags_replace_saved_selection() {
    let mut store = MemoryStore::new();
    store.set("upper", "true".into());
    store.set("lower", "true".into());

    let (result, out, _) = run(&["-q", "-D", "-l", "40"], store);
    result.unwrap();
    assert!(out.trim_end().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_saved_settings_apply_without_flags() {
    let mut store = MemoryStore::new();
    store.set("length", "7".into());
    store.set("lower", "false".into());
    store.set("symbols", "true".into());
    store.set("symbol_set", "@".into());

    let (result, out, _) = run(&["-q", "-n", "1"], store);
    result.unwrap();
    assert_eq!(out.trim_end(), "@@@@@@@");
}

#[test]
fn test_special_replaces_default_symbols() {
    let (result, out, _) = run(&["-q", "-S", "--special", "%", "-l", "5"], MemoryStore::new());
    result.unwrap();
    assert_eq!(out.trim_end(), "%%%%%");
}

#[test]
fn test_zero_length_is_invalid_configuration() {
    let (result, out, _) = run(&["-q", "-l", "0"], MemoryStore::new());
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "length must be greater than zero");
    assert!(out.is_empty());
}

// ─── Persistence ───

#[test]
fn test_save_persists_effective_settings() {
    let (result, _, ctx) = run(&["-q", "--save", "-l", "24", "-U"], MemoryStore::new());
    result.unwrap();

    let store = ctx.store();
    assert_eq!(store.get("length").as_deref(), Some("24"));
    assert_eq!(store.get("upper").as_deref(), Some("true"));
    assert_eq!(store.get("lower").as_deref(), Some("false"));
}

#[test]
fn test_generated_passwords_go_to_history() {
    let (result, out, ctx) = run(&["-q", "-n", "2"], MemoryStore::new());
    result.unwrap();

    let printed: Vec<&str> = out.lines().collect();
    let history: Vec<&str> = ctx.history.iter().collect();
    assert_eq!(history, vec![printed[1], printed[0]]);
}

#[test]
fn test_history_flag_prints_newest_first() {
    let mut store = MemoryStore::new();
    store.set("history", "newest,older".into());

    let (result, out, _) = run(&["--history"], store);
    result.unwrap();
    assert_eq!(out, "newest\nolder\n");
}

#[test]
fn test_clear_history_empties_store() {
    let mut store = MemoryStore::new();
    store.set("history", "a,b".into());

    let (result, out, ctx) = run(&["-q", "--clear-history"], store);
    result.unwrap();
    assert!(out.is_empty());
    assert_eq!(ctx.store().get("history").as_deref(), Some(""));
}

#[test]
fn test_history_limit_alone_does_not_generate() {
    let mut store = MemoryStore::new();
    store.set("history", "a,b,c".into());

    let (result, out, ctx) = run(&["--history-limit", "1"], store);
    result.unwrap();
    assert!(out.is_empty());
    assert_eq!(ctx.store().get("history_limit").as_deref(), Some("1"));
    assert_eq!(ctx.store().get("history").as_deref(), Some("a"));
}

#[test]
fn test_save_rejects_invalid_settings() {
    let mut store = MemoryStore::new();
    store.set("length", "20".into());

    let (result, out, ctx) = run(&["-q", "--save", "-l", "0"], store);
    assert_eq!(result.unwrap_err().to_string(), "length must be greater than zero");
    assert!(out.is_empty());
    assert_eq!(ctx.store().get("length").as_deref(), Some("20"));
}

#[test]
fn test_save_without_classes_leaves_store_untouched() {
    let mut store = MemoryStore::new();
    store.set("lower", "false".into());

    let (result, _, ctx) = run(&["-q", "--save", "-l", "10"], store);
    assert_eq!(result.unwrap_err().to_string(), "no character set selected");
    assert_eq!(ctx.store().get("length"), None);
}

#[test]
fn test_quiet_with_history_limit_still_generates() {
    let (result, out, ctx) = run(&["-q", "--history-limit", "1"], MemoryStore::new());
    result.unwrap();

    assert_eq!(out.lines().count(), 1);
    assert_eq!(ctx.store().get("history_limit").as_deref(), Some("1"));
    assert_eq!(ctx.history.iter().collect::<Vec<_>>(), vec![out.trim_end()]);
}
