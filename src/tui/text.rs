use crate::app::{App, CharClass, Notice};
use crate::pass::charset::{self, DEFAULT_SYMBOLS};
use crate::settings::{PreferenceStore, Settings};
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, YELLOW, box_bottom, box_line, box_line_center, box_opt, box_top,
    box_wrapped, print_rule,
};

pub const DEV_NAME: &str = "b1onicle-dev";
pub const WEBSITE_URL: &str = "https://github.com/b1onicle-dev/password-generator";

pub fn print_main_screen<S: PreferenceStore>(app: &App<S>) {
    let settings = app.settings();

    box_top("Password Generator");
    box_line(&format!("{BOLD}Generation Settings:{RESET}"));
    box_line(&format!(
        "  1) Password length: {}  ({}-{})",
        settings.length,
        Settings::MIN_LENGTH,
        Settings::MAX_LENGTH
    ));
    for (i, class) in CharClass::ALL.iter().enumerate() {
        let mark = if app.is_enabled(*class) { "x" } else { " " };
        box_line(&format!("  {}) [{}] {}", i + 2, mark, class.label()));
    }
    box_line(&format!("  6) Symbol set: {}", describe_symbols(&settings.symbol_set)));
    box_line(&format!("  7) History limit: {}", settings.history_limit));

    print_rule();
    box_line(&format!("{BOLD}Generated Password:{RESET}"));
    match app.password() {
        Some(password) => box_wrapped(password.as_str()),
        None => box_line(&format!("{DIM}(none){RESET}")),
    }
    let assessment = app.assessment();
    box_line(&format!(
        "Strength: {} ({}/6) • Entropy: {:.1} bits",
        assessment.strength,
        assessment.score,
        app.entropy_bits()
    ));

    print_rule();
    let copy = if app.can_copy() {
        "[c] copy".to_string()
    } else {
        format!("{DIM}[c] copy{RESET}")
    };
    box_line(&format!(
        "[Enter] generate  {}  [h] history ({})  [x] clear history",
        copy,
        app.history().len()
    ));
    box_line("[s] save settings  [a] about  [?] help  [q] quit");
    box_bottom();

    match app.notice() {
        Some(notice @ Notice::Error(_)) => println!("{RED}{}{RESET}", notice.text()),
        Some(notice @ Notice::Info(_)) => println!("{YELLOW}{}{RESET}", notice.text()),
        Some(notice @ Notice::Copied { .. }) => println!("{GREEN}{}{RESET}", notice.text()),
        None => println!(),
    }
}

fn describe_symbols(custom: &str) -> String {
    if custom.is_empty() {
        format!("default ({} chars)", DEFAULT_SYMBOLS.len())
    } else {
        let shown = charset::symbols(custom);
        format!("{} ({} chars)", shown, shown.chars().count())
    }
}

pub fn print_history<S: PreferenceStore>(app: &App<S>) {
    let history = app.history();
    box_top(&format!("History (newest first, limit {})", history.limit()));
    if history.is_empty() {
        box_line(&format!("{DIM}(empty){RESET}"));
    }
    for (i, entry) in history.iter().enumerate() {
        box_wrapped(&format!("{:>3}) {}", i + 1, entry));
    }
    box_bottom();
    println!("Press any key to return");
}

pub fn print_about() {
    box_top("About");
    box_line(&format!("Version: {}", env!("CARGO_PKG_VERSION")));
    box_line(&format!("Developer: {DEV_NAME}"));
    box_line(WEBSITE_URL);
    box_bottom();
    println!("Press any key to return");
}

pub fn print_help() {
    box_top("passgen");
    box_line_center("Password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Toggle character classes,");
    box_line("     set the length and generate, copy or review history.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -a) to generate");
    box_line("     passwords without the menu.");
    box_line("");
    box_line("KEYS:");
    box_opt("  1", "Set password length");
    box_opt("  2-5", "Toggle uppercase, lowercase, digits, symbols");
    box_opt("  6", "Set a custom symbol set (empty for default)");
    box_opt("  7", "Set how many passwords history keeps");
    box_opt("  Enter / g", "Generate a password");
    box_opt("  c", "Copy the password to the clipboard");
    box_opt("  h / x", "Show / clear history");
    box_opt("  s", "Save settings");
    box_opt("  q / Esc", "Quit");
    box_line("");
    box_line("USAGE:");
    box_line("  passgen [OPTIONS]    (see passgen --help)");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passgen -l 16 -a         One password, 16 chars, all classes");
    box_line("  passgen -l 20 -n 3 -LD   Three lowercase+digit passwords");
    box_line("  passgen -S --special '#$%' -l 8   Symbols from a custom set");
    box_line("  passgen --history        Show generated passwords");
    box_line("");
    box_bottom();
    println!("Press any key to return");
}
