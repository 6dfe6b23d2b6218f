//! Character set building for password generation.

use super::GenerationRequest;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// All 32 printable ASCII punctuation characters.
pub const DEFAULT_SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Symbol alphabet in effect: the custom one if non-empty, else the default.
pub fn symbols(custom: &str) -> &str {
    if custom.is_empty() {
        DEFAULT_SYMBOLS
    } else {
        custom
    }
}

/// Build the character pool: lowercase, uppercase, digits, symbols.
pub fn build(request: &GenerationRequest) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();

    if request.include_lower {
        chars.extend(LOWERCASE.chars());
    }
    if request.include_upper {
        chars.extend(UPPERCASE.chars());
    }
    if request.include_digits {
        chars.extend(DIGITS.chars());
    }
    if request.include_symbols {
        chars.extend(symbols(&request.symbols).chars());
    }

    chars
}

/// Pool size without building the pool.
pub fn size(request: &GenerationRequest) -> usize {
    let mut size = 0;
    if request.include_lower {
        size += LOWERCASE.len();
    }
    if request.include_upper {
        size += UPPERCASE.len();
    }
    if request.include_digits {
        size += DIGITS.len();
    }
    if request.include_symbols {
        size += symbols(&request.symbols).chars().count();
    }
    size
}

/// Password entropy in bits.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}
