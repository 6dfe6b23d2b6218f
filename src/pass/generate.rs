//! Password generation.

use zeroize::Zeroize;

use super::{GenerateError, GeneratedPassword, GenerationRequest, NO_CHARSET, ZERO_LENGTH, charset};
use crate::random::RandomSource;

/// Generate a single password.
///
/// Fails with `InvalidConfiguration` when no class is enabled (checked first)
/// or when `length` is zero.
pub fn generate<R: RandomSource>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<GeneratedPassword, GenerateError> {
    let mut chars = charset::build(request);
    let result = check(&chars, request.length).map(|()| sample(&chars, request.length, rng));
    chars.zeroize();
    result
}

/// Generate `count` passwords from one pool.
pub fn generate_batch<R: RandomSource>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> Result<Vec<GeneratedPassword>, GenerateError> {
    let mut chars = charset::build(request);
    let result = check(&chars, request.length).map(|()| {
        (0..count)
            .map(|_| sample(&chars, request.length, rng))
            .collect()
    });
    chars.zeroize();
    result
}

/// Check a request without generating anything.
pub fn validate(request: &GenerationRequest) -> Result<(), GenerateError> {
    if charset::size(request) == 0 {
        return Err(GenerateError::InvalidConfiguration(NO_CHARSET));
    }
    if request.length == 0 {
        return Err(GenerateError::InvalidConfiguration(ZERO_LENGTH));
    }
    Ok(())
}

fn check(chars: &[char], length: usize) -> Result<(), GenerateError> {
    if chars.is_empty() {
        return Err(GenerateError::InvalidConfiguration(NO_CHARSET));
    }
    if length == 0 {
        return Err(GenerateError::InvalidConfiguration(ZERO_LENGTH));
    }
    Ok(())
}

fn sample<R: RandomSource>(chars: &[char], length: usize, rng: &mut R) -> GeneratedPassword {
    log::debug!("generating {} chars from a pool of {}", length, chars.len());

    let mut buf = String::with_capacity(length);
    buf.extend((0..length).map(|_| random_char(chars, rng)));
    GeneratedPassword::new(buf)
}

#[inline]
fn random_char<R: RandomSource>(chars: &[char], rng: &mut R) -> char {
    chars[rng.index(chars.len())]
}
