//! Strength scoring.
//!
//! A fixed point table over length and the number of enabled classes. The
//! thresholds are kept as-is for compatibility; they are a heuristic, not an
//! entropy model (see `charset::entropy_bits` for that).

use std::fmt;

use super::GenerationRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    fn from_score(score: u8) -> Self {
        match score {
            5.. => Strength::VeryStrong,
            4 => Strength::Strong,
            2..=3 => Strength::Medium,
            1 => Strength::Weak,
            0 => Strength::VeryWeak,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthAssessment {
    /// 0 to 6.
    pub score: u8,
    pub strength: Strength,
}

/// Score a length and class selection.
pub fn assess(length: usize, upper: bool, lower: bool, digits: bool, symbols: bool) -> StrengthAssessment {
    let class_count = [upper, lower, digits, symbols].iter().filter(|&&on| on).count();
    let score = length_points(length) + class_points(class_count);

    StrengthAssessment {
        score,
        strength: Strength::from_score(score),
    }
}

/// Score the selection a request describes.
pub fn assess_request(request: &GenerationRequest) -> StrengthAssessment {
    assess(
        request.length,
        request.include_upper,
        request.include_lower,
        request.include_digits,
        request.include_symbols,
    )
}

fn length_points(length: usize) -> u8 {
    match length {
        16.. => 3,
        12..=15 => 2,
        8..=11 => 1,
        _ => 0,
    }
}

fn class_points(class_count: usize) -> u8 {
    match class_count {
        4 => 3,
        3 => 2,
        2 => 1,
        _ => 0,
    }
}
