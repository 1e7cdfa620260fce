//! Field validators: pure accept/reject rules applied to one raw input line.
//!
//! Every validator takes raw text and either accepts it as a typed
//! [`FieldValue`] or rejects it with a [`Rejection`] suitable for showing to
//! the person at the console. Rejections are expected and recoverable; they
//! never escape the prompt loop.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::core::record::FieldValue;

/// Reason a raw input was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Input must not be empty. Please try again.")]
    Blank,

    #[error("Invalid input. Does not match the required format ({pattern}). Please try again.")]
    PatternMismatch { pattern: String },

    #[error("Invalid input. Please enter an integer. You entered: {input}")]
    NotAnInteger { input: String },

    #[error("Input out of range. Please enter a value between {low} and {high}.")]
    OutOfRange { value: i64, low: i64, high: i64 },

    #[error("Invalid input. Please enter 'Y' or 'N'.")]
    NotYesNo,
}

/// Errors raised while building a validator (never while validating input).
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("integer bounds are inverted: low {low} > high {high}")]
    InvertedBounds { low: i64, high: i64 },
}

/// One of the four fixed validation strategies.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Trimmed input must contain at least one character.
    NonBlank,
    /// Trimmed input must match `pattern` over its entire span.
    Pattern {
        /// Pattern as supplied by the caller, shown in rejections.
        pattern: String,
        /// `pattern` wrapped in `^(?:...)$`.
        anchored: Regex,
    },
    /// Input must parse as a base-10 integer within `[low, high]`.
    RangedInt { low: i64, high: i64 },
    /// Input must be `Y` or `N`, case-insensitive.
    YesNo,
}

impl Validator {
    /// Build a pattern validator, compiling the regex once.
    ///
    /// Patterns run in ASCII mode: `\d`, `\w` and `\s` only match ASCII.
    /// Constructs that could match arbitrary bytes (`.`, negated classes)
    /// need an explicit `(?u:...)` group.
    pub fn pattern(pattern: &str) -> Result<Self, ValidatorError> {
        let anchored = RegexBuilder::new(&format!("^(?:{pattern})$"))
            .unicode(false)
            .build()
            .map_err(|source| ValidatorError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self::Pattern {
            pattern: pattern.to_string(),
            anchored,
        })
    }

    /// Build a ranged-integer validator with inclusive bounds.
    pub fn ranged_int(low: i64, high: i64) -> Result<Self, ValidatorError> {
        if low > high {
            return Err(ValidatorError::InvertedBounds { low, high });
        }
        Ok(Self::RangedInt { low, high })
    }

    /// Validate one raw input line.
    pub fn validate(&self, raw: &str) -> Result<FieldValue, Rejection> {
        match self {
            Self::NonBlank => non_blank(raw).map(FieldValue::Text),
            Self::Pattern { pattern, anchored } => {
                matches_pattern(raw, anchored, pattern).map(FieldValue::Text)
            }
            Self::RangedInt { low, high } => ranged_int(raw, *low, *high).map(FieldValue::Int),
            Self::YesNo => yes_no(raw).map(FieldValue::Bool),
        }
    }

    /// Render the text shown before reading input for this validator.
    pub fn decorate_prompt(&self, text: &str) -> String {
        match self {
            Self::RangedInt { low, high } => format!("{text} [{low} - {high}]: "),
            Self::YesNo => format!("{text} (Y/N): "),
            Self::NonBlank | Self::Pattern { .. } => format!("{text}: "),
        }
    }
}

/// Strip leading and trailing ASCII whitespace and control characters.
///
/// Anything above U+0020 (including U+00A0) is kept.
pub fn trim_blank(raw: &str) -> &str {
    raw.trim_matches(|c: char| c <= ' ')
}

/// Accept the trimmed input if it is not empty.
pub fn non_blank(raw: &str) -> Result<String, Rejection> {
    let trimmed = trim_blank(raw);
    if trimmed.is_empty() {
        return Err(Rejection::Blank);
    }
    Ok(trimmed.to_string())
}

/// Accept the trimmed input if `anchored` matches it.
///
/// `anchored` must already be anchored at both ends; see [`Validator::pattern`].
pub fn matches_pattern(raw: &str, anchored: &Regex, pattern: &str) -> Result<String, Rejection> {
    let trimmed = trim_blank(raw);
    if anchored.is_match(trimmed) {
        return Ok(trimmed.to_string());
    }
    Err(Rejection::PatternMismatch {
        pattern: pattern.to_string(),
    })
}

/// Parse the trimmed input as an `i64` and check it lies in `[low, high]`.
///
/// Values that overflow `i64` are reported as not an integer.
pub fn ranged_int(raw: &str, low: i64, high: i64) -> Result<i64, Rejection> {
    let trimmed = trim_blank(raw);
    let value: i64 = trimmed.parse().map_err(|_| Rejection::NotAnInteger {
        input: trimmed.to_string(),
    })?;
    if value < low || value > high {
        return Err(Rejection::OutOfRange { value, low, high });
    }
    Ok(value)
}

/// Accept `Y`/`y` as true and `N`/`n` as false.
pub fn yes_no(raw: &str) -> Result<bool, Rejection> {
    match trim_blank(raw).to_ascii_uppercase().as_str() {
        "Y" => Ok(true),
        "N" => Ok(false),
        _ => Err(Rejection::NotYesNo),
    }
}
