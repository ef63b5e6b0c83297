//! Birth year validation
//!
//! Classifies the raw birth year form input into either an age or a specific rejection reason.
//! Rules are applied in a fixed order and the first matching one wins:
//!
//! 1. blank input (after trimming) is [`BirthYearError::Empty`],
//! 2. any non-word character, including inner or trailing whitespace, is
//!    [`BirthYearError::SpecialChars`],
//! 3. no digit at all is [`BirthYearError::NoDigits`],
//! 4. otherwise the first run of digits is the birth year, which must be within
//!    [`MIN_BIRTH_YEAR`] and the current year.
//!
//! Letters mixed with digits are tolerated: `"1990abc"` is read as `1990`.

use thiserror::Error;

mod scan;

pub use scan::{DigitRuns, digit_runs, digit_value, is_space, is_word_char};

/// The earliest accepted birth year
pub const MIN_BIRTH_YEAR: u32 = 1900;

/// Reason the birth year was rejected
///
/// Displayed messages are the user facing texts shown in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BirthYearError {
    #[error("Không được để trống năm sinh")]
    Empty,
    #[error("Không được chứa ký tự đặc biệt hoặc khoảng trắng")]
    SpecialChars,
    #[error("Năm sinh phải chứa số")]
    NoDigits,
    #[error("Năm sinh phải từ 1900 trở lên")]
    TooOld,
    #[error("Năm sinh không được lớn hơn năm hiện tại")]
    Future,
}

/// Validation outcome: computed age or the rejection reason
pub type ValidationResult = Result<u32, BirthYearError>;

/// Validates the raw birth year input against the `current_year`, returning the age
pub fn validate(raw: &str, current_year: i32) -> ValidationResult {
    if raw.trim_matches(is_space).is_empty() {
        return Err(BirthYearError::Empty);
    }

    // Checked on the untrimmed input, trailing whitespace is rejected here
    if !raw.chars().all(is_word_char) {
        return Err(BirthYearError::SpecialChars);
    }

    let run = digit_runs(raw).next().ok_or(BirthYearError::NoDigits)?;

    // Overflowing runs are beyond any representable current year
    let Some(birth_year) = parse_run(run) else {
        return Err(BirthYearError::Future);
    };

    if birth_year < MIN_BIRTH_YEAR {
        return Err(BirthYearError::TooOld);
    }

    if i64::from(birth_year) > i64::from(current_year) {
        return Err(BirthYearError::Future);
    }

    // current_year >= birth_year >= MIN_BIRTH_YEAR here, so it is positive
    Ok(current_year.unsigned_abs() - birth_year)
}

/// Parses run of decimal digits, leading zeros allowed, `None` on overflow
fn parse_run(run: &str) -> Option<u32> {
    run.chars()
        .try_fold(0u32, |acc, c| acc.checked_mul(10)?.checked_add(digit_value(c)?))
}
