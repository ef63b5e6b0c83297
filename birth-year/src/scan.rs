//! Character classification helpers

use unicode_general_category::{GeneralCategory, get_general_category};

/// Checks if character belongs to the word class: letters, digits and underscore
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Checks if character is stripped as surrounding space
///
/// Unicode whitespace plus the information separators U+001C to U+001F.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn is_decimal(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Value of a decimal digit of any script (general category `Nd`)
///
/// Decimal digits are encoded in contiguous runs of whole `0..=9` sets, so the value is the
/// distance from the start of the run modulo 10.
pub fn digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        return c.to_digit(10);
    }

    if !is_decimal(c) {
        return None;
    }

    let mut offset = 0;
    let mut code = u32::from(c);
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }

    Some(offset % 10)
}

fn is_digit(c: char) -> bool {
    digit_value(c).is_some()
}

/// Iterator over maximal runs of decimal digits in a string
///
/// Created by [`digit_runs`].
#[derive(Debug, Clone)]
pub struct DigitRuns<'a> {
    rest: &'a str,
}

impl<'a> Iterator for DigitRuns<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.rest.find(is_digit)?;
        let tail = &self.rest[start..];
        let len = tail.find(|c: char| !is_digit(c)).unwrap_or(tail.len());

        let (run, rest) = tail.split_at(len);
        self.rest = rest;
        Some(run)
    }
}

/// Returns all maximal digit runs of `s` in order of appearance
pub fn digit_runs(s: &str) -> DigitRuns<'_> {
    DigitRuns { rest: s }
}
