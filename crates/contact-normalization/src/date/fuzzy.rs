//! Tolerant free-text date parsing.
//!
//! Handles month names ("April 5, 2004", "5th April 2004", "Apr/05/2004"),
//! year-first numeric dates ("2001/09/09"), spaced numeric dates
//! ("09 / 09 / 2001") and compact `YYYYMMDD`. Words that are neither numbers
//! nor month names are ignored.

use chrono::NaiveDate;

use super::resolve_two_digit_year;

const MONTH_NAMES: &[(&str, u32)] = &[
    ("jan", 1),
    ("january", 1),
    ("feb", 2),
    ("february", 2),
    ("mar", 3),
    ("march", 3),
    ("apr", 4),
    ("april", 4),
    ("may", 5),
    ("jun", 6),
    ("june", 6),
    ("jul", 7),
    ("july", 7),
    ("aug", 8),
    ("august", 8),
    ("sep", 9),
    ("sept", 9),
    ("september", 9),
    ("oct", 10),
    ("october", 10),
    ("nov", 11),
    ("november", 11),
    ("dec", 12),
    ("december", 12),
];

const ORDINAL_SUFFIXES: &[&str] = &["st", "nd", "rd", "th"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberToken {
    value: u32,
    digits: usize,
    ordinal: bool,
}

impl NumberToken {
    fn is_year_like(self) -> bool {
        !self.ordinal && (self.digits >= 3 || self.value > 31)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Number(NumberToken),
    Month(u32),
}

/// Parse free-text date input. Two-digit years go through the pivot.
pub fn parse_fuzzy_date(text: &str, pivot_year: u32) -> Option<NaiveDate> {
    let tokens = tokenize(text)?;

    let mut month_name = None;
    let mut numbers = Vec::new();
    for token in tokens {
        match token {
            Token::Month(month) => {
                if month_name.replace(month).is_some() {
                    return None;
                }
            }
            Token::Number(number) => numbers.push(number),
        }
    }

    let (year, month, day) = match (month_name, numbers.as_slice()) {
        (Some(month), [a, b]) => {
            let (day, year) = if a.ordinal || (!b.ordinal && b.is_year_like()) {
                (*a, *b)
            } else if b.ordinal || a.is_year_like() {
                (*b, *a)
            } else {
                (*a, *b)
            };
            (year, month, day.value)
        }
        (None, [a, b, c]) if a.is_year_like() => {
            let (month, day) = if b.value > 12 { (c, b) } else { (b, c) };
            (*a, month.value, day.value)
        }
        (None, [a, b, c]) => {
            let (day, month) = if b.value > 12 { (b, a) } else { (a, b) };
            (*c, month.value, day.value)
        }
        (None, [compact]) if compact.digits == 8 => {
            let value = compact.value;
            let year = NumberToken {
                value: value / 10_000,
                digits: 4,
                ordinal: false,
            };
            (year, (value / 100) % 100, value % 100)
        }
        _ => return None,
    };

    let year = if year.digits <= 2 {
        resolve_two_digit_year(year.value, pivot_year)
    } else {
        year.value
    };

    NaiveDate::from_ymd_opt(i32::try_from(year).ok().filter(|y| *y >= 1)?, month, day)
}

/// Split on whitespace, `/` and `,`; classify numbers and month names.
///
/// Returns `None` when a numeric token is too long to be part of a date.
fn tokenize(text: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    for raw in text.split(|c: char| c.is_whitespace() || c == '/' || c == ',') {
        if raw.is_empty() {
            continue;
        }
        let word = raw.to_ascii_lowercase();

        if let Some(number) = parse_number(&word) {
            tokens.push(Token::Number(number?));
        } else if let Some((_, month)) = MONTH_NAMES.iter().find(|(name, _)| *name == word) {
            tokens.push(Token::Month(*month));
        }
    }
    Some(tokens)
}

/// `Some(None)` marks a numeric token that cannot be a date part.
fn parse_number(word: &str) -> Option<Option<NumberToken>> {
    let (digits, ordinal) = match ORDINAL_SUFFIXES
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix))
    {
        Some(stem) => (stem, true),
        None => (word, false),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 8 || (ordinal && digits.len() > 2) {
        return Some(None);
    }

    Some(digits.parse().ok().map(|value| NumberToken {
        value,
        digits: digits.len(),
        ordinal,
    }))
}
