// Brazilian Real amounts: "1.234,56" display, integer cents everywhere else.
//
// Reais as f64 only exist at the edges (`cents_to_reais`/`reais_to_cents`);
// parsing and formatting never go through floating point.
use crate::error::EngineError;
use crate::format::mask::only_digits;
use shared::models::MonetaryAmount;

pub const CURRENCY_SYMBOL: &str = "R$ ";
pub const DECIMAL_SEPARATOR: char = ',';
pub const THOUSANDS_SEPARATOR: char = '.';

/// Keystroke mode stops growing an amount past this many digits (ignoring leading zeros).
pub const MAX_TYPED_DIGITS: usize = 15;

/// Formats cents as "1.234,56", or "R$ 1.234,56" with the symbol.
/// Negative amounts carry the sign in front: "-R$ 1.234,56".
pub fn format_brl(cents: i64, include_symbol: bool) -> String {
    let abs = cents.unsigned_abs();
    let reais = group_thousands(abs / 100);
    let fraction = abs % 100;
    let sign = if cents < 0 { "-" } else { "" };
    let symbol = if include_symbol { CURRENCY_SYMBOL } else { "" };
    format!("{sign}{symbol}{reais}{DECIMAL_SEPARATOR}{fraction:02}")
}

/// Like `format_brl`, rendering `placeholder` for an absent amount.
pub fn format_brl_opt(cents: Option<i64>, include_symbol: bool, placeholder: &str) -> String {
    match cents {
        Some(cents) => format_brl(cents, include_symbol),
        None => placeholder.to_string(),
    }
}

pub fn format_amount(amount: MonetaryAmount, include_symbol: bool) -> String {
    format_brl(amount.cents(), include_symbol)
}

fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (idx, c) in raw.chars().enumerate() {
        if idx > 0 && (raw.len() - idx) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Parses typed or pasted BRL text into cents.
///
/// Everything but digits, ',' and '.' is dropped. When the last ',' or '.'
/// is followed by exactly two digits those are the cents; otherwise the whole
/// digit run is read as reais. A '-' before the first digit negates the
/// amount. Returns `None` when the text has no digits at all.
pub fn parse_brl(text: &str) -> Option<i64> {
    let mut negative = false;
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '-' if cleaned.is_empty() => negative = true,
            '0'..='9' | ',' | '.' => cleaned.push(c),
            _ => {}
        }
    }

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let (integer, fraction) = match cleaned.rfind(|c: char| c == ',' || c == '.') {
        Some(pos) if is_cents_group(&cleaned[pos + 1..]) => (&cleaned[..pos], &cleaned[pos + 1..]),
        _ => (cleaned.as_str(), ""),
    };

    let reais = accumulate_digits(integer);
    let cents = reais
        .saturating_mul(100)
        .saturating_add(accumulate_digits(fraction));
    Some(if negative { -cents } else { cents })
}

fn is_cents_group(tail: &str) -> bool {
    tail.len() == 2 && tail.chars().all(|c| c.is_ascii_digit())
}

fn accumulate_digits(text: &str) -> i64 {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d)))
}

/// Strict variant of `parse_brl` for callers that want a typed error.
pub fn parse_amount(text: &str) -> Result<MonetaryAmount, EngineError> {
    parse_brl(text)
        .map(MonetaryAmount::from_cents)
        .ok_or(EngineError::EmptyAmount)
}

/// Keypad-style entry: the digits typed so far are read as a cent count, so
/// "1", "15", "150", "1500" walk through 0,01 / 0,15 / 1,50 / 15,00.
/// A leading '-' negates. Accumulation saturates at `i64` bounds; the typed
/// length limit is enforced by `keystroke_within_limit`.
pub fn cents_from_keystrokes(text: &str) -> Option<i64> {
    let digits = only_digits(text);
    if digits.is_empty() {
        return None;
    }
    let cents = accumulate_digits(&digits);
    Some(if is_negative_entry(text) { -cents } else { cents })
}

/// True when keypad text starts with a minus sign.
pub fn is_negative_entry(text: &str) -> bool {
    text.trim_start().starts_with('-')
}

/// Digit count of `text` ignoring leading zeros.
pub fn significant_digits(text: &str) -> usize {
    only_digits(text).trim_start_matches('0').len()
}

/// Whether an edit may replace the `current` amount. Growing past
/// `MAX_TYPED_DIGITS` is refused; edits that shrink or keep the digit count
/// of a longer pasted value are always accepted.
pub fn keystroke_within_limit(current: Option<i64>, text: &str) -> bool {
    let typed = significant_digits(text);
    let current_len = match current {
        Some(cents) if cents != 0 => cents.unsigned_abs().to_string().len(),
        _ => 0,
    };
    typed <= MAX_TYPED_DIGITS || typed <= current_len
}

pub fn cents_to_reais(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Rounds half away from zero. Non-finite or out-of-range input yields `None`.
pub fn reais_to_cents(reais: f64) -> Option<i64> {
    let cents = (reais * 100.0).round();
    if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(cents as i64)
}
