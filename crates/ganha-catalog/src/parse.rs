//! Numeric signals and collation keys derived from display strings.
//!
//! Manifest prices and discounts are free-form Portuguese display text.
//! These helpers pull out just enough to order offers; they never fail.
//! Unparseable input maps to a sentinel instead.

use std::sync::LazyLock;

use regex::Regex;

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+").expect("valid integer regex"));

/// Discount size in percent, from the first integer in `label`.
///
/// `"-50% OFF"` gives `50`. The sign only marks a reduction, so the magnitude
/// is returned. No integer (or one too large to read) gives `0`.
#[must_use]
pub fn discount_percent(label: &str) -> u64 {
    INTEGER_RE
        .find(label)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .map_or(0, i64::unsigned_abs)
}

/// Numeric price from a display string in European notation.
///
/// Everything except digits, `,`, `.` and `-` is dropped. Periods are then
/// thousands separators and are removed; the first comma becomes the decimal
/// point. `"1.199,00€"` gives `1199.0`.
///
/// Input that does not yield a finite number gives `f64::INFINITY`, so it
/// orders after every real price.
#[must_use]
pub fn price_value(display: &str) -> f64 {
    let kept: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    let normalized = kept.replace('.', "").replacen(',', ".", 1);

    parse_leading_float(&normalized)
        .filter(|v| v.is_finite())
        .unwrap_or(f64::INFINITY)
}

/// Reads the longest `-?digits(.digits)?` prefix of `s`.
///
/// Trailing junk after a valid number is ignored (`"12.5,3"` reads `12.5`).
/// Returns `None` when no digit starts the input.
fn parse_leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0usize;

    if bytes.first() == Some(&b'-') {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        } else if has_digits {
            // "12." reads as 12
            end = frac_start;
        }
    }

    if !has_digits {
        return None;
    }

    s[..end].trim_end_matches('.').parse::<f64>().ok()
}

/// Sort key approximating Portuguese collation.
///
/// Compared field by field: base letters first (case and accents ignored),
/// then accents (unaccented before accented), then case (lowercase first).
/// `"Água"` therefore sorts with the `a` words, after `"agua"`.
///
/// Accents are folded for the Latin-1 and common Latin Extended-A letters
/// (`å`, `ø`, `ý`, the `æ`/`œ`/`ß` ligatures among them). Letters outside that
/// table, such as Greek or Cyrillic, compare by code point after `z`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    base: String,
    accents: Vec<u8>,
    uppercase: Vec<bool>,
}

impl CollationKey {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut base = String::with_capacity(text.len());
        let mut accents = Vec::with_capacity(text.len());
        let mut uppercase = Vec::with_capacity(text.len());

        for c in text.chars() {
            let is_upper = c.is_uppercase();
            for lower in c.to_lowercase() {
                if let Some(letters) = expand_ligature(lower) {
                    for letter in letters {
                        base.push(letter);
                        accents.push(LIGATURE_RANK);
                        uppercase.push(is_upper);
                    }
                    continue;
                }
                let (letter, accent) = fold_accent(lower);
                base.push(letter);
                accents.push(accent);
                uppercase.push(is_upper);
            }
        }

        Self {
            base,
            accents,
            uppercase,
        }
    }
}

const LIGATURE_RANK: u8 = 9;

/// Ligatures sort as their spelled-out letters, after the plain spelling.
fn expand_ligature(c: char) -> Option<[char; 2]> {
    match c {
        'æ' => Some(['a', 'e']),
        'œ' => Some(['o', 'e']),
        'ß' => Some(['s', 's']),
        _ => None,
    }
}

/// Splits a lowercase letter into its base letter and an accent rank.
///
/// Ranks follow the Portuguese secondary order: plain, acute, grave,
/// circumflex, tilde, diaeresis, cedilla. Marks Portuguese never uses rank
/// after those: ring, stroke, caron.
fn fold_accent(c: char) -> (char, u8) {
    match c {
        'á' => ('a', 1),
        'à' => ('a', 2),
        'â' => ('a', 3),
        'ã' => ('a', 4),
        'ä' => ('a', 5),
        'é' => ('e', 1),
        'è' => ('e', 2),
        'ê' => ('e', 3),
        'ë' => ('e', 5),
        'í' => ('i', 1),
        'ì' => ('i', 2),
        'î' => ('i', 3),
        'ï' => ('i', 5),
        'ó' => ('o', 1),
        'ò' => ('o', 2),
        'ô' => ('o', 3),
        'õ' => ('o', 4),
        'ö' => ('o', 5),
        'ú' => ('u', 1),
        'ù' => ('u', 2),
        'û' => ('u', 3),
        'ü' => ('u', 5),
        'ç' => ('c', 6),
        'ñ' => ('n', 4),
        'å' => ('a', 7),
        'ø' => ('o', 8),
        'ý' => ('y', 1),
        'ÿ' => ('y', 5),
        'č' => ('c', 8),
        'š' => ('s', 8),
        'ž' => ('z', 8),
        other => (other, 0),
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
