// src/models/table_filter/compare.rs

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Human-friendly string ordering used for text columns.
///
/// Runs of ASCII digits compare by numeric value ("item2" < "item10"). Letters
/// compare with case and accents folded away, so "Émile" sorts among the e's.
/// Ties are broken by accents (unaccented first), then lowercase before
/// uppercase, then by code point.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    primary_cmp(&fold(a), &fold(b))
        .then_with(|| accent_cmp(a, b))
        .then_with(|| case_cmp(a, b))
}

/// Lowercase, expand common ligatures, and strip combining marks.
fn fold(s: &str) -> String {
    s.to_lowercase()
        .replace('ß', "ss")
        .replace('æ', "ae")
        .replace('œ', "oe")
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Decomposed lowercase forms: a bare letter is a prefix of its accented
/// form, so "e" < "é".
fn accent_cmp(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.nfd().cmp(b.nfd())
}

fn primary_cmp(a: &str, b: &str) -> Ordering {
    let mut xs = a.chars().peekable();
    let mut ys = b.chars().peekable();

    loop {
        match (xs.peek().copied(), ys.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let ord = numeric_cmp(&take_digits(&mut xs), &take_digits(&mut ys));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.to_lowercase().cmp(y.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                xs.next();
                ys.next();
            }
        }
    }
}

fn take_digits(it: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = it.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

/// Compare two digit runs by value without parsing, so arbitrarily long runs
/// cannot overflow.
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        if x.is_lowercase() && y.is_uppercase() {
            return Ordering::Less;
        }
        if x.is_uppercase() && y.is_lowercase() {
            return Ordering::Greater;
        }
        return x.cmp(&y);
    }
    a.len().cmp(&b.len())
}
