//! Integer base conversion for the converter view.
//!
//! Bases 2 through 36 are supported with digits 0-9 and A-Z, case
//! insensitive on input, uppercase on output. Invalid input is an expected
//! outcome, not an error: [`convert`] signals it with `None` and the panel
//! shows a fixed message in place of a result.

/// Digit alphabet shared by parsing and formatting.
const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Message shown whenever the current input has no value in the chosen base.
pub const INVALID_INPUT: &str = "Enter a valid non-negative integer for the selected base.";

/// Reads `text` as a non-negative integer in `from_base` and renders it in
/// `to_base`. Whitespace is trimmed and the markers `0b`, `0o`, `0x` are each
/// stripped once, in that order, regardless of the selected base. `None`
/// covers everything unconvertible: digits out of range for the base, bases
/// outside 2-36, empty input, and values too large to represent.
pub fn convert(text: &str, from_base: u32, to_base: u32) -> Option<String> {
    if !(2..=36).contains(&from_base) || !(2..=36).contains(&to_base) {
        return None;
    }
    let digits = strip_markers(text.trim());
    if digits.is_empty() {
        return None;
    }
    let value = parse_radix(digits, from_base)?;
    Some(to_radix(value, u128::from(to_base)))
}

fn strip_markers(text: &str) -> &str {
    let mut rest = text;
    for marker in ["0b", "0o", "0x"] {
        if let Some(head) = rest.get(..2) {
            if head.eq_ignore_ascii_case(marker) {
                rest = &rest[2..];
            }
        }
    }
    rest
}

fn parse_radix(digits: &str, base: u32) -> Option<u128> {
    let mut value: u128 = 0;
    for c in digits.chars() {
        let place = c.to_digit(base)?;
        value = value
            .checked_mul(u128::from(base))?
            .checked_add(u128::from(place))?;
    }
    Some(value)
}

fn to_radix(mut value: u128, base: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut out = String::new();
    while value > 0 {
        let digit = DIGITS[(value % base) as usize] as char;
        out.push(digit.to_ascii_uppercase());
        value /= base;
    }
    out.chars().rev().collect()
}

/// Interactive state of the converter view. Every knob change re-runs the
/// conversion, so the displayed result can never go stale.
#[derive(Debug, Clone)]
pub struct ConverterPanel {
    text: String,
    from_base: u32,
    to_base: u32,
    display: String,
}

impl Default for ConverterPanel {
    fn default() -> Self {
        Self {
            text: String::new(),
            from_base: 2,
            to_base: 10,
            display: String::new(),
        }
    }
}

impl ConverterPanel {
    /// A fresh panel: empty input, base 2 to base 10, nothing displayed yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn from_base(&self) -> u32 {
        self.from_base
    }
    pub fn to_base(&self) -> u32 {
        self.to_base
    }
    /// The current result, or [`INVALID_INPUT`] when the input has no value
    /// in the selected base. Empty until the first change arrives.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.refresh();
    }
    pub fn set_from_base(&mut self, base: u32) {
        self.from_base = base;
        self.refresh();
    }
    pub fn set_to_base(&mut self, base: u32) {
        self.to_base = base;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.display = match convert(&self.text, self.from_base, self.to_base) {
            Some(result) => result,
            None => INVALID_INPUT.to_string(),
        };
    }
}
