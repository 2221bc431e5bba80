//! Character classification for expression scanning
//!
//! Every input character maps to exactly one token class. Classes are derived
//! on the fly during the scan and never stored.

/// Token class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// ASCII digit `0`-`9`
    Digit,
    /// ASCII lowercase letter (a single-letter variable)
    Letter,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `+` or `-`: binary operator or unary sign depending on position
    AdditiveSign,
    /// `*`, `/` or `%`: always a binary operator
    Operator,
    /// ASCII whitespace, skipped by the scanner
    Whitespace,
    /// Anything else, including non-ASCII
    Invalid,
}

/// Classify a single character
pub fn classify(c: char) -> TokenClass {
    match c {
        '0'..='9' => TokenClass::Digit,
        'a'..='z' => TokenClass::Letter,
        '(' => TokenClass::OpenParen,
        ')' => TokenClass::CloseParen,
        '+' | '-' => TokenClass::AdditiveSign,
        '*' | '/' | '%' => TokenClass::Operator,
        c if c.is_ascii_whitespace() => TokenClass::Whitespace,
        _ => TokenClass::Invalid,
    }
}
