//! Arithmetic expression validation
//!
//! Decides whether a line of text is a well-formed arithmetic expression over
//! single-letter lowercase variables, unsigned integer literals, the binary
//! operators `+ - * / %`, unary `+`/`-`, and parentheses. The verdict is a
//! plain yes/no; no position reporting, no evaluation.

pub mod scanner;
pub mod token;

pub use scanner::is_valid;
pub use token::{TokenClass, classify};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_entry_point() {
        assert!(is_valid("a+1"));
        assert!(!is_valid("a+"));
    }
}
