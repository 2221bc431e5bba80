//! Expression scanner
//!
//! A two-state finite-state machine over the characters of an expression,
//! plus a running parenthesis-balance counter. One transition per
//! non-whitespace character, with digit runs collapsed into a single step.

use crate::expr::token::{TokenClass, classify};

/// What the scanner expects next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// An operand must begin here: digit run, variable, unary sign or `(`
    ExpectOperand,
    /// A binary operator or `)` must appear here
    ExpectOperator,
}

/// Check whether `expr` is a well-formed arithmetic expression.
///
/// Grammar: single-letter lowercase variables, unsigned integer literals,
/// binary `+ - * / %`, chainable unary `+`/`-`, and parentheses. Whitespace
/// between tokens is ignored. Empty and whitespace-only inputs are invalid.
///
/// The scan is a single left-to-right pass; the first structural violation
/// rejects immediately. No panics, no allocation.
pub fn is_valid(expr: &str) -> bool {
    let mut state = State::ExpectOperand;
    let mut balance: i64 = 0;

    let mut chars = expr.chars().peekable();
    while let Some(c) = chars.next() {
        let class = classify(c);

        if class == TokenClass::Whitespace {
            continue;
        }

        match state {
            State::ExpectOperand => match class {
                TokenClass::Digit => {
                    // A maximal digit run is one operand
                    while chars.peek().is_some_and(|&n| n.is_ascii_digit()) {
                        chars.next();
                    }
                    state = State::ExpectOperator;
                }
                TokenClass::Letter => {
                    state = State::ExpectOperator;
                }
                TokenClass::OpenParen => {
                    balance += 1;
                    // Still expecting the operand, now inside the group
                }
                TokenClass::AdditiveSign => {
                    // Unary sign; the operand is still to come, so signs chain
                }
                _ => return false,
            },
            State::ExpectOperator => match class {
                TokenClass::AdditiveSign | TokenClass::Operator => {
                    state = State::ExpectOperand;
                }
                TokenClass::CloseParen => {
                    balance -= 1;
                    // The closed group is a completed operand
                }
                // Two operands in a row, e.g. "7a" or "(a+b)(c-d)"
                _ => return false,
            },
        }

        // A ')' before its matching '(' invalidates the whole string, even
        // if the balance would recover later
        if balance < 0 {
            return false;
        }
    }

    balance == 0 && state == State::ExpectOperator
}
