//! textcheck
//!
//! Small text-checking tools with one hard core: a single-pass syntactic
//! validator for arithmetic expressions.
//!
//! This library provides:
//! - Expression validation (two-state scanner, parenthesis balance)
//! - Entry-log analysis (busiest interval by sweep line)
//! - Phrase search with flexible separators

pub mod config;
pub mod expr;
pub mod journal;
pub mod search;

// Re-exports for clean public API
pub use config::{Args, Command};
pub use expr::is_valid;
pub use journal::{Peak, Visit, busiest_interval, parse_journal};
pub use search::annotate;
