use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;

use textcheck::config::{Args, Command};
use textcheck::{expr, journal, search};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&args.log_level),
    )
    .init();

    match args.command {
        Command::Expr => {
            check_expression();
            Ok(())
        }
        Command::Busiest { input, output } => journal::process_file(&input, &output),
        Command::Find { input, output } => search::process_file(&input, &output),
    }
}

/// Read one line from stdin, validate it, print the verdict.
///
/// A read failure or immediate end-of-input counts as an invalid
/// expression; this path never fails, it only prints "incorrect".
fn check_expression() {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => {
            println!("incorrect");
            return;
        }
        Ok(_) => {}
    }

    // read_line keeps the terminator; the validator gets the bare expression
    let expr = line.strip_suffix('\n').unwrap_or(&line);
    let expr = expr.strip_suffix('\r').unwrap_or(expr);

    if expr::is_valid(expr) {
        println!("correct");
    } else {
        log::debug!("rejected expression: {:?}", expr);
        println!("incorrect");
    }
}
