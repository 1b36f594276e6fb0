//! Evaluate lambda calculus bindings and expressions, one per line, and print
//! the results to standard output.
//!
//! Example usage:
//!
//! ```text
//! cargo run -- --max-steps 100000
//! cargo run -- --src-filepath demos/church_numerals.lc
//! ```

use clap::Parser;
use funck::end_to_end::{init_logging, run_interpreter, InterpreterConfig};

fn main() {
    let interpreter_config = InterpreterConfig::parse();

    let interpreter_result =
        init_logging(interpreter_config.verbose).and_then(|_| run_interpreter(&interpreter_config));

    if let Err(run_error) = interpreter_result {
        eprintln!("{}", run_error);
        std::process::exit(1);
    }
}
