//! Code to configure and run the interpreter, either over the lines of a
//! script file or interactively.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::box_tree_impl::box_tree_ast::ExprNode;
use crate::box_tree_impl::box_tree_execution::{
    EvalError, EvalLimits, ExecutionResult, Interpreter,
};
use crate::box_tree_impl::box_tree_recursive_descent_parsing::parse_statement;

/// Printed once before the first line is read.
pub const READY_MESSAGE: &str = "[funck] Ready.";

const PROMPT: &str = "> ";

/// Config for the interpreter. Instantiate via `InterpreterConfig::parse()`.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct InterpreterConfig {
    /// Read lines from this file instead of prompting for them.
    #[arg(short, long)]
    pub src_filepath: Option<String>,

    /// Give up on an evaluation after this many reduction steps. Without it,
    /// a divergent term never returns.
    #[arg(short, long)]
    pub max_steps: Option<u64>,

    /// Log every reduction step to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Errors that may be thrown when running the interpreter.
#[derive(Debug)]
pub enum RunError {
    IoError(std::io::Error),
    ReadlineError(ReadlineError),
    LoggingError(String),
}

/// Display trait implementation for RunError.
impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(io_err) => {
                return write!(f, "I/O error: {}", io_err);
            }

            Self::ReadlineError(readline_err) => {
                return write!(f, "Line editor error: {}", readline_err);
            }

            Self::LoggingError(logging_err_string) => {
                return write!(f, "Logging setup error: {}", logging_err_string);
            }
        }
    }
}

impl std::error::Error for RunError {}

/// Type conversions for errors.
impl From<std::io::Error> for RunError {
    fn from(value: std::io::Error) -> Self {
        return Self::IoError(value);
    }
}

impl From<ReadlineError> for RunError {
    fn from(value: ReadlineError) -> Self {
        return Self::ReadlineError(value);
    }
}

/// What happened to one input line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LineOutcome {
    Skipped,
    Bound { def_name: String },
    Evaluated { result: Box<ExprNode> },
    BindingParseError,
    ParseError,
    EvalError(EvalError),
}

impl LineOutcome {
    /// The text shown to the user for this outcome, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Skipped => return None,
            Self::Bound { def_name } => return Some(format!("[funck] Bound: {}", def_name)),
            Self::Evaluated { result } => return Some(format!("| {} |", result)),
            Self::BindingParseError => {
                return Some(String::from("[funck] Parse error in binding."))
            }
            Self::ParseError => return Some(String::from("[funck] Parse error.")),
            Self::EvalError(eval_error) => return Some(format!("[funck] {}", eval_error)),
        }
    }
}

/// Parses and executes one input line. A line that fails to parse leaves the
/// bindings untouched.
pub fn process_line(interpreter: &mut Interpreter, line: &str) -> LineOutcome {
    if line.is_empty() {
        return LineOutcome::Skipped;
    }

    let statement = match parse_statement(line) {
        Ok(statement) => statement,
        Err(_) => {
            debug!(line, "line failed to parse");
            if line.contains('=') {
                return LineOutcome::BindingParseError;
            }
            return LineOutcome::ParseError;
        }
    };

    match interpreter.execute_statement(statement) {
        Ok(ExecutionResult::Bound { def_name }) => {
            return LineOutcome::Bound { def_name: def_name };
        }
        Ok(ExecutionResult::Evaluated { result }) => {
            return LineOutcome::Evaluated { result: result };
        }
        Err(eval_error) => {
            warn!(%eval_error, "evaluation abandoned");
            return LineOutcome::EvalError(eval_error);
        }
    }
}

/// Feeds every line of `reader` through `process_line`, writing the messages
/// to `out`.
pub fn run_script<R: BufRead, W: Write>(
    interpreter: &mut Interpreter,
    reader: R,
    out: &mut W,
) -> Result<(), RunError> {
    writeln!(out, "{}", READY_MESSAGE)?;

    for line in reader.lines() {
        let line = line?;
        if let Some(message) = process_line(interpreter, &line).message() {
            writeln!(out, "{}", message)?;
        }
    }

    return Ok(());
}

/// Reads lines from the terminal until end of input. Ctrl-C abandons the line
/// being typed.
pub fn run_repl(interpreter: &mut Interpreter) -> Result<(), RunError> {
    let mut editor = DefaultEditor::new()?;
    println!("{}", READY_MESSAGE);

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }

                if let Some(message) = process_line(interpreter, &line).message() {
                    println!("{}", message);
                }
            }

            Err(ReadlineError::Interrupted) => {
                continue;
            }

            Err(ReadlineError::Eof) => {
                break;
            }

            Err(readline_err) => {
                return Err(readline_err.into());
            }
        }
    }

    return Ok(());
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) -> Result<(), RunError> {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    return tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| RunError::LoggingError(err.to_string()));
}

/// Run the interpreter (script or interactive) given an interpreter config.
pub fn run_interpreter(config: &InterpreterConfig) -> Result<(), RunError> {
    let mut interpreter = Interpreter::with_limits(EvalLimits {
        max_steps: config.max_steps,
    });

    match &config.src_filepath {
        Some(src_filepath) => {
            let reader = BufReader::new(File::open(src_filepath)?);
            let stdout = io::stdout();
            let mut out = stdout.lock();

            return run_script(&mut interpreter, reader, &mut out);
        }
        None => {
            return run_repl(&mut interpreter);
        }
    }
}
