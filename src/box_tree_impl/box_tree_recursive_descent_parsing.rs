//! Recursive descent parser that constructs lambda-calculus expressions in the
//! box-tree representation directly from the input text.
//!
//! Grammar:
//!
//! ```text
//! expr   := lambda | app | var
//! var    := (alpha | '_') (alnum | '_')*
//! lambda := '%' var '.' expr
//! app    := '<' expr '+' expr '>'
//! ```
//!
//! Every rule takes a start index and returns the parsed node with the index
//! just past it, or `None` having consumed nothing.

use std::fmt::Display;

use tracing::trace;

use crate::box_tree_impl::box_tree_ast::{ExprNode, Statement};
use crate::lexical_analysis::{peek_char, try_token_class, TokenClass};

/// Represents a parsing error. Deliberately carries no position or reason:
/// the only observable outcome of a failed parse is that it failed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ParseError;

/// Display trait implementation for ParseError.
impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "parse error");
    }
}

impl std::error::Error for ParseError {}

/// Tries to parse an expression that looks like `[IDENTIFIER]`.
fn try_var_rule(input_str: &str, start_idx: usize) -> Option<(Box<ExprNode>, usize)> {
    let (var_name, start_idx) = try_token_class(input_str, start_idx, TokenClass::Identifier)?;

    return Some((ExprNode::var(var_name), start_idx));
}

/// Tries to parse an expression that looks like `%[IDENTIFIER].[EXPR]`.
fn try_lambda_rule(input_str: &str, start_idx: usize) -> Option<(Box<ExprNode>, usize)> {
    let (_, start_idx) = try_token_class(input_str, start_idx, TokenClass::Lambda)?;
    let (formal_param, start_idx) =
        try_token_class(input_str, start_idx, TokenClass::Identifier)?;
    let (_, start_idx) = try_token_class(input_str, start_idx, TokenClass::Dot)?;
    let (fn_body, start_idx) = try_expr_rule(input_str, start_idx)?;

    return Some((ExprNode::fn_def(formal_param, fn_body), start_idx));
}

/// Tries to parse an expression that looks like `<[EXPR] + [EXPR]>`.
fn try_application_rule(input_str: &str, start_idx: usize) -> Option<(Box<ExprNode>, usize)> {
    let (_, start_idx) = try_token_class(input_str, start_idx, TokenClass::OpenApp)?;
    let (fn_body, start_idx) = try_expr_rule(input_str, start_idx)?;
    let (_, start_idx) = try_token_class(input_str, start_idx, TokenClass::Plus)?;
    let (actual_arg, start_idx) = try_expr_rule(input_str, start_idx)?;
    let (_, start_idx) = try_token_class(input_str, start_idx, TokenClass::CloseApp)?;

    return Some((ExprNode::fn_app(fn_body, actual_arg), start_idx));
}

/// Tries to parse according to the production `e -> lambda | app | var`. Only
/// the next non-whitespace character decides which production is tried.
fn try_expr_rule(input_str: &str, start_idx: usize) -> Option<(Box<ExprNode>, usize)> {
    match peek_char(input_str, start_idx) {
        Some('%') => return try_lambda_rule(input_str, start_idx),
        Some('<') => return try_application_rule(input_str, start_idx),
        _ => return try_var_rule(input_str, start_idx),
    }
}

/// Parses `input_str` as a single expression. Anything left unconsumed after
/// the expression, including trailing whitespace, is a parse error.
pub fn parse_expression(input_str: &str) -> Result<Box<ExprNode>, ParseError> {
    match try_expr_rule(input_str, 0) {
        Some((expr_node, end_idx)) if end_idx == input_str.len() => {
            return Ok(expr_node);
        }
        Some((_, end_idx)) => {
            trace!(end_idx, input_len = input_str.len(), "input left unconsumed");
            return Err(ParseError);
        }
        None => {
            return Err(ParseError);
        }
    }
}

/// Splits one input line into a binding or an evaluation statement. A line
/// containing `=` is a binding: the text before the first `=`, right-trimmed,
/// is the name and the rest must parse as a whole expression.
pub fn parse_statement(line: &str) -> Result<Statement, ParseError> {
    match line.split_once('=') {
        Some((def_name, def_body_str)) => {
            let def_name = def_name.trim_end_matches([' ', '\t', '\n', '\r']);
            let def_body = parse_expression(def_body_str)?;

            return Ok(Statement::Def {
                def_name: String::from(def_name),
                def_body: def_body,
            });
        }
        None => {
            let eval_body = parse_expression(line)?;
            return Ok(Statement::Eval {
                eval_body: eval_body,
            });
        }
    }
}
