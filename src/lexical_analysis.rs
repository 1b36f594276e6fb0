//! Scanner helpers for the `%x.body` / `<f + a>` syntax. There is no separate
//! token stream: the parser asks for a token class at a byte index, and the
//! scanner skips whitespace and tries to match that class right there.

use lazy_static::lazy_static;
use regex::Regex;

/// The different classes of tokens that compose the language.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TokenClass {
    Identifier,
    Lambda,
    Dot,
    OpenApp,
    Plus,
    CloseApp,
    Whitespace,
}

/// Represents how to recognize a token class.
#[derive(Debug)]
pub struct TokenRule {
    pub token_class: TokenClass,
    regex: Regex,
}

// Every pattern is anchored, so a rule only ever matches at the start of the
// slice it is given.
lazy_static! {
    static ref TOKEN_RULES: Vec<TokenRule> = vec![
        TokenRule {
            token_class: TokenClass::Identifier,
            regex: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*")
                .expect("Unable to compile Identifier rule regex."),
        },
        TokenRule {
            token_class: TokenClass::Lambda,
            regex: Regex::new(r"^%").expect("Unable to compile Lambda rule regex."),
        },
        TokenRule {
            token_class: TokenClass::Dot,
            regex: Regex::new(r"^\.").expect("Unable to compile Dot rule regex."),
        },
        TokenRule {
            token_class: TokenClass::OpenApp,
            regex: Regex::new(r"^<").expect("Unable to compile OpenApp rule regex."),
        },
        TokenRule {
            token_class: TokenClass::Plus,
            regex: Regex::new(r"^\+").expect("Unable to compile Plus rule regex."),
        },
        TokenRule {
            token_class: TokenClass::CloseApp,
            regex: Regex::new(r"^>").expect("Unable to compile CloseApp rule regex."),
        },
        TokenRule {
            token_class: TokenClass::Whitespace,
            regex: Regex::new(r"^[ \t\r\n]+").expect("Unable to compile Whitespace rule regex."),
        },
    ];
}

/// Gets the rule for a specific token class.
fn get_rule_for_token_class(token_class: TokenClass) -> &'static TokenRule {
    return TOKEN_RULES
        .iter()
        .find(|token_rule| token_rule.token_class == token_class)
        .expect("Every token class has a rule.");
}

/// Returns the length of the match of `token_class` at the start of
/// `input_str`, if there is one.
fn match_len_at_start(input_str: &str, token_class: TokenClass) -> Option<usize> {
    return get_rule_for_token_class(token_class)
        .regex
        .find(input_str)
        .map(|match_obj| match_obj.end());
}

/// Returns the index of the first non-whitespace character at or after
/// `start_idx`. Only space, tab, CR and LF count as whitespace.
pub fn skip_whitespace(input_str: &str, start_idx: usize) -> usize {
    if start_idx >= input_str.len() {
        return input_str.len();
    }

    match match_len_at_start(&input_str[start_idx..], TokenClass::Whitespace) {
        Some(match_len) => return start_idx + match_len,
        None => return start_idx,
    }
}

/// Returns the next non-whitespace character at or after `start_idx`, if the
/// input has one.
pub fn peek_char(input_str: &str, start_idx: usize) -> Option<char> {
    let idx = skip_whitespace(input_str, start_idx);
    return input_str[idx..].chars().next();
}

/// Skips whitespace, then tries to match a token of the requested class.
/// Returns the token text and the index just past it. On `None` nothing has
/// been consumed, so the caller keeps its own `start_idx`.
pub fn try_token_class(
    input_str: &str,
    start_idx: usize,
    token_class: TokenClass,
) -> Option<(&str, usize)> {
    let token_start = skip_whitespace(input_str, start_idx);
    let match_len = match_len_at_start(&input_str[token_start..], token_class)?;

    if match_len == 0 {
        return None;
    }

    let token_end = token_start + match_len;
    return Some((&input_str[token_start..token_end], token_end));
}
