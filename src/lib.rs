//! # quill
//!
//! quill is an interpreter for a small imperative toy language. A program is
//! a set of functions over 64-bit signed integers; the entry function `main`
//! receives one externally supplied integer argument and the interpreter
//! reports the integer it returns.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use logos::Logos;

use crate::{
    ast::Program,
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{core::Context, function::FunctionTable},
        lexer::{LexerExtras, Token},
        parser::statement::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `FuncDef`, `Stmt`, `Expr`, and `Cond`
/// types that represent the syntactic structure of source code as a tree.
/// The AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement, expression, and condition types for all language
///   constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for configuration, parsing, and evaluation.
///
/// This module defines all errors that can be raised while validating the
/// configuration, lexing, parsing, or evaluating code. It standardizes error
/// reporting and carries detailed information about failures, including
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure categories.
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, memory-mode
/// validation, and error handling to provide a complete runtime for program
/// execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for parsing and running programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses source text into a [`Program`].
///
/// The source is tokenized and then parsed into the AST. Parsing performs no
/// evaluation and no static checking beyond the grammar itself.
///
/// # Errors
/// Returns a `ParseError` if the source contains unrecognized characters or
/// does not match the grammar.
///
/// # Examples
/// ```
/// use quill::parse;
///
/// let program = parse("main(n) { return n + 1; }").unwrap();
/// assert_eq!(program.functions.len(), 1);
///
/// assert!(parse("main(n) { return ; }").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Runs a parsed program with the given integer argument.
///
/// The function table is built once from the program, the entry function is
/// invoked with `argument` bound to its sole formal parameter, and the value
/// it produces is returned. Anything the program prints goes to standard
/// output.
///
/// # Errors
/// Returns a `RuntimeError` if the program has no valid entry function or
/// any fault occurs during evaluation.
///
/// # Examples
/// ```
/// use quill::{parse, run};
///
/// let program = parse("main(n) { if (n <= 1) { return 1; } return n; }").unwrap();
///
/// assert_eq!(run(&program, 0).unwrap(), 1);
/// assert_eq!(run(&program, 5).unwrap(), 5);
/// ```
pub fn run(program: &Program, argument: i64) -> Result<i64, RuntimeError> {
    let mut context = Context::new(FunctionTable::build(program)?);
    context.run(argument)
}

/// Runs a parsed program, writing printed lines to the given stream.
///
/// Behaves like [`run`] but directs every `print` statement to `out`, which
/// lets hosts and tests capture the program's output.
///
/// # Errors
/// Returns a `RuntimeError` if the program has no valid entry function or
/// any fault occurs during evaluation.
///
/// # Examples
/// ```
/// use quill::{parse, run_with_output};
///
/// let program = parse("main(n) { print n; return 0; }").unwrap();
/// let mut out = Vec::new();
///
/// run_with_output(&program, 7, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "7\n");
/// ```
pub fn run_with_output(program: &Program,
                       argument: i64,
                       out: &mut dyn Write)
                       -> Result<i64, RuntimeError> {
    let mut context = Context::with_output(FunctionTable::build(program)?, out);
    context.run(argument)
}

/// Parses and runs a program in one step.
///
/// This is the convenience entry point used by the test suite and by
/// embedders that do not need to hold on to the AST.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quill::run_source;
///
/// assert_eq!(run_source("main(n) { return n * 2; }", 21).unwrap(), 42);
///
/// // 'x' is assigned without a prior declaration.
/// assert!(run_source("main(n) { x = 1; return x; }", 0).is_err());
/// ```
pub fn run_source(source: &str, argument: i64) -> Result<i64, Box<dyn std::error::Error>> {
    let program = parse(source)?;
    run(&program, argument).map_err(Into::into)
}
