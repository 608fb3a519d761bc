use std::iter::Peekable;

use crate::{
    ast::{FuncDef, Program, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            cond::parse_condition,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a complete program.
///
/// A program is a non-empty sequence of function definitions. The parser
/// consumes the entire token stream; trailing tokens that do not begin a
/// function definition are reported as errors.
///
/// Grammar: `program := funcdef+`
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns a `ParseError` if the source contains no function definitions or
/// any definition fails to parse.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut functions = Vec::new();
    while tokens.peek().is_some() {
        functions.push(parse_funcdef(tokens)?);
    }
    if functions.is_empty() {
        return Err(ParseError::EmptyProgram);
    }
    Ok(Program { functions })
}

/// Parses a single function definition.
///
/// Grammar: `funcdef := ident "(" (ident ("," ident)*)? ")" block`
///
/// The body is the statement list of the braced block following the
/// parameter list.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the function name.
///
/// # Returns
/// The parsed [`FuncDef`].
pub fn parse_funcdef<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FuncDef>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let name = parse_identifier(tokens)?;

    expect_token(tokens, &Token::LParen, "'(' after function name")?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let (body, _) = parse_block(tokens)?;

    Ok(FuncDef { name,
                 params,
                 body,
                 line })
}

/// Parses a braced statement list.
///
/// Grammar: `block := "{" stmt* "}"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `{`.
///
/// # Returns
/// The statements inside the braces and the line of the opening brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(Vec<Stmt>, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_token(tokens, &Token::LBrace, "'{'")?;

    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
    Ok((statements, line))
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration (`let x = expr;`),
/// - an assignment (`x = expr;`),
/// - an `if` with optional `else`,
/// - a `while` loop,
/// - a `print` statement,
/// - a `return` statement,
/// - a function call used as a statement (`f(a, b);`),
/// - a braced block.
///
/// The statement form is decided by the next token; an identifier is
/// disambiguated into an assignment or a call by the token that follows it.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Let, line)) => {
            let line = *line;
            tokens.next();
            let name = parse_identifier(tokens)?;
            expect_token(tokens, &Token::Equals, "'=' after variable name")?;
            let value = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, "';' after declaration")?;
            Ok(Stmt::Declaration { name,
                                   value,
                                   line })
        },
        Some((Token::If, line)) => {
            let line = *line;
            tokens.next();
            parse_if(tokens, line)
        },
        Some((Token::While, line)) => {
            let line = *line;
            tokens.next();
            expect_token(tokens, &Token::LParen, "'(' after 'while'")?;
            let condition = parse_condition(tokens)?;
            expect_token(tokens, &Token::RParen, "')' after loop condition")?;
            let body = parse_statement(tokens)?;
            Ok(Stmt::While { condition,
                             body: Box::new(body),
                             line })
        },
        Some((Token::Print, line)) => {
            let line = *line;
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, "';' after print")?;
            Ok(Stmt::Print { expr,
                             line })
        },
        Some((Token::Return, line)) => {
            let line = *line;
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, "';' after return")?;
            Ok(Stmt::Return { expr,
                              line })
        },
        Some((Token::LBrace, _)) => {
            let (statements, line) = parse_block(tokens)?;
            Ok(Stmt::Block { statements,
                             line })
        },
        Some((Token::Identifier(_), _)) => parse_assignment_or_call(tokens),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected statement, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if (<condition>) <stmt>
///     if (<condition>) <stmt> else <stmt>
/// ```
///
/// With an `else` branch present the statement becomes an [`Stmt::IfElse`];
/// otherwise a plain [`Stmt::If`]. An `else` binds to the nearest `if`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
///
/// # Returns
/// The parsed conditional statement.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen, "'(' after 'if'")?;
    let condition = parse_condition(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after condition")?;

    let then_branch = parse_statement(tokens)?;

    if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        let else_branch = parse_statement(tokens)?;
        return Ok(Stmt::IfElse { condition,
                                 then_branch: Box::new(then_branch),
                                 else_branch: Box::new(else_branch),
                                 line });
    }

    Ok(Stmt::If { condition,
                  body: Box::new(then_branch),
                  line })
}

/// Parses a statement that begins with an identifier.
///
/// The identifier is followed either by `=` (an assignment) or by `(` (a
/// call statement). Anything else is an error.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the identifier.
///
/// # Returns
/// An [`Stmt::Assignment`] or [`Stmt::Call`] node.
fn parse_assignment_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let name = parse_identifier(tokens)?;

    match tokens.peek() {
        Some((Token::Equals, _)) => {
            tokens.next();
            let value = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, "';' after assignment")?;
            Ok(Stmt::Assignment { name,
                                  value,
                                  line })
        },
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            expect_token(tokens, &Token::Semicolon, "';' after call")?;
            Ok(Stmt::Call { name,
                            arguments,
                            line })
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected '=' or '(' after identifier, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
