use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::utils::{expect_token, parse_comma_separated},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full arithmetic expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_term(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_term(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative `*` operator.
///
/// Grammar: `term := factor ("*" factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul)
        {
            let line = *line;
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses the highest-precedence expression forms.
///
/// A factor may be one of:
/// - an integer literal,
/// - a unary minus applied to a factor,
/// - a parenthesized expression,
/// - a function call,
/// - a plain identifier.
///
/// Grammar:
/// `factor := integer | "-" factor | "(" expression ")" | ident "(" args ")"
/// | ident`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// The parsed factor node.
///
/// # Errors
/// Returns a `ParseError` if no factor form matches or the input ends.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(value), line)) => Ok(Expr::Const { value: *value,
                                                                line:  *line, }),
        Some((Token::Minus, line)) => {
            let line = *line;
            let expr = parse_factor(tokens)?;
            Ok(Expr::UnaryMinus { expr: Box::new(expr),
                                  line })
        },
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, "')'")?;
            Ok(expr)
        },
        Some((Token::Identifier(name), line)) => {
            let line = *line;
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                return Ok(Expr::Call { name: name.clone(),
                                       arguments,
                                       line });
            }
            Ok(Expr::Ident { name: name.clone(),
                             line })
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected expression, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Maps an arithmetic operator token to its [`BinaryOperator`].
///
/// Returns `None` for tokens that are not arithmetic operators.
pub(in crate::interpreter::parser) const fn token_to_binary_operator(token: &Token)
                                                                    -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        _ => None,
    }
}
