use std::iter::Peekable;

use crate::{
    ast::{Cond, ComparisonOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect_token,
        },
    },
};

/// Parses a full boolean condition.
///
/// This is the entry point for condition parsing. It begins at the
/// lowest-precedence level, logical OR, and recursively descends.
///
/// Grammar: `condition := cond_and ("||" cond_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed condition node.
pub fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Cond>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_cond_and(tokens)?;
    while let Some((Token::OrOr, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let right = parse_cond_and(tokens)?;
        left = Cond::Or { left: Box::new(left),
                          right: Box::new(right),
                          line };
    }
    Ok(left)
}

/// Parses conjunction-level conditions.
///
/// Grammar: `cond_and := cond_primary ("&&" cond_primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A condition tree combining primary-level nodes.
fn parse_cond_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Cond>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_cond_primary(tokens)?;
    while let Some((Token::AndAnd, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let right = parse_cond_primary(tokens)?;
        left = Cond::And { left: Box::new(left),
                           right: Box::new(right),
                           line };
    }
    Ok(left)
}

/// Parses the highest-precedence condition forms.
///
/// A primary condition may be one of:
/// - a negation: `"!" cond_primary`,
/// - a comparison: `expression relop expression`,
/// - a parenthesized condition: `"(" condition ")"`.
///
/// The leading `(` is ambiguous: it may open a parenthesized condition or a
/// parenthesized arithmetic operand of a comparison (`(1 + 2) < 3`). The
/// parser first attempts a comparison on a saved copy of the token iterator
/// and falls back to a parenthesized condition when no comparison operator
/// follows the left-hand expression.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// The parsed condition node.
///
/// # Errors
/// Returns a `ParseError` if neither a comparison nor a parenthesized
/// condition can be parsed at the current position.
fn parse_cond_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Cond>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Bang, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let cond = parse_cond_primary(tokens)?;
        return Ok(Cond::Not { cond: Box::new(cond),
                              line });
    }

    let saved = tokens.clone();
    match parse_comparison(tokens) {
        Ok(cond) => Ok(cond),
        Err(_) => {
            *tokens = saved;
            expect_token(tokens, &Token::LParen, "'(' or comparison")?;
            let cond = parse_condition(tokens)?;
            expect_token(tokens, &Token::RParen, "')'")?;
            Ok(cond)
        },
    }
}

/// Parses a single comparison between two arithmetic expressions.
///
/// Grammar: `comparison := expression relop expression`
///
/// # Errors
/// Returns a `ParseError` if the left-hand expression fails to parse or no
/// comparison operator follows it. The caller backtracks in that case.
fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Cond>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_expression(tokens)?;

    let (op, line) = match tokens.peek() {
        Some((tok, line)) => match token_to_comparison_operator(tok) {
            Some(op) => (op, *line),
            None => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected comparison operator, found {tok:?}"),
                                                         line:  *line, });
            },
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };
    tokens.next();

    let right = parse_expression(tokens)?;
    Ok(Cond::Comparison { left,
                          op,
                          right,
                          line })
}

/// Maps a comparison token to its [`ComparisonOperator`].
///
/// Returns `None` for tokens that are not comparison operators.
const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        Token::EqualEqual => Some(ComparisonOperator::Equal),
        Token::BangEqual => Some(ComparisonOperator::NotEqual),
        Token::Less => Some(ComparisonOperator::Less),
        Token::Greater => Some(ComparisonOperator::Greater),
        _ => None,
    }
}
