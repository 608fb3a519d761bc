/// Core expression parsing.
///
/// Contains the precedence-climbing parser for arithmetic expressions, from
/// additive operators down to literals, identifiers, calls, and parenthesized
/// groups.
pub mod core;

/// Condition parsing.
///
/// Parses the boolean condition grammar used by `if` and `while` heads:
/// comparisons, logical conjunction and disjunction, and negation.
pub mod cond;

/// Statement and program parsing.
///
/// Parses function definitions, statement lists, and every statement form of
/// the language.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides shared helpers for identifiers, expected tokens, and
/// comma-separated lists.
pub mod utils;
