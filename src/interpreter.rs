/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, executes statements, evaluates
/// expressions and conditions, manages per-activation variable frames, and
/// propagates the `return` control signal. It is the core execution engine
/// of the interpreter.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions and conditions.
/// - Handles variables, function calls, and control flow.
/// - Reports runtime faults such as undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles integer literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the program:
/// function definitions, statements, expressions, and conditions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Supports function definitions, control flow, calls, and assignments.
pub mod parser;
/// The memory module validates the memory-management configuration.
///
/// Declares the supported memory-management modes and performs the
/// fail-fast validation that runs before any evaluation. Only the no-op
/// mode is implemented; the other modes exist as reserved configuration
/// categories.
pub mod memory;
