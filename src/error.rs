/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, and any
/// other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined variables, unknown functions, argument count
/// mismatches, and other faults that abort the current run.
pub mod runtime_error;
/// Configuration errors.
///
/// Defines errors raised while validating the interpreter configuration
/// before any evaluation starts, such as unsupported memory-management modes
/// or invalid heap sizes.
pub mod config_error;

pub use config_error::ConfigError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
