#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Every fault aborts the current run; there is no retry or partial-failure
/// recovery anywhere in the evaluator.
pub enum RuntimeError {
    /// Tried to read a variable with no binding in the current frame.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a variable that was never declared.
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to define a function that already exists.
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The program defines no entry function.
    MissingEntryFunction,
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of formal parameters.
        expected: usize,
        /// The number of actual arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A function body finished without producing a value.
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output stream failed.
    Output {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::UndeclaredVariable { name, line } => write!(f,
                                                              "Error on line {line}: Assignment to undeclared variable '{name}'."),
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::FunctionAlreadyDefined { name, line } => write!(f,
                                                                  "Error on line {line}: Function '{name}' is already defined."),
            Self::MissingEntryFunction => {
                write!(f, "Error: Program defines no 'main' function.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function '{name}' expects {expected} argument(s), found {found}."),
            Self::MissingValue { line } => write!(f,
                                                  "Error on line {line}: Function body produced no value."),
            Self::Output { line } => {
                write!(f, "Error on line {line}: Failed to write to the output stream.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
