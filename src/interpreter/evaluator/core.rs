use std::{collections::HashMap, io::Write};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::function::{ENTRY_FUNCTION, FunctionTable},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Variable storage for one activation.
///
/// Maps variable names to 64-bit signed integer values. A frame is
/// exclusively owned by the activation it belongs to.
pub type Frame = HashMap<String, i64>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the read-only function table,
/// the stack of per-activation frames, and the output stream that `print`
/// statements write to.
///
/// ## Usage
///
/// A `Context` is created once per program run. [`Context::run`] invokes the
/// entry function with the externally supplied argument; the statement,
/// expression, and condition walkers all operate on this state.
pub struct Context<'out> {
    /// The stack of activation frames; the last entry is the current frame.
    pub frames: Vec<Frame>,
    /// The read-only mapping from function name to definition.
    pub functions: FunctionTable,
    out: Box<dyn Write + 'out>,
}

impl Context<'static> {
    /// Creates a new evaluation context writing to standard output.
    ///
    /// The context starts with a single empty frame so that the environment
    /// API is usable before any function activation.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     interpreter::evaluator::{core::Context, function::FunctionTable},
    ///     parse,
    /// };
    ///
    /// let program = parse("main(n) { return n; }").unwrap();
    /// let mut context = Context::new(FunctionTable::build(&program).unwrap());
    ///
    /// assert_eq!(context.run(7).unwrap(), 7);
    /// ```
    #[must_use]
    pub fn new(functions: FunctionTable) -> Self {
        Self { frames: vec![Frame::new()],
               functions,
               out: Box::new(std::io::stdout()), }
    }
}

impl<'out> Context<'out> {
    /// Creates a new evaluation context writing to the given stream.
    ///
    /// Used by hosts (and tests) that need to capture everything the
    /// program prints.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     interpreter::evaluator::{core::Context, function::FunctionTable},
    ///     parse,
    /// };
    ///
    /// let program = parse("main(n) { print n * 2; return 0; }").unwrap();
    /// let mut buffer = Vec::new();
    /// {
    ///     let mut context = Context::with_output(FunctionTable::build(&program).unwrap(),
    ///                                            &mut buffer);
    ///     context.run(21).unwrap();
    /// }
    ///
    /// assert_eq!(String::from_utf8(buffer).unwrap(), "42\n");
    /// ```
    pub fn with_output(functions: FunctionTable, out: &'out mut dyn Write) -> Self {
        Self { frames: vec![Frame::new()],
               functions,
               out: Box::new(out), }
    }
}

impl Context<'_> {
    /// Runs the program by invoking the entry function.
    ///
    /// The externally supplied `argument` is bound to the entry function's
    /// sole formal parameter. The returned value is the result of the whole
    /// program run.
    ///
    /// # Parameters
    /// - `argument`: The integer argument passed to the entry function.
    ///
    /// # Returns
    /// The value produced by the entry function.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if any fault occurs during evaluation, if
    /// the entry function does not take exactly one parameter, or if its
    /// body ends without producing a value.
    pub fn run(&mut self, argument: i64) -> EvalResult<i64> {
        let line = self.functions.get(ENTRY_FUNCTION).map_or(0, |f| f.line);
        self.call(ENTRY_FUNCTION, vec![argument], line)?
            .ok_or(RuntimeError::MissingValue { line })
    }

    /// Inserts or overwrites a binding in the current frame.
    ///
    /// Declaring the same name twice in one frame overwrites the previous
    /// binding.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: Value to store.
    ///
    /// # Panics
    /// Panics if no frame exists, which indicates an internal error.
    pub fn declare(&mut self, name: &str, value: i64) {
        self.frames
            .last_mut()
            .expect("at least one frame")
            .insert(name.to_string(), value);
    }

    /// Updates an existing binding in the current frame.
    ///
    /// Unlike [`Context::declare`], assignment requires a prior declaration:
    /// assigning to an absent name is a fault.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: Value to assign.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndeclaredVariable` if the name has no binding
    /// in the current frame.
    pub fn assign(&mut self, name: &str, value: i64, line: usize) -> EvalResult<()> {
        let frame = self.frames.last_mut().expect("at least one frame");
        match frame.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(RuntimeError::UndeclaredVariable { name: name.to_string(),
                                                           line }),
        }
    }

    /// Retrieves a variable from the current frame.
    ///
    /// Lookup is restricted to the innermost frame: frames do not chain to
    /// enclosing activations, because the language has no closures.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The bound value.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if the name has no binding
    /// in the current frame.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<i64> {
        self.frames
            .last()
            .and_then(|frame| frame.get(name))
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Pushes a frame for a new activation.
    ///
    /// Called when a function call begins; the frame already contains the
    /// parameter bindings.
    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Removes the current activation's frame.
    ///
    /// Called when a function call ends, successfully or not.
    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Writes one printed value to the output stream.
    ///
    /// Emits the decimal representation followed by a line terminator.
    pub(crate) fn emit(&mut self, value: i64, line: usize) -> EvalResult<()> {
        writeln!(self.out, "{value}").map_err(|_| RuntimeError::Output { line })
    }
}
