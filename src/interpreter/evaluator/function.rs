use std::collections::HashMap;

use crate::{
    ast::{FuncDef, Program},
    error::RuntimeError,
    interpreter::evaluator::{
        core::{Context, EvalResult, Frame},
        statement::Flow,
    },
};

/// The fixed name of the entry function.
///
/// Every program must define exactly one function with this name; it
/// receives the externally supplied integer argument as its sole parameter.
pub const ENTRY_FUNCTION: &str = "main";

/// An immutable mapping from function name to definition.
///
/// The table is built once from the AST before any evaluation and is never
/// mutated during execution.
pub struct FunctionTable {
    map: HashMap<String, FuncDef>,
}

impl FunctionTable {
    /// Builds the function table from a parsed program.
    ///
    /// # Parameters
    /// - `program`: The program whose definitions are collected.
    ///
    /// # Returns
    /// The populated table.
    ///
    /// # Errors
    /// - `FunctionAlreadyDefined` if two definitions share a name.
    /// - `MissingEntryFunction` if no function is named
    ///   [`ENTRY_FUNCTION`].
    ///
    /// # Example
    /// ```
    /// use quill::{interpreter::evaluator::function::FunctionTable, parse};
    ///
    /// let program = parse("main(n) { return n; }").unwrap();
    /// let table = FunctionTable::build(&program).unwrap();
    ///
    /// assert!(table.get("main").is_some());
    /// assert!(table.get("other").is_none());
    /// ```
    pub fn build(program: &Program) -> EvalResult<Self> {
        let mut map = HashMap::with_capacity(program.functions.len());

        for func in &program.functions {
            if map.insert(func.name.clone(), func.clone()).is_some() {
                return Err(RuntimeError::FunctionAlreadyDefined { name: func.name.clone(),
                                                                  line: func.line, });
            }
        }

        if !map.contains_key(ENTRY_FUNCTION) {
            return Err(RuntimeError::MissingEntryFunction);
        }

        Ok(Self { map })
    }

    /// Looks up a function definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FuncDef> {
        self.map.get(name)
    }
}

impl Context<'_> {
    /// Calls a function with already-evaluated arguments.
    ///
    /// The activation proceeds through a fixed sequence: the argument count
    /// is checked against the formal parameter count, the values are bound
    /// positionally into a fresh frame, the frame is pushed, the body
    /// statement list is executed, and the frame is popped whether the body
    /// succeeded or faulted. The call yields the body's final value, whether
    /// it was returned explicitly or produced by the last executed
    /// statement.
    ///
    /// A body may legitimately produce no value; whether that is a fault is
    /// decided by the call site. Call statements discard the value, while
    /// call expressions require one.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Evaluated argument values, in source order.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The value produced by the function body, or `None` if the body ended
    /// without producing one.
    ///
    /// # Errors
    /// - `UnknownFunction` if the name is not in the function table.
    /// - `ArgumentCountMismatch` if the arity does not match.
    pub(crate) fn call(&mut self,
                       name: &str,
                       arguments: Vec<i64>,
                       line: usize)
                       -> EvalResult<Option<i64>> {
        let func = self.functions
                       .get(name)
                       .cloned()
                       .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                      line })?;

        if arguments.len() != func.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: func.params.len(),
                                                             found:    arguments.len(),
                                                             line, });
        }

        let frame: Frame = func.params.iter().cloned().zip(arguments).collect();

        self.push_frame(frame);
        let outcome = self.exec_stmt_list(&func.body);
        self.pop_frame();

        match outcome? {
            Flow::Return(value) | Flow::Normal(Some(value)) => Ok(Some(value)),
            Flow::Normal(None) => Ok(None),
        }
    }
}
