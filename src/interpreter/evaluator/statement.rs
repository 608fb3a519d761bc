use crate::{
    ast::{Cond, Stmt},
    interpreter::evaluator::core::{Context, EvalResult},
};

/// The control signal produced by executing a statement.
///
/// `Normal` carries the value the statement produced, if any. `Return`
/// carries the value of a fired `return` statement; it propagates unchanged
/// through every enclosing construct until the function-call boundary
/// consumes it. This is the sole interruption mechanism in the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal(Option<i64>),
    /// A `return` fired; remaining statements are skipped.
    Return(i64),
}

impl Flow {
    /// Gets the value carried by this signal, if any.
    /// ## Example
    /// ```
    /// use quill::interpreter::evaluator::statement::Flow;
    ///
    /// assert_eq!(Flow::Normal(Some(3)).value(), Some(3));
    /// assert_eq!(Flow::Normal(None).value(), None);
    /// assert_eq!(Flow::Return(7).value(), Some(7));
    /// ```
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        match self {
            Self::Normal(value) => *value,
            Self::Return(value) => Some(*value),
        }
    }
}

impl Context<'_> {
    /// Executes a single statement.
    ///
    /// Dispatches on the statement kind and returns the produced value
    /// together with the control signal. A `Return` signal from a nested
    /// statement is propagated verbatim.
    ///
    /// # Parameters
    /// - `stmt`: Statement to execute.
    ///
    /// # Returns
    /// The resulting [`Flow`] signal.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for undefined variables, undeclared
    /// assignment targets, unknown functions, and other evaluation faults.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<Flow> {
        match stmt {
            Stmt::Declaration { name, value, .. } => {
                let value = self.eval_expr(value)?;
                self.declare(name, value);
                Ok(Flow::Normal(Some(value)))
            },
            Stmt::Assignment { name, value, line } => {
                let value = self.eval_expr(value)?;
                self.assign(name, value, *line)?;
                Ok(Flow::Normal(Some(value)))
            },
            Stmt::If { condition, body, .. } => {
                if self.eval_cond(condition)? {
                    return self.exec_stmt(body);
                }
                Ok(Flow::Normal(None))
            },
            Stmt::IfElse { condition,
                           then_branch,
                           else_branch,
                           .. } => {
                if self.eval_cond(condition)? {
                    self.exec_stmt(then_branch)
                } else {
                    self.exec_stmt(else_branch)
                }
            },
            Stmt::While { condition, body, .. } => self.exec_while(condition, body),
            Stmt::Call { name,
                         arguments,
                         line, } => {
                self.eval_call(name, arguments, *line)?;
                Ok(Flow::Normal(None))
            },
            Stmt::Print { expr, line } => {
                let value = self.eval_expr(expr)?;
                self.emit(value, *line)?;
                Ok(Flow::Normal(Some(value)))
            },
            Stmt::Return { expr, .. } => {
                let value = self.eval_expr(expr)?;
                Ok(Flow::Return(value))
            },
            Stmt::Block { statements, .. } => self.exec_stmt_list(statements),
        }
    }

    /// Executes a statement list in sequence.
    ///
    /// If a statement signals `Return`, the remaining statements are skipped
    /// and the signal propagates to the caller unchanged. Otherwise the list
    /// produces the value of the last executed statement, or no value for an
    /// empty list.
    ///
    /// The statements run in the current frame; no scope is introduced.
    ///
    /// # Parameters
    /// - `statements`: The statements to execute, in order.
    ///
    /// # Returns
    /// The resulting [`Flow`] signal.
    pub fn exec_stmt_list(&mut self, statements: &[Stmt]) -> EvalResult<Flow> {
        let mut last = None;
        for stmt in statements {
            match self.exec_stmt(stmt)? {
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Normal(value) => last = value,
            }
        }
        Ok(Flow::Normal(last))
    }

    /// Executes a pre-test loop.
    ///
    /// The condition is evaluated before every iteration, including the
    /// first; a body that signals `Return` terminates the loop immediately.
    /// The loop produces the last body value, or no value after zero
    /// iterations.
    fn exec_while(&mut self, condition: &Cond, body: &Stmt) -> EvalResult<Flow> {
        let mut last = None;
        while self.eval_cond(condition)? {
            match self.exec_stmt(body)? {
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Normal(value) => last = value,
            }
        }
        Ok(Flow::Normal(last))
    }
}
