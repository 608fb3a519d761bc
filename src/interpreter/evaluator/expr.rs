use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, binary operations,
    /// negation, variable reads, and function calls. Arithmetic uses 64-bit
    /// signed integer semantics with standard overflow wraparound.
    ///
    /// Expressions never signal a return; only statements do.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for undefined variables and faulting nested
    /// calls.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Const { value, .. } => Ok(*value),
            Expr::BinaryOp { left, op, right, .. } => {
                let lhs = self.eval_expr(left)?;
                let rhs = self.eval_expr(right)?;
                Ok(match op {
                    BinaryOperator::Add => lhs.wrapping_add(rhs),
                    BinaryOperator::Sub => lhs.wrapping_sub(rhs),
                    BinaryOperator::Mul => lhs.wrapping_mul(rhs),
                })
            },
            Expr::UnaryMinus { expr, .. } => Ok(self.eval_expr(expr)?.wrapping_neg()),
            Expr::Ident { name, line } => self.lookup(name, *line),
            Expr::Call { name,
                         arguments,
                         line, } => {
                self.eval_call(name, arguments, *line)?
                    .ok_or(RuntimeError::MissingValue { line: *line })
            },
        }
    }

    /// Evaluates a function call.
    ///
    /// Every actual-argument expression is evaluated exactly once, left to
    /// right in source order, before any parameter binding occurs. The
    /// evaluated values are then dispatched to [`Context::call`].
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Actual-argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The value produced by the function body, if any.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<Option<i64>> {
        let mut args = Vec::with_capacity(arguments.len());

        for expr in arguments {
            args.push(self.eval_expr(expr)?);
        }

        self.call(name, args, line)
    }
}
