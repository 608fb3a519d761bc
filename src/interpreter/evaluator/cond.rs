use crate::{
    ast::{ComparisonOperator, Cond},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a condition to a boolean.
    ///
    /// Comparisons apply standard integer ordering and equality to their two
    /// evaluated operands. `&&` and `||` evaluate their nested conditions
    /// left to right with short-circuiting: the right operand is only
    /// evaluated when the left one does not decide the outcome.
    ///
    /// # Parameters
    /// - `cond`: Condition to evaluate.
    ///
    /// # Returns
    /// The truth value of the condition.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if an operand expression faults.
    pub fn eval_cond(&mut self, cond: &Cond) -> EvalResult<bool> {
        match cond {
            Cond::Comparison { left, op, right, .. } => {
                let lhs = self.eval_expr(left)?;
                let rhs = self.eval_expr(right)?;
                Ok(match op {
                    ComparisonOperator::LessEqual => lhs <= rhs,
                    ComparisonOperator::GreaterEqual => lhs >= rhs,
                    ComparisonOperator::Equal => lhs == rhs,
                    ComparisonOperator::NotEqual => lhs != rhs,
                    ComparisonOperator::Less => lhs < rhs,
                    ComparisonOperator::Greater => lhs > rhs,
                })
            },
            Cond::And { left, right, .. } => Ok(self.eval_cond(left)? && self.eval_cond(right)?),
            Cond::Or { left, right, .. } => Ok(self.eval_cond(left)? || self.eval_cond(right)?),
            Cond::Not { cond, .. } => Ok(!self.eval_cond(cond)?),
        }
    }
}
