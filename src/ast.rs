/// A complete parsed program.
///
/// A program is an ordered sequence of function definitions. Exactly one of
/// them must be the entry function (see
/// [`ENTRY_FUNCTION`](crate::interpreter::evaluator::function::ENTRY_FUNCTION)),
/// which receives the externally supplied integer argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The function definitions, in source order.
    pub functions: Vec<FuncDef>,
}

/// Represents a user-defined function definition.
///
/// A function binds an ordered list of formal parameter names to a statement
/// list executed when the function is called. Definitions are immutable after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDef {
    /// The name of the function.
    pub name:   String,
    /// The formal parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements forming the function body.
    pub body:   Vec<Stmt>,
    /// Line number in the source code.
    pub line:   usize,
}

/// An abstract syntax tree (AST) node representing a statement.
///
/// Statements are the units of execution inside a function body. Each variant
/// carries the sub-expressions and sub-statements its semantics require,
/// together with a source line for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A variable declaration using `let`.
    Declaration {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An assignment to a previously declared variable.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional statement without an alternative branch.
    If {
        /// The condition deciding whether the body runs.
        condition: Cond,
        /// The statement executed when the condition holds.
        body:      Box<Stmt>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A conditional statement with an alternative branch.
    IfElse {
        /// The condition deciding which branch runs.
        condition:   Cond,
        /// The statement executed when the condition holds.
        then_branch: Box<Stmt>,
        /// The statement executed otherwise.
        else_branch: Box<Stmt>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A pre-test loop.
    While {
        /// The condition re-tested before every iteration.
        condition: Cond,
        /// The loop body.
        body:      Box<Stmt>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A function call executed for its side effects; the value is discarded.
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Expr>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Prints an integer value followed by a line terminator.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// Returns a value from the enclosing function.
    Return {
        /// The expression producing the return value.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A braced group of statements, executed in the enclosing frame.
    Block {
        /// Statements inside the block.
        statements: Vec<Stmt>,
        /// Line number in the source code.
        line:       usize,
    },
}

/// An AST node representing an integer-valued expression.
///
/// Expressions are pure with respect to control flow: evaluating one never
/// returns from the enclosing function, although a nested call may print.
/// All values are 64-bit signed integers.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    Const {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary operation (addition, subtraction, multiplication).
    BinaryOp {
        /// Left operand.
        left:  Box<Expr>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Arithmetic negation (e.g. `-x`).
    UnaryMinus {
        /// The operand expression.
        expr: Box<Expr>,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Ident {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Function call expression (e.g. `fact(n)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Expr>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use quill::ast::Expr;
    ///
    /// let expr = Expr::Ident { name: "x".to_string(),
    ///                          line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Const { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::UnaryMinus { line, .. }
            | Self::Ident { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// An AST node representing a boolean-valued condition.
///
/// Conditions form a separate grammar from expressions: they appear only in
/// `if` and `while` heads, and there is no boolean value type in the
/// language.
#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    /// A comparison between two integer expressions.
    Comparison {
        /// Left operand.
        left:  Expr,
        /// The comparison operator.
        op:    ComparisonOperator,
        /// Right operand.
        right: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// Logical conjunction with left-to-right short-circuit evaluation.
    And {
        /// Left operand.
        left:  Box<Cond>,
        /// Right operand.
        right: Box<Cond>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Logical disjunction with left-to-right short-circuit evaluation.
    Or {
        /// Left operand.
        left:  Box<Cond>,
        /// Right operand.
        right: Box<Cond>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Logical negation of a nested condition.
    Not {
        /// The negated condition.
        cond: Box<Cond>,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
        };
        write!(f, "{operator}")
    }
}

/// Represents a comparison operator over two integer expressions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
        };
        write!(f, "{operator}")
    }
}
