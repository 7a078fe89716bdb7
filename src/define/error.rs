use crate::runtime::error::RuntimeError;
use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Set,
    Eval,
    Var,
    Const,
    Do,
}

/// Shapes accepted by `get`, `set` and `eval`.
pub const FUNCTION_SHAPES: &str = "(function) or (string, function)";
/// Shapes accepted by `var` and `const`.
pub const VALUE_SHAPES: &str = "(function) or (string, any)";

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Get => "get",
            Operation::Set => "set",
            Operation::Eval => "eval",
            Operation::Var => "var",
            Operation::Const => "const",
            Operation::Do => "do",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum DefineError {
    #[error("define().{operation} expects arguments of type {expected} instead got {observed}")]
    #[diagnostic(
        code(define::argument_shape),
        help("pass a named function, or a property name followed by the value")
    )]
    ArgumentShape {
        operation: Operation,
        expected: &'static str,
        observed: String,
    },
    #[error("define().{operation}: no name specified for {observed}")]
    #[diagnostic(
        code(define::empty_name),
        help("anonymous functions need an explicit property name")
    )]
    EmptyName {
        operation: Operation,
        observed: String,
    },
    #[error("define().{operation} expects a value as the second argument for `{name}` (instead got undefined)")]
    #[diagnostic(code(define::missing_value))]
    MissingValue { operation: Operation, name: String },
    #[error("define().{operation} could not define `{name}`")]
    #[diagnostic(code(define::property))]
    Property {
        operation: Operation,
        name: String,
        #[source]
        source: RuntimeError,
    },
    #[error("define().do: calling `{name}` failed")]
    #[diagnostic(code(define::invocation))]
    Invocation {
        name: String,
        #[source]
        source: RuntimeError,
    },
}

impl DefineError {
    /// Whether the call was rejected for its argument shape: a wrong type
    /// tuple, an empty name or a missing value.
    pub fn is_argument_shape(&self) -> bool {
        matches!(
            self,
            DefineError::ArgumentShape { .. }
                | DefineError::EmptyName { .. }
                | DefineError::MissingValue { .. }
        )
    }

    pub fn operation(&self) -> Operation {
        match self {
            DefineError::ArgumentShape { operation, .. }
            | DefineError::EmptyName { operation, .. }
            | DefineError::MissingValue { operation, .. }
            | DefineError::Property { operation, .. } => *operation,
            DefineError::Invocation { .. } => Operation::Do,
        }
    }
}
