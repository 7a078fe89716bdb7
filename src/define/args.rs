use crate::define::error::{DefineError, FUNCTION_SHAPES, Operation, VALUE_SHAPES};
use crate::runtime::{function::Function, value::Value};

/// Arguments of a single builder call.
///
/// `Named` is the `(name, value)` form. `Unnamed` is the single-argument
/// form, where a function value supplies the property name itself.
#[derive(Clone, Debug)]
pub enum Args {
    Named(String, Value),
    Unnamed(Value),
}

impl Args {
    /// Observed argument types, e.g. `(string, int)`.
    pub fn observed(&self) -> String {
        match self {
            Args::Named(_, value) => format!("(string, {})", value.type_name()),
            Args::Unnamed(value) => format!("({})", value.type_name()),
        }
    }

    /// Resolves the `(string, function)` / `(function)` shapes.
    pub(crate) fn into_function(
        self,
        operation: Operation,
    ) -> Result<(String, Function), DefineError> {
        let observed = self.observed();
        match self {
            Args::Named(name, Value::Function(function)) => {
                Ok((non_empty(name, operation, observed)?, function))
            }
            Args::Unnamed(Value::Function(function)) => {
                let name = function.name().unwrap_or_default().to_string();
                Ok((non_empty(name, operation, observed)?, function))
            }
            _ => Err(DefineError::ArgumentShape {
                operation,
                expected: FUNCTION_SHAPES,
                observed,
            }),
        }
    }

    /// Resolves the `(string, any)` / `(function)` shapes.
    pub(crate) fn into_value(self, operation: Operation) -> Result<(String, Value), DefineError> {
        let observed = self.observed();
        match self {
            Args::Named(name, Value::Undefined) => {
                Err(DefineError::MissingValue { operation, name })
            }
            Args::Named(name, value) => Ok((non_empty(name, operation, observed)?, value)),
            Args::Unnamed(Value::Function(function)) => {
                let name = function.name().unwrap_or_default().to_string();
                Ok((
                    non_empty(name, operation, observed)?,
                    Value::Function(function),
                ))
            }
            Args::Unnamed(_) => Err(DefineError::ArgumentShape {
                operation,
                expected: VALUE_SHAPES,
                observed,
            }),
        }
    }
}

fn non_empty(
    name: String,
    operation: Operation,
    observed: String,
) -> Result<String, DefineError> {
    if name.is_empty() {
        Err(DefineError::EmptyName {
            operation,
            observed,
        })
    } else {
        Ok(name)
    }
}

impl<V: Into<Value>> From<(&str, V)> for Args {
    fn from((name, value): (&str, V)) -> Self {
        Args::Named(name.to_string(), value.into())
    }
}

impl<V: Into<Value>> From<(String, V)> for Args {
    fn from((name, value): (String, V)) -> Self {
        Args::Named(name, value.into())
    }
}

impl From<Function> for Args {
    fn from(function: Function) -> Self {
        Args::Unnamed(Value::Function(function))
    }
}

impl From<Value> for Args {
    fn from(value: Value) -> Self {
        Args::Unnamed(value)
    }
}
