use thiserror::Error;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Unknown property `{name}`")]
    UnknownProperty { name: String },
    #[error("Property `{name}` is read-only")]
    ReadOnlyProperty { name: String },
    #[error("Property `{name}` is not configurable")]
    NonConfigurable { name: String },
    #[error("Property `{name}` has a getter but no setter")]
    MissingSetter { name: String },
    #[error("Cannot add property `{name}`: object is not extensible")]
    NotExtensible { name: String },
    #[error("Member `{name}` is not callable (found {found})")]
    NotCallable { name: String, found: &'static str },
    #[error("Type mismatch: {message}")]
    TypeMismatch { message: String },
    #[error("Function `{name}` expected {expected} arguments but received {received}")]
    ArityMismatch {
        name: String,
        expected: usize,
        received: usize,
    },
    #[error("{message}")]
    Thrown { message: String },
}

impl RuntimeError {
    /// Failure raised from inside a user-supplied function.
    pub fn thrown(message: impl Into<String>) -> Self {
        RuntimeError::Thrown {
            message: message.into(),
        }
    }
}
