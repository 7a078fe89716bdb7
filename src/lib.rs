pub mod compat;
pub mod define;
pub mod diagnostics;
pub mod runtime;

pub use define::{
    Definer, args::Args, define_on, error::DefineError, monitor::UnresolvedEvaluations,
};
pub use runtime::{Function, Object, PropertyDescriptor, RuntimeError, RuntimeResult, Value};

#[cfg(test)]
mod tests;
