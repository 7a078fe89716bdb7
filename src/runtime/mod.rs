pub mod error;
pub mod function;
pub mod object;
pub mod value;

pub use error::{RuntimeError, RuntimeResult};
pub use function::Function;
pub use object::{Object, PropertyDescriptor};
pub use value::Value;
