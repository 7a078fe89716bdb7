use crate::runtime::{Object, RuntimeError, RuntimeResult};

mod shapes;

fn int(this: &Object, name: &str) -> RuntimeResult<i64> {
    this.get(name)?
        .as_int()
        .ok_or_else(|| RuntimeError::TypeMismatch {
            message: format!("`{name}` is not an int"),
        })
}
