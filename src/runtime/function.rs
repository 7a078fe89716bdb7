use crate::compat;
use crate::runtime::{error::RuntimeResult, object::Object, value::Value};
use std::fmt;
use std::rc::Rc;

type NativeFn = dyn Fn(&Object, &[Value]) -> RuntimeResult<Value>;

/// A callable value. The first argument is the receiver the function runs
/// against, the second its positional arguments.
#[derive(Clone)]
pub struct Function {
    name: Option<String>,
    call: Rc<NativeFn>,
}

impl Function {
    /// Wraps `f`, taking the function's own name from its Rust item path
    /// when it has one. Closures are anonymous.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Object, &[Value]) -> RuntimeResult<Value> + 'static,
    {
        Self {
            name: compat::function_name::<F>(),
            call: Rc::new(f),
        }
    }

    pub fn named<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Object, &[Value]) -> RuntimeResult<Value> + 'static,
    {
        Self {
            name: Some(name.into()),
            call: Rc::new(f),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn call(&self, this: &Object, args: &[Value]) -> RuntimeResult<Value> {
        (self.call)(this, args)
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.call, &other.call)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
