use crate::runtime::{
    error::{RuntimeError, RuntimeResult},
    function::Function,
    value::Value,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Attribute set of one own property.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyDescriptor {
    Data {
        value: Value,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    },
    Accessor {
        get: Option<Function>,
        set: Option<Function>,
        enumerable: bool,
        configurable: bool,
    },
}

impl PropertyDescriptor {
    /// Writable, enumerable, configurable data property.
    pub fn data(value: Value) -> Self {
        Self::Data {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// Enumerable data property that can be neither written nor reconfigured.
    pub fn constant(value: Value) -> Self {
        Self::Data {
            value,
            writable: false,
            enumerable: true,
            configurable: false,
        }
    }

    pub fn accessor(get: Option<Function>, set: Option<Function>) -> Self {
        Self::Accessor {
            get,
            set,
            enumerable: true,
            configurable: true,
        }
    }

    pub fn is_configurable(&self) -> bool {
        match self {
            Self::Data { configurable, .. } | Self::Accessor { configurable, .. } => *configurable,
        }
    }

    pub fn is_enumerable(&self) -> bool {
        match self {
            Self::Data { enumerable, .. } | Self::Accessor { enumerable, .. } => *enumerable,
        }
    }

    pub fn is_writable(&self) -> bool {
        matches!(self, Self::Data { writable: true, .. })
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data { .. })
    }

    pub fn is_accessor(&self) -> bool {
        matches!(self, Self::Accessor { .. })
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Data { value, .. } => Some(value),
            Self::Accessor { .. } => None,
        }
    }

    pub fn getter(&self) -> Option<&Function> {
        match self {
            Self::Accessor { get, .. } => get.as_ref(),
            Self::Data { .. } => None,
        }
    }

    pub fn setter(&self) -> Option<&Function> {
        match self {
            Self::Accessor { set, .. } => set.as_ref(),
            Self::Data { .. } => None,
        }
    }

    /// Whether `next` may replace `self` when `self` is non-configurable.
    fn admits(&self, next: &PropertyDescriptor) -> bool {
        if next.is_configurable() || next.is_enumerable() != self.is_enumerable() {
            return false;
        }
        match (self, next) {
            (
                Self::Data {
                    value: current,
                    writable: false,
                    ..
                },
                Self::Data {
                    value, writable, ..
                },
            ) => !*writable && current == value,
            (Self::Data { .. }, Self::Data { .. }) => true,
            (
                Self::Accessor {
                    get: cur_get,
                    set: cur_set,
                    ..
                },
                Self::Accessor { get, set, .. },
            ) => cur_get == get && cur_set == set,
            _ => false,
        }
    }
}

#[derive(Debug)]
struct ObjectData {
    properties: HashMap<String, PropertyDescriptor>,
    order: Vec<String>,
    extensible: bool,
}

/// Shared handle to a mutable property bag. Clones alias the same object.
#[derive(Clone)]
pub struct Object {
    inner: Rc<RefCell<ObjectData>>,
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl Object {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObjectData {
                properties: HashMap::new(),
                order: Vec::new(),
                extensible: true,
            })),
        }
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn get_own_property(&self, name: &str) -> Option<PropertyDescriptor> {
        self.inner.borrow().properties.get(name).cloned()
    }

    pub fn has_own_property(&self, name: &str) -> bool {
        self.inner.borrow().properties.contains_key(name)
    }

    pub fn is_extensible(&self) -> bool {
        self.inner.borrow().extensible
    }

    pub fn prevent_extensions(&self) {
        self.inner.borrow_mut().extensible = false;
    }

    /// Enumerable own property names, in definition order.
    pub fn keys(&self) -> Vec<String> {
        let data = self.inner.borrow();
        data.order
            .iter()
            .filter(|name| {
                data.properties
                    .get(name.as_str())
                    .is_some_and(PropertyDescriptor::is_enumerable)
            })
            .cloned()
            .collect()
    }

    pub fn define_own_property(&self, name: &str, desc: PropertyDescriptor) -> RuntimeResult<()> {
        let mut data = self.inner.borrow_mut();
        let replaceable = data
            .properties
            .get(name)
            .map(|current| current.is_configurable() || current.admits(&desc));
        match replaceable {
            Some(true) => {}
            Some(false) => {
                return Err(RuntimeError::NonConfigurable {
                    name: name.to_string(),
                });
            }
            None => {
                if !data.extensible {
                    return Err(RuntimeError::NotExtensible {
                        name: name.to_string(),
                    });
                }
                data.order.push(name.to_string());
            }
        }
        data.properties.insert(name.to_string(), desc);
        Ok(())
    }

    /// Removes an own property. Returns `false` and keeps the property when
    /// it is not configurable.
    pub fn delete(&self, name: &str) -> bool {
        let mut data = self.inner.borrow_mut();
        match data.properties.get(name).map(PropertyDescriptor::is_configurable) {
            Some(false) => false,
            Some(true) => {
                data.properties.remove(name);
                data.order.retain(|key| key != name);
                true
            }
            None => true,
        }
    }

    pub fn get(&self, name: &str) -> RuntimeResult<Value> {
        let desc = self.get_own_property(name);
        match desc {
            Some(PropertyDescriptor::Data { value, .. }) => Ok(value),
            Some(PropertyDescriptor::Accessor { get: Some(getter), .. }) => getter.call(self, &[]),
            Some(PropertyDescriptor::Accessor { get: None, .. }) => Ok(Value::Undefined),
            None => Err(RuntimeError::UnknownProperty {
                name: name.to_string(),
            }),
        }
    }

    /// Ordinary assignment: writes a data property, runs a setter, or adds a
    /// new data property.
    pub fn set(&self, name: &str, value: Value) -> RuntimeResult<()> {
        let desc = self.get_own_property(name);
        match desc {
            Some(PropertyDescriptor::Data { writable: false, .. }) => {
                Err(RuntimeError::ReadOnlyProperty {
                    name: name.to_string(),
                })
            }
            Some(PropertyDescriptor::Data { .. }) => {
                let mut data = self.inner.borrow_mut();
                if let Some(PropertyDescriptor::Data { value: slot, .. }) =
                    data.properties.get_mut(name)
                {
                    *slot = value;
                }
                Ok(())
            }
            Some(PropertyDescriptor::Accessor { set: Some(setter), .. }) => {
                setter.call(self, &[value]).map(|_| ())
            }
            Some(PropertyDescriptor::Accessor { set: None, .. }) => {
                Err(RuntimeError::MissingSetter {
                    name: name.to_string(),
                })
            }
            None => self.define_own_property(name, PropertyDescriptor::data(value)),
        }
    }

    /// Calls the member `name` with this object as receiver.
    pub fn invoke(&self, name: &str, args: &[Value]) -> RuntimeResult<Value> {
        match self.get(name)? {
            Value::Function(function) => function.call(self, args),
            other => Err(RuntimeError::NotCallable {
                name: name.to_string(),
                found: other.type_name(),
            }),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(data) => f
                .debug_struct("Object")
                .field("keys", &data.order)
                .field("extensible", &data.extensible)
                .finish(),
            Err(_) => f.write_str("Object { <borrowed> }"),
        }
    }
}
