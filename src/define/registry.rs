use crate::runtime::{function::Function, object::PropertyDescriptor};
use std::collections::HashMap;

/// The getter and setter halves recorded for one accessor property.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccessorPair {
    pub get: Option<Function>,
    pub set: Option<Function>,
}

impl AccessorPair {
    pub fn descriptor(&self) -> PropertyDescriptor {
        PropertyDescriptor::accessor(self.get.clone(), self.set.clone())
    }
}

/// Last-known accessor shape per property name.
///
/// Getters and setters defined in separate calls are merged here rather than
/// read back from the target, so one half never overwrites the other.
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    entries: HashMap<String, AccessorPair>,
}

impl DescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AccessorPair> {
        self.entries.get(name)
    }

    /// Pair for `name` with its getter replaced; the setter is kept.
    pub fn with_getter(&self, name: &str, getter: Function) -> AccessorPair {
        AccessorPair {
            get: Some(getter),
            set: self.get(name).and_then(|pair| pair.set.clone()),
        }
    }

    /// Pair for `name` with its setter replaced; the getter is kept.
    pub fn with_setter(&self, name: &str, setter: Function) -> AccessorPair {
        AccessorPair {
            get: self.get(name).and_then(|pair| pair.get.clone()),
            set: Some(setter),
        }
    }

    pub fn record(&mut self, name: &str, pair: AccessorPair) {
        self.entries.insert(name.to_string(), pair);
    }

    /// Drops the accessor history of `name` once it becomes a value property.
    pub fn forget(&mut self, name: &str) {
        self.entries.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Value;

    fn getter() -> Function {
        Function::named("width", |_, _| Ok(Value::Int(10)))
    }

    fn setter() -> Function {
        Function::named("width", |_, _| Ok(Value::Undefined))
    }

    #[test]
    fn setter_survives_a_later_getter() {
        let mut registry = DescriptorRegistry::new();
        let set = setter();
        let pair = registry.with_setter("width", set.clone());
        registry.record("width", pair);

        let get = getter();
        let merged = registry.with_getter("width", get.clone());
        assert_eq!(merged.get, Some(get));
        assert_eq!(merged.set, Some(set));
    }

    #[test]
    fn unrecorded_merge_leaves_registry_untouched() {
        let registry = DescriptorRegistry::new();
        let pair = registry.with_getter("width", getter());
        assert!(pair.set.is_none());
        assert!(registry.get("width").is_none());
    }

    #[test]
    fn forget_clears_both_halves() {
        let mut registry = DescriptorRegistry::new();
        let pair = registry.with_getter("width", getter());
        registry.record("width", pair);
        registry.forget("width");
        let pair = registry.with_setter("width", setter());
        assert!(pair.get.is_none());
        assert!(pair.descriptor().is_accessor());
    }
}
