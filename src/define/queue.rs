use crate::runtime::{
    error::{RuntimeError, RuntimeResult},
    function::Function,
    object::Object,
};
use log::{debug, trace};

/// A named evaluation waiting for its dependencies.
#[derive(Clone, Debug)]
pub struct Deferred {
    pub name: String,
    pub thunk: Function,
}

impl Deferred {
    /// Runs the thunk against `target` and stores its result under `name`.
    ///
    /// The entry resolves as soon as the thunk succeeds. A store the target
    /// refuses (read-only, getter-only or sealed) is dropped; a failing
    /// setter counts as a failed attempt.
    fn attempt(&self, target: &Object) -> RuntimeResult<()> {
        let value = self.thunk.call(target, &[])?;
        match target.set(&self.name, value) {
            Err(
                err @ (RuntimeError::ReadOnlyProperty { .. }
                | RuntimeError::MissingSetter { .. }
                | RuntimeError::NotExtensible { .. }),
            ) => {
                trace!("result of deferred eval `{}` discarded: {}", self.name, err);
                Ok(())
            }
            other => other,
        }
    }
}

/// Evaluations that have not succeeded yet, in registration order.
#[derive(Debug, Default)]
pub struct EvalQueue {
    entries: Vec<Deferred>,
}

impl EvalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, thunk: Function) {
        self.entries.push(Deferred {
            name: name.into(),
            thunk,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    /// One retry pass: every queued entry is attempted exactly once, in
    /// order, and dropped if it succeeds. Failures stay queued silently.
    /// Returns the names resolved by this pass.
    pub fn sweep(&mut self, target: &Object) -> Vec<String> {
        let mut resolved = Vec::new();
        self.entries.retain(|entry| match entry.attempt(target) {
            Ok(()) => {
                debug!("deferred eval `{}` resolved", entry.name);
                resolved.push(entry.name.clone());
                false
            }
            Err(err) => {
                trace!("deferred eval `{}` still pending: {}", entry.name, err);
                true
            }
        });
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Value;

    fn read(dep: &'static str) -> Function {
        Function::named(dep, move |this, _| this.get(dep))
    }

    #[test]
    fn failing_entries_stay_queued() {
        let target = Object::new();
        let mut queue = EvalQueue::new();
        queue.push("copy", read("source"));
        assert!(queue.sweep(&target).is_empty());
        assert_eq!(queue.names(), vec!["copy".to_string()]);
        assert!(!target.has_own_property("copy"));
    }

    #[test]
    fn adjacent_entries_resolve_in_the_same_sweep() {
        let target = Object::new();
        let mut queue = EvalQueue::new();
        queue.push("first", read("source"));
        queue.push("second", read("source"));
        queue.push("third", read("missing"));
        queue.sweep(&target);
        assert_eq!(queue.len(), 3);

        target.set("source", Value::Int(1)).expect("source");
        let resolved = queue.sweep(&target);
        assert_eq!(resolved, vec!["first".to_string(), "second".to_string()]);
        assert_eq!(queue.names(), vec!["third".to_string()]);
        assert_eq!(target.get("second"), Ok(Value::Int(1)));
    }

    #[test]
    fn later_entries_see_earlier_results_within_a_sweep() {
        let target = Object::new();
        let mut queue = EvalQueue::new();
        queue.push("a", read("seed"));
        queue.push("b", read("a"));
        target.set("seed", Value::from("s")).expect("seed");
        assert_eq!(queue.sweep(&target), vec!["a".to_string(), "b".to_string()]);
        assert!(queue.is_empty());
    }

    #[test]
    fn earlier_entries_wait_for_the_next_sweep() {
        let target = Object::new();
        let mut queue = EvalQueue::new();
        queue.push("b", read("a"));
        queue.push("a", read("seed"));
        target.set("seed", Value::from("s")).expect("seed");
        assert_eq!(queue.sweep(&target), vec!["a".to_string()]);
        assert_eq!(queue.sweep(&target), vec!["b".to_string()]);
    }

    #[test]
    fn refused_result_store_still_resolves() {
        let target = Object::new();
        target
            .define_own_property(
                "fixed",
                crate::runtime::PropertyDescriptor::constant(Value::Int(0)),
            )
            .expect("constant");
        let mut queue = EvalQueue::new();
        queue.push("fixed", Function::named("fixed", |_, _| Ok(Value::Int(1))));
        assert_eq!(queue.sweep(&target), vec!["fixed".to_string()]);
        assert!(queue.is_empty());
        assert_eq!(target.get("fixed"), Ok(Value::Int(0)));
    }

    #[test]
    fn failing_setter_keeps_entry_queued() {
        let target = Object::new();
        let setter = Function::named("guarded", |_, _| Err(RuntimeError::thrown("not yet")));
        target
            .define_own_property(
                "guarded",
                crate::runtime::PropertyDescriptor::accessor(None, Some(setter)),
            )
            .expect("accessor");
        let mut queue = EvalQueue::new();
        queue.push("guarded", Function::named("guarded", |_, _| Ok(Value::Int(1))));
        assert!(queue.sweep(&target).is_empty());
        assert_eq!(queue.len(), 1);
    }
}
