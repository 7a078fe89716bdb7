//! Fluent property builder.
//!
//! A [`Definer`] attaches accessor, value and computed properties to a
//! target [`Object`]. Evaluations whose dependencies are missing are queued
//! and retried after every later call; whatever is still queued when the
//! builder finishes is reported as a warning.

pub mod args;
pub mod error;
pub mod monitor;
pub mod queue;
pub mod registry;

use crate::diagnostics;
use crate::runtime::{
    object::{Object, PropertyDescriptor},
    value::Value,
};
use args::Args;
use error::{DefineError, Operation};
use monitor::{CompletionMonitor, UnresolvedEvaluations};
use queue::EvalQueue;
use registry::{AccessorPair, DescriptorRegistry};

pub fn define_on(target: &Object) -> Definer {
    Definer::new(target)
}

#[derive(Debug)]
pub struct Definer {
    target: Object,
    registry: DescriptorRegistry,
    queue: EvalQueue,
    monitor: CompletionMonitor,
}

impl Definer {
    pub fn new(target: &Object) -> Self {
        Self {
            target: target.clone(),
            registry: DescriptorRegistry::new(),
            queue: EvalQueue::new(),
            monitor: CompletionMonitor::new(),
        }
    }

    pub fn target(&self) -> &Object {
        &self.target
    }

    /// Names of evaluations still waiting, in queue order.
    pub fn pending(&self) -> Vec<String> {
        self.queue.names()
    }

    /// The accessor shape recorded for `name`, if it was defined by `get`/`set`.
    pub fn descriptor(&self, name: &str) -> Option<PropertyDescriptor> {
        self.registry.get(name).map(AccessorPair::descriptor)
    }

    pub fn get(&mut self, args: impl Into<Args>) -> Result<&mut Self, DefineError> {
        let (name, getter) = args.into().into_function(Operation::Get)?;
        let pair = self.registry.with_getter(&name, getter);
        self.install_accessor(Operation::Get, &name, pair)?;
        Ok(self.sweep())
    }

    pub fn set(&mut self, args: impl Into<Args>) -> Result<&mut Self, DefineError> {
        let (name, setter) = args.into().into_function(Operation::Set)?;
        let pair = self.registry.with_setter(&name, setter);
        self.install_accessor(Operation::Set, &name, pair)?;
        Ok(self.sweep())
    }

    /// Queues a computed property. The thunk's result is stored under the
    /// name as soon as it runs without failing.
    pub fn eval(&mut self, args: impl Into<Args>) -> Result<&mut Self, DefineError> {
        let (name, thunk) = args.into().into_function(Operation::Eval)?;
        self.queue.push(name, thunk);
        Ok(self.sweep())
    }

    pub fn var(&mut self, args: impl Into<Args>) -> Result<&mut Self, DefineError> {
        let (name, value) = args.into().into_value(Operation::Var)?;
        self.install_value(Operation::Var, &name, PropertyDescriptor::data(value))?;
        Ok(self.sweep())
    }

    pub fn constant(&mut self, args: impl Into<Args>) -> Result<&mut Self, DefineError> {
        let (name, value) = args.into().into_value(Operation::Const)?;
        self.install_value(Operation::Const, &name, PropertyDescriptor::constant(value))?;
        Ok(self.sweep())
    }

    /// Calls the target's member `name` as part of the chain.
    pub fn invoke(&mut self, name: &str, args: &[Value]) -> Result<&mut Self, DefineError> {
        self.target
            .invoke(name, args)
            .map_err(|source| DefineError::Invocation {
                name: name.to_string(),
                source,
            })?;
        Ok(self.sweep())
    }

    /// Ends the chain, reporting unresolved evaluations on the log channel.
    pub fn finish(mut self) -> Object {
        if let Some(warning) = self.monitor.check(&self.queue) {
            diagnostics::report_unresolved(&warning);
        }
        self.target.clone()
    }

    /// Ends the chain and hands the unresolved report back instead of logging it.
    pub fn finish_with_report(mut self) -> (Object, Option<UnresolvedEvaluations>) {
        let report = self.monitor.check(&self.queue);
        (self.target.clone(), report)
    }

    fn install_accessor(
        &mut self,
        operation: Operation,
        name: &str,
        pair: AccessorPair,
    ) -> Result<(), DefineError> {
        self.target.delete(name);
        self.target
            .define_own_property(name, pair.descriptor())
            .map_err(|source| DefineError::Property {
                operation,
                name: name.to_string(),
                source,
            })?;
        self.registry.record(name, pair);
        Ok(())
    }

    fn install_value(
        &mut self,
        operation: Operation,
        name: &str,
        desc: PropertyDescriptor,
    ) -> Result<(), DefineError> {
        self.target
            .define_own_property(name, desc)
            .map_err(|source| DefineError::Property {
                operation,
                name: name.to_string(),
                source,
            })?;
        self.registry.forget(name);
        Ok(())
    }

    fn sweep(&mut self) -> &mut Self {
        if !self.queue.is_empty() {
            self.queue.sweep(&self.target);
        }
        self
    }
}

impl Drop for Definer {
    fn drop(&mut self) {
        if let Some(warning) = self.monitor.check(&self.queue) {
            diagnostics::report_unresolved(&warning);
        }
    }
}
