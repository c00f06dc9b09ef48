use std::fmt::Debug;

use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::events::ListenerTarget;

pub struct RegistryOptions {
    /// Shows up in log events and error messages.
    pub name: String,
    /// Reject empty event types in `register`.
    pub strict: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            name: "listeners".to_string(),
            strict: true,
        }
    }
}

impl RegistryOptions {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

struct Binding<T: ListenerTarget> {
    target: T,
    event_type: String,
    callback: T::Callback,
}

impl<T: ListenerTarget> Binding<T> {
    fn matches(&self, target: &T, event_type: &str) -> bool {
        self.target.same_target(target) && self.event_type == event_type
    }

    fn detach(&self) {
        self.target.detach(&self.event_type, &self.callback);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Active,
    Destroyed,
}

/// Attaches callbacks to many targets and remembers each attachment so they
/// can be detached in bulk later. Dropping the registry detaches everything
/// it still tracks.
pub struct ListenerRegistry<T: ListenerTarget> {
    name: String,
    strict: bool,
    bindings: Vec<Binding<T>>,
    state: State,
}

impl<T: ListenerTarget> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListenerTarget> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            name: options.name,
            strict: options.strict,
            bindings: Vec::new(),
            state: State::Active,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attaches `callback` to `target` for `event_type` and records the
    /// binding. Registering the same triple twice yields two bindings.
    pub fn register(
        &mut self,
        target: &T,
        event_type: &str,
        callback: T::Callback,
    ) -> Result<(), RegistryError> {
        if self.state == State::Destroyed {
            warn!(registry = %self.name, event_type, "register called after destroy");
            return Err(RegistryError::InvalidState(self.name.clone()));
        }
        if self.strict && event_type.is_empty() {
            return Err(RegistryError::InvalidArgument(
                "event type must not be empty".to_string(),
            ));
        }

        target.attach(event_type, &callback);
        self.bindings.push(Binding {
            target: target.clone(),
            event_type: event_type.to_string(),
            callback,
        });
        debug!(
            registry = %self.name,
            event_type,
            bindings = self.bindings.len(),
            "registered listener"
        );
        Ok(())
    }

    /// Detaches every callback registered for `(target, event_type)`.
    /// Nothing matching is not an error.
    pub fn unregister(&mut self, target: &T, event_type: &str) {
        let before = self.bindings.len();
        self.bindings.retain(|binding| {
            if binding.matches(target, event_type) {
                binding.detach();
                false
            } else {
                true
            }
        });
        let removed = before - self.bindings.len();
        if removed > 0 {
            debug!(registry = %self.name, event_type, removed, "unregistered listeners");
        }
    }

    /// Detaches every tracked callback, in registration order.
    pub fn remove_all(&mut self) {
        if self.bindings.is_empty() {
            return;
        }
        let removed = self.bindings.len();
        for binding in self.bindings.drain(..) {
            binding.detach();
        }
        debug!(registry = %self.name, removed, "removed all listeners");
    }

    /// Detaches everything and refuses further registrations.
    pub fn destroy(&mut self) {
        if self.state == State::Destroyed {
            return;
        }
        self.remove_all();
        self.state = State::Destroyed;
        debug!(registry = %self.name, "destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == State::Destroyed
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of live bindings for `(target, event_type)`.
    pub fn count(&self, target: &T, event_type: &str) -> usize {
        self.bindings
            .iter()
            .filter(|binding| binding.matches(target, event_type))
            .count()
    }
}

impl<T: ListenerTarget> Drop for ListenerRegistry<T> {
    fn drop(&mut self) {
        self.remove_all();
    }
}

impl<T: ListenerTarget> Debug for ListenerRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ListenerRegistry {} {{", self.name)?;
        writeln!(f, "  state: {:?},", self.state)?;
        writeln!(f, "  bindings: [")?;
        for (i, binding) in self.bindings.iter().enumerate() {
            writeln!(f, "    {}: {}", i, binding.event_type)?;
        }
        writeln!(f, "  ]")?;
        write!(f, "}}")
    }
}
