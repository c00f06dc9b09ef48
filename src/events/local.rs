use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;
use wasm_timer::Instant;

use super::ListenerTarget;

#[derive(Debug, Clone, Serialize)]
pub struct LocalEvent {
    pub event_type: String,
    pub payload: Value,
    /// Seconds since the dispatching target was created.
    pub timestamp: f64,
}

/// A callback for a [`LocalTarget`]. Clones share the same function and
/// compare equal; two separately constructed listeners never do.
#[derive(Clone)]
pub struct Listener(Rc<dyn Fn(&LocalEvent)>);

impl Listener {
    pub fn new(callback: impl Fn(&LocalEvent) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn call(&self, event: &LocalEvent) {
        (self.0)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Listener {}

impl Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({:p})", Rc::as_ptr(&self.0))
    }
}

struct TargetInner {
    events: RefCell<HashMap<String, Vec<Listener>>>,
    created: Instant,
}

/// In-process event target for hosts without a DOM.
#[derive(Clone)]
pub struct LocalTarget {
    inner: Rc<TargetInner>,
}

impl Default for LocalTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalTarget {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(TargetInner {
                events: RefCell::new(HashMap::new()),
                created: Instant::now(),
            }),
        }
    }

    pub fn add_listener(&self, event_type: &str, listener: &Listener) {
        self.inner
            .events
            .borrow_mut()
            .entry(event_type.to_string())
            .or_default()
            .push(listener.clone());
    }

    /// Removes one entry of `listener` for `event_type`, pairing with a single
    /// `add_listener`. Returns whether anything was removed.
    pub fn remove_listener(&self, event_type: &str, listener: &Listener) -> bool {
        let mut events = self.inner.events.borrow_mut();
        let Some(listeners) = events.get_mut(event_type) else {
            return false;
        };
        let Some(index) = listeners.iter().position(|l| l == listener) else {
            return false;
        };
        listeners.remove(index);
        if listeners.is_empty() {
            events.remove(event_type);
        }
        true
    }

    /// Invokes every listener attached for `event_type` and returns how many
    /// ran. Listeners attached or removed by a callback take effect on the
    /// next dispatch.
    pub fn dispatch(&self, event_type: &str, payload: Value) -> usize {
        let snapshot: Vec<Listener> = match self.inner.events.borrow().get(event_type) {
            Some(listeners) => listeners.clone(),
            None => return 0,
        };

        let event = LocalEvent {
            event_type: event_type.to_string(),
            payload,
            timestamp: self.inner.created.elapsed().as_secs_f64(),
        };
        for listener in &snapshot {
            listener.call(&event);
        }
        snapshot.len()
    }

    pub fn listener_count(&self, event_type: &str) -> usize {
        self.inner
            .events
            .borrow()
            .get(event_type)
            .map_or(0, |v| v.len())
    }
}

impl Debug for LocalTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let events = self.inner.events.borrow();
        f.debug_struct("LocalTarget")
            .field("id", &Rc::as_ptr(&self.inner))
            .field("event_types", &events.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ListenerTarget for LocalTarget {
    type Callback = Listener;

    fn attach(&self, event_type: &str, callback: &Listener) {
        self.add_listener(event_type, callback);
    }

    fn detach(&self, event_type: &str, callback: &Listener) {
        self.remove_listener(event_type, callback);
    }

    fn same_target(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
