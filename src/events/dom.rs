use std::fmt::Debug;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::{Event, EventTarget};

use super::ListenerTarget;

/// A callback for a browser [`EventTarget`].
///
/// When built from a Rust closure the `Closure` is owned here, so it stays
/// callable from JS until the last clone of the listener is dropped.
#[derive(Clone)]
pub struct DomListener {
    function: Function,
    closure: Option<Rc<Closure<dyn FnMut(Event)>>>,
}

impl DomListener {
    pub fn new(callback: impl FnMut(Event) + 'static) -> Self {
        let closure = Closure::<dyn FnMut(Event)>::new(callback);
        let function = closure.as_ref().unchecked_ref::<Function>().clone();
        Self {
            function,
            closure: Some(Rc::new(closure)),
        }
    }

    /// Wraps a function created on the JS side.
    pub fn from_function(function: Function) -> Self {
        Self {
            function,
            closure: None,
        }
    }

    pub fn function(&self) -> &Function {
        &self.function
    }
}

impl PartialEq for DomListener {
    fn eq(&self, other: &Self) -> bool {
        let a: &JsValue = self.function.as_ref();
        let b: &JsValue = other.function.as_ref();
        a == b
    }
}

impl Debug for DomListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomListener")
            .field("owns_closure", &self.closure.is_some())
            .finish()
    }
}

impl ListenerTarget for EventTarget {
    type Callback = DomListener;

    fn attach(&self, event_type: &str, callback: &DomListener) {
        if let Err(err) = self.add_event_listener_with_callback(event_type, &callback.function) {
            warn!(event_type, error = ?err, "failed to attach DOM listener");
        }
    }

    fn detach(&self, event_type: &str, callback: &DomListener) {
        if let Err(err) = self.remove_event_listener_with_callback(event_type, &callback.function)
        {
            warn!(event_type, error = ?err, "failed to detach DOM listener");
        }
    }

    fn same_target(&self, other: &Self) -> bool {
        let a: &JsValue = self.as_ref();
        let b: &JsValue = other.as_ref();
        a == b
    }
}
