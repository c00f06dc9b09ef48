use wasm_bindgen::prelude::*;
use web_sys::js_sys::Function;
use web_sys::EventTarget;

use crate::events::DomListener;
use crate::registry::{ListenerRegistry, RegistryOptions};

/// JS-facing registry over DOM event targets.
#[wasm_bindgen]
pub struct EventManager {
    registry: ListenerRegistry<EventTarget>,
}

#[wasm_bindgen]
impl EventManager {
    #[wasm_bindgen(constructor)]
    pub fn new(name: Option<String>) -> Self {
        let mut options = RegistryOptions::default();
        if let Some(name) = name {
            options = options.name(name);
        }
        Self {
            registry: ListenerRegistry::with_options(options),
        }
    }

    pub fn listen(
        &mut self,
        target: &EventTarget,
        event_type: &str,
        callback: Function,
    ) -> Result<(), JsValue> {
        self.registry
            .register(target, event_type, DomListener::from_function(callback))?;
        Ok(())
    }

    pub fn unlisten(&mut self, target: &EventTarget, event_type: &str) {
        self.registry.unregister(target, event_type);
    }

    #[wasm_bindgen(js_name = removeAll)]
    pub fn remove_all(&mut self) {
        self.registry.remove_all();
    }

    pub fn destroy(&mut self) {
        self.registry.destroy();
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.registry.len()
    }
}
