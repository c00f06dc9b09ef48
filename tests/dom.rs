#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use listener_registry::{DomListener, EventManager, ListenerRegistry, RegistryError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use wasm_bindgen_test::*;
use web_sys::{Event, EventTarget};

wasm_bindgen_test_configure!(run_in_browser);

fn create_target() -> EventTarget {
    console_error_panic_hook::set_once();
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .create_element("div")
        .unwrap()
        .unchecked_into::<EventTarget>()
}

fn fire(target: &EventTarget, event_type: &str) {
    let event = Event::new(event_type).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn spy() -> (DomListener, Rc<Cell<u32>>) {
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    (DomListener::new(move |_| counter.set(counter.get() + 1)), hits)
}

#[wasm_bindgen_test]
fn listens_on_the_right_element() {
    let target1 = create_target();
    let target2 = create_target();
    let (listener1, hits1) = spy();
    let (listener2, hits2) = spy();
    let mut registry = ListenerRegistry::new();

    registry.register(&target1, "eventtype1", listener1).unwrap();
    registry.register(&target2, "eventtype1", listener2).unwrap();
    fire(&target1, "eventtype1");

    assert_eq!((hits1.get(), hits2.get()), (1, 0));
}

#[wasm_bindgen_test]
fn unregister_detaches_from_element() {
    let target = create_target();
    let (listener, hits) = spy();
    let mut registry = ListenerRegistry::new();

    registry.register(&target, "eventtype1", listener).unwrap();
    registry.unregister(&target, "eventtype1");
    fire(&target, "eventtype1");

    assert_eq!(hits.get(), 0);
}

#[wasm_bindgen_test]
fn destroy_detaches_and_rejects_registration() {
    let target = create_target();
    let (listener, hits) = spy();
    let mut registry = ListenerRegistry::new();

    registry.register(&target, "click", listener.clone()).unwrap();
    registry.destroy();
    fire(&target, "click");

    assert_eq!(hits.get(), 0);
    assert!(matches!(
        registry.register(&target, "click", listener),
        Err(RegistryError::InvalidState(_))
    ));
}

#[wasm_bindgen_test]
fn event_manager_listens_with_js_functions() {
    let target = create_target();
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |_| counter.set(counter.get() + 1));
    let function = closure.as_ref().unchecked_ref::<Function>().clone();
    let mut manager = EventManager::new(Some("page".to_string()));

    manager.listen(&target, "eventtype1", function.clone()).unwrap();
    fire(&target, "eventtype1");
    manager.remove_all();
    fire(&target, "eventtype1");

    assert_eq!(hits.get(), 1);
    assert_eq!(manager.size(), 0);
}

#[wasm_bindgen_test]
fn event_manager_reports_destroyed_state_as_js_error() {
    let target = create_target();
    let function = Function::new_no_args("");
    let mut manager = EventManager::new(Some("page".to_string()));

    manager.destroy();
    let err = manager.listen(&target, "click", function).unwrap_err();

    assert_eq!(
        err.as_string().as_deref(),
        Some("listener registry 'page' has been destroyed")
    );
}
