use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// `register` was called on a registry that has already been destroyed.
    #[error("listener registry '{0}' has been destroyed")]
    InvalidState(String),

    /// An empty event type passed to `register` on a strict registry.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<RegistryError> for JsValue {
    fn from(err: RegistryError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
