//! Bookkeeping for listeners attached to many event targets.
//!
//! Register callbacks through a [`ListenerRegistry`] instead of directly on a
//! target, then drop them per `(target, event_type)` pair or all at once when
//! the owning component is torn down.

mod error;
mod event_manager;
mod events;
mod registry;

pub use error::RegistryError;
pub use event_manager::EventManager;
pub use events::{DomListener, Listener, ListenerTarget, LocalEvent, LocalTarget};
pub use registry::{ListenerRegistry, RegistryOptions};
