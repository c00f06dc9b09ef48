mod dom;
mod local;

pub use dom::*;
pub use local::*;

/// An object that can accept and later revoke event callbacks.
///
/// Implementors are handles: cloning one must yield another reference to the
/// same underlying target, never a copy of it.
pub trait ListenerTarget: Clone {
    type Callback: Clone;

    fn attach(&self, event_type: &str, callback: &Self::Callback);

    /// Removing a callback that is not attached is a no-op.
    fn detach(&self, event_type: &str, callback: &Self::Callback);

    /// Identity comparison. Two structurally equal targets are still distinct.
    fn same_target(&self, other: &Self) -> bool;
}
