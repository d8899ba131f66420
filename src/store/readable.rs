use super::writable::Subscription;

/// A value that never changes after construction.
///
/// Subscribing delivers the value once; there is nothing to deliver afterwards.
#[derive(Debug, Clone)]
pub struct Readable<T> {
    value: T,
}

impl<T> Readable<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn subscribe(&self, subscriber: impl FnOnce(&T)) -> Subscription {
        subscriber(&self.value);
        Subscription::noop()
    }
}
