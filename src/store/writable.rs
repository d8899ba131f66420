use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    subscribers: Vec<(u64, Subscriber<T>)>,
    next_id: u64,
    // Values written while subscribers were being notified.
    pending: VecDeque<T>,
    notifying: bool,
    skip_equal: bool,
}

// Ends a delivery round even if a subscriber unwinds out of it.
struct DeliveryRound<'a, T>(&'a RefCell<Inner<T>>);

impl<T> Drop for DeliveryRound<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.0.try_borrow_mut() {
            inner.notifying = false;
            inner.pending.clear();
        }
    }
}

/// A mutable value shared across UI components on a single thread.
///
/// Subscribers receive the current value as soon as they subscribe and every
/// subsequent change after that. Writes made from inside a subscriber are
/// delivered once the current round finishes, so all subscribers observe
/// values in the order they were written.
///
/// Cells built with [`Writable::new`] ignore writes equal to the current
/// value. Cells holding collections or handles use
/// [`Writable::new_always_notify`], where every write is a change.
pub struct Writable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self::with_mode(value, true)
    }

    /// A cell that notifies on every `set`, even when the new value is equal.
    pub fn new_always_notify(value: T) -> Self {
        Self::with_mode(value, false)
    }

    fn with_mode(value: T, skip_equal: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                subscribers: Vec::new(),
                next_id: 0,
                pending: VecDeque::new(),
                notifying: false,
                skip_equal,
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.skip_equal && inner.value == value {
                return;
            }
            inner.value = value.clone();
            if inner.notifying {
                inner.pending.push_back(value);
                return;
            }
            inner.notifying = true;
        }

        let _round = DeliveryRound(&*self.inner);
        let mut next = Some(value);
        while let Some(value) = next {
            for subscriber in self.snapshot() {
                subscriber(&value);
            }
            next = self.inner.borrow_mut().pending.pop_front();
        }
    }

    /// Compute a new value from the current one. `f` may itself write to the cell.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let current = self.get();
        self.set(f(&current));
    }

    /// Register `subscriber` and immediately hand it the current value.
    pub fn subscribe(&self, subscriber: impl Fn(&T) + 'static) -> Subscription {
        let subscriber: Subscriber<T> = Rc::new(subscriber);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::clone(&subscriber)));
            (id, inner.value.clone())
        };
        subscriber(&current);

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn snapshot(&self) -> Vec<Subscriber<T>> {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, s)| Rc::clone(s))
            .collect()
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for Writable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Handle returned by `subscribe`. Dropping it leaves the subscriber registered;
/// call [`Subscription::unsubscribe`] to remove it.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to cancel, used by constant cells.
    pub(crate) fn noop() -> Self {
        Self { cancel: None }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
