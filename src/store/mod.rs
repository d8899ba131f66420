//! Reactive cells shared between the audio runtime and the UI.

mod readable;
mod state;
mod writable;

pub use self::readable::Readable;
pub use self::state::{AppStore, AudioContextHandle};
pub use self::writable::{Subscription, Writable};
