//! Musical pitch reference tables and the reactive state shared by the
//! pitch-selector UI and its audio runtime.

pub mod audio;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod input;
pub mod runtime;
pub mod selector;
pub mod store;
pub mod tonal;

pub use error::TonalError;
pub use store::{AppStore, AudioContextHandle};
