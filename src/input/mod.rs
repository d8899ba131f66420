//! Native input front-ends for the pitch selector.

mod keyboard;
mod midi;

pub use self::keyboard::KeyboardHandler;
pub use self::midi::MidiHandler;
