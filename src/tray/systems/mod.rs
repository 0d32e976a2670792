//! Bevy systems for the tray window

pub mod audio;
pub mod display;
pub mod input;
pub mod setup;

pub use audio::*;
pub use display::*;
pub use input::*;
pub use setup::*;
