//! Type definitions for the dice tray
//!
//! Domain types (dice, faces, history) live in plain modules so they can be
//! used without a running app; `ui` holds the Bevy marker components.

pub mod dice;
pub mod face;
pub mod history;
pub mod ui;

pub use dice::*;
pub use face::*;
pub use history::*;
pub use ui::*;
