//! Dice Tray
//!
//! A polyhedral dice roller: pick dice, roll them, watch the faces flicker
//! before settling, hear a synthesized tumble, and keep a numbered history.
//! The `tray` module holds the roll logic and sound synthesis as plain types;
//! `tray::plugin` puts them in a Bevy window and `tray::cli` in a terminal.

pub mod tray;
