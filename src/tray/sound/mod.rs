//! Procedural dice roll sounds
//!
//! Each roll gets freshly synthesized audio: noise bursts shaped by decay
//! envelopes, filtered, placed on a short timeline and mixed into one clip.

pub mod burst;
pub mod filter;
pub mod plan;
pub mod synth;
pub mod wav;

pub use burst::*;
pub use filter::*;
pub use plan::*;
pub use synth::*;
pub use wav::*;
