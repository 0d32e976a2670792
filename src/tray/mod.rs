pub mod cli;
pub mod orchestrator;
pub mod plugin;
pub mod sound;
pub mod systems;
pub mod timers;
pub mod types;

pub use orchestrator::*;
pub use plugin::*;
pub use types::*;
