pub mod config;
pub mod constants;
pub mod engine;
pub mod input;
pub mod integrator;
pub mod loudness;
pub mod panels;
pub mod parallax;
pub mod progress;
pub mod starfield;
pub mod triggers;

pub use config::*;
pub use engine::*;
pub use input::*;
pub use integrator::*;
pub use loudness::*;
pub use panels::*;
pub use progress::*;
pub use starfield::*;
pub use triggers::*;
