pub mod backend;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame_loop;
pub mod hotspots;
pub mod input;
pub mod ramp;
pub mod sample;
pub mod session;
pub mod sphere;
pub mod timers;
pub mod tour;
pub mod transition;
pub static PANORAMA_WGSL: &str = include_str!("../shaders/panorama.wgsl");

pub use backend::*;
pub use camera::*;
pub use config::*;
pub use error::*;
pub use frame_loop::*;
pub use hotspots::*;
pub use input::*;
pub use ramp::*;
pub use session::*;
pub use sphere::*;
pub use timers::*;
pub use tour::*;
pub use transition::*;
