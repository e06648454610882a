pub mod color;
pub mod constants;
pub mod orbs;
pub mod particles;
pub mod viewport;
pub mod warp;

// Shaders bundled as string constants
pub static WARP_WGSL: &str = include_str!("../shaders/warp.wgsl");

pub use color::*;
pub use constants::*;
pub use orbs::*;
pub use particles::*;
pub use viewport::*;
pub use warp::*;
