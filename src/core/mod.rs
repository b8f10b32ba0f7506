pub mod logging;
pub mod resources;

pub use resources::Resources;
