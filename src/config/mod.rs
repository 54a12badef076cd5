pub mod descriptor;
pub mod resources;
pub mod settings;

pub use descriptor::*;
pub use resources::*;
pub use settings::*;
