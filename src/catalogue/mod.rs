pub mod accessor;
pub mod loader;
pub mod model;

pub use accessor::*;
pub use model::*;
