pub mod asset;
pub mod project;
pub mod task;

pub use asset::*;
pub use project::*;
pub use task::*;
