pub mod column;
pub mod project;
pub mod task;

pub use column::*;
pub use project::*;
pub use task::*;
