pub mod session;
pub mod storage;

pub use storage::*;
