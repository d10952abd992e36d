pub mod lessons;
pub mod types;

pub use lessons::*;
pub use types::*;
