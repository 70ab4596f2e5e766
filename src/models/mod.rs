//! Data models

pub mod features;
pub mod verdict;
pub mod prediction;

pub use features::*;
pub use verdict::*;
pub use prediction::*;
