//! Data models

pub mod incident;
pub mod params;
pub mod summary;

pub use incident::*;
pub use params::*;
pub use summary::*;
