//! Data models

pub mod contact;
pub mod registry;

pub use contact::*;
pub use registry::*;
