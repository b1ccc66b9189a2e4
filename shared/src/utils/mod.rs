//! Common utility functions

pub mod sanitizer;

pub use sanitizer::clean;
