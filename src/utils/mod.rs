// Utility functions

pub mod text;

pub use text::*;
