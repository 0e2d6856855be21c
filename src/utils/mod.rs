//! Utility functions shared across the application
//!
//! This module contains common helpers for formatting, paths, system
//! directories and progress animation.

mod format;
mod path;
mod progress;
mod system;

pub use format::*;
pub use path::*;
pub use progress::*;
pub use system::*;
