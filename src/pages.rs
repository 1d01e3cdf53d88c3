//! Page generation modules
//!
//! Standalone HTML pages built from maud components.

pub mod preview;
