//! Filesystem layer for hostmeta
//!
//! Reads standards and study configuration files in whichever format their
//! extension names, and writes resolved output atomically.

pub mod config;
pub mod error;
pub mod format;
pub mod io;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use format::ConfigFormat;
