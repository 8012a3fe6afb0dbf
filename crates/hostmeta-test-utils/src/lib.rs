//! Shared test utilities for the hostmeta workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: canonical standards and study documents
//! - [`dir`]: [`TestConfigDir`] builder for on-disk scenarios

pub mod dir;
pub mod fixtures;

pub use dir::TestConfigDir;
