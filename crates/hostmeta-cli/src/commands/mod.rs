//! Command implementations for hostmeta-cli

pub mod host_types;
pub mod resolve;
pub mod schema;
pub mod transform;

pub use host_types::run_host_types;
pub use resolve::run_resolve;
pub use schema::run_schema;
pub use transform::run_transform;

use hostmeta_core::StandardsResolver;

use crate::cli::StudyArgs;
use crate::error::Result;

/// Resolver for `--standards`, or for the default standards file.
pub(crate) fn standards_resolver(inputs: &StudyArgs) -> Result<StandardsResolver> {
    let resolver = match &inputs.standards {
        Some(path) => StandardsResolver::new(path.clone()),
        None => StandardsResolver::with_default_standards()?,
    };
    tracing::debug!(standards = %resolver.standards_path().display(), "Using standards file");
    Ok(resolver)
}
