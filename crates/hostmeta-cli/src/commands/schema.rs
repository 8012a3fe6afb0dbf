//! Validator schema command

use hostmeta_core::validator_schema;

use super::standards_resolver;
use crate::cli::StudyArgs;
use crate::error::{CliError, Result};

/// Run the schema command
pub fn run_schema(inputs: &StudyArgs, host_type: &str, sample_type: &str) -> Result<()> {
    let flat = standards_resolver(inputs)?.resolve_file(&inputs.study)?;

    if !flat.contains(host_type) {
        let known: Vec<_> = flat.names().collect();
        return Err(CliError::user(format!(
            "Unknown host type '{host_type}'. Known host types: {}",
            known.join(", ")
        )));
    }

    let fields = flat.sample_type_fields(host_type, sample_type)?;
    let schema = validator_schema(&fields)?;
    println!("{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}
