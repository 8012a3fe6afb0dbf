//! Host-types listing command

use colored::Colorize;
use serde_json::json;

use super::standards_resolver;
use crate::cli::StudyArgs;
use crate::error::Result;

/// Run the host-types command
pub fn run_host_types(inputs: &StudyArgs, json: bool) -> Result<()> {
    let flat = standards_resolver(inputs)?.resolve_file(&inputs.study)?;

    if json {
        let listing: Vec<_> = flat
            .iter()
            .map(|(name, host)| {
                json!({
                    "name": name,
                    "default": host.default,
                    "fields": host.metadata_fields.len(),
                    "sample_types": host.sample_type_specific_metadata.keys().collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", "Host Types".bold());
    println!();
    for (name, host) in flat.iter() {
        let default = host.default.as_deref().unwrap_or("-");
        println!(
            "  {:<20} {:>3} fields  {:>3} sample types  {}",
            name.green(),
            host.metadata_fields.len(),
            host.sample_type_specific_metadata.len(),
            format!("default: {default}").dimmed()
        );
    }
    println!();
    println!("{} {} host types resolved.", "Total:".dimmed(), flat.len());

    Ok(())
}
