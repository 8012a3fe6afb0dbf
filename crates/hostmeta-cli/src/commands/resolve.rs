//! Resolve command

use colored::Colorize;
use hostmeta_fs::ConfigStore;
use std::path::Path;

use super::standards_resolver;
use crate::cli::StudyArgs;
use crate::error::Result;

/// Run the resolve command
///
/// Prints YAML to stdout unless `output` is given, in which case the file is
/// written atomically in the format its extension names.
pub fn run_resolve(inputs: &StudyArgs, output: Option<&Path>, nested: bool) -> Result<()> {
    let resolver = standards_resolver(inputs)?;
    let study = resolver.load_study(&inputs.study)?;

    if nested {
        let combined = resolver.combined(&study)?;
        return emit(&combined, output, combined.host_type_specific_metadata.len());
    }

    let flat = resolver.resolve(&study)?;
    emit(&flat, output, flat.len())
}

fn emit<T: serde::Serialize>(value: &T, output: Option<&Path>, host_types: usize) -> Result<()> {
    match output {
        Some(path) => {
            ConfigStore::new().save(path, value)?;
            println!(
                "{} Wrote {} host types to {}",
                "OK".green().bold(),
                host_types,
                path.display()
            );
        }
        None => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}
