//! Transform command

use hostmeta_transform::Transformer;

use crate::error::Result;

/// Run the transform command
///
/// An empty value counts as missing and prints an empty line.
pub fn run_transform(name: &str, value: &str) -> Result<()> {
    let transformer = Transformer::from_name(name)?;
    let input = Some(value).filter(|v| !v.trim().is_empty());

    let result = transformer.transform("value", input)?;
    println!("{}", result.unwrap_or_default());

    Ok(())
}
