//! Merge engine: combining definitions, assembling standards with study
//! overrides, and flattening the result

mod assemble;
mod combine;
mod flatten;

pub use assemble::{assemble, combine_standards_and_study};
pub use combine::{combine_fields, combine_host_type, combine_sample_types};
pub use flatten::flatten;
