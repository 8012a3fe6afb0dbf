//! Row-value transformers
//!
//! A transformer derives one metadata value from one source column of a row,
//! e.g. `sex` from `sex_at_birth`. Missing values (`None`) pass through so the
//! caller's default handling can fill them in.

pub mod datetime;
pub mod error;

pub use error::{Error, Result};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Age in years below which a host is a child
pub const ADULT_AGE_YEARS: i64 = 17;

/// A transformer selectable by its configuration name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformer {
    PassThrough,
    SexAtBirthToSex,
    AgeToLifeStage,
    FormatDatetime,
}

impl Transformer {
    /// Every transformer, in name order
    pub const ALL: [Transformer; 4] = [
        Transformer::FormatDatetime,
        Transformer::PassThrough,
        Transformer::AgeToLifeStage,
        Transformer::SexAtBirthToSex,
    ];

    /// Look up a transformer by its configuration name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::UnknownTransformer {
                name: name.to_string(),
            })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PassThrough => "pass_through",
            Self::SexAtBirthToSex => "transform_sex_at_birth_to_sex",
            Self::AgeToLifeStage => "transform_age_to_life_stage",
            Self::FormatDatetime => "format_a_datetime",
        }
    }

    /// Transform one value; `field` names its source column in errors.
    pub fn transform(&self, field: &str, value: Option<&str>) -> Result<Option<String>> {
        match self {
            Self::PassThrough => Ok(pass_through(value)),
            Self::SexAtBirthToSex => transform_sex_at_birth_to_sex(value),
            Self::AgeToLifeStage => transform_age_to_life_stage(field, value),
            Self::FormatDatetime => format_a_datetime(field, value),
        }
    }

    /// Read the single source field from `row` and transform it.
    ///
    /// `sources` must name exactly one column. A column missing from the row
    /// is an error; an empty cell is passed on as a missing value.
    pub fn apply(&self, row: &BTreeMap<String, String>, sources: &[&str]) -> Result<Option<String>> {
        let [field] = sources else {
            return Err(Error::WrongSourceCount {
                transformer: self.name(),
                count: sources.len(),
            });
        };

        let value = row.get(*field).ok_or_else(|| Error::MissingSourceField {
            field: field.to_string(),
        })?;
        let value = Some(value.as_str()).filter(|v| !v.trim().is_empty());

        tracing::trace!(transformer = self.name(), %field, ?value, "Applying transformer");
        self.transform(field, value)
    }
}

impl fmt::Display for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Transformer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

pub fn pass_through(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// Map a free-text sex-at-birth answer onto `female`, `male`, `intersex` or
/// `not provided`.
///
/// `female` is checked before `male`, which it contains.
pub fn transform_sex_at_birth_to_sex(value: Option<&str>) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let contains_any = |needles: &[&str]| needles.iter().any(|n| value.contains(n));
    let sex = if contains_any(&["Female", "female"]) {
        "female"
    } else if contains_any(&["Male", "male"]) {
        "male"
    } else if contains_any(&["Intersex", "intersex"]) {
        "intersex"
    } else if value.contains("PreferNotToAnswer") {
        "not provided"
    } else {
        return Err(Error::UnrecognizedSex {
            value: value.to_string(),
        });
    };
    Ok(Some(sex.to_string()))
}

/// `child` below [`ADULT_AGE_YEARS`], `adult` otherwise.
///
/// Ages are whole years, so neonates are not distinguished.
pub fn transform_age_to_life_stage(field: &str, value: Option<&str>) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let age: i64 = value.trim().parse().map_err(|_| Error::NotAnInteger {
        field: field.to_string(),
    })?;
    let stage = if age < ADULT_AGE_YEARS { "child" } else { "adult" };
    Ok(Some(stage.to_string()))
}

/// Normalize a date or datetime to `YYYY-MM-DD HH:MM`.
pub fn format_a_datetime(field: &str, value: Option<&str>) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };

    datetime::normalize_datetime(value)
        .map(Some)
        .ok_or_else(|| Error::NotADate {
            field: field.to_string(),
        })
}
