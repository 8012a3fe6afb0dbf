//! Standards + study resolution pipeline
//!
//! The `StandardsResolver` loads a standards file and a study file, layers the
//! study's flat overrides onto the standards tree and flattens the result.

use hostmeta_fs::ConfigStore;
use std::path::{Path, PathBuf};

use crate::merge::combine_standards_and_study;
use crate::model::{FlatHostTypes, StandardsTree, StudyConfig};
use crate::{Error, Result};

/// File name of the standards file inside the config directory
pub const DEFAULT_STANDARDS_FILE: &str = "standards.yml";

/// Application directory name under the platform config directory
const APP_DIR: &str = "hostmeta";

/// Resolves study configurations against one standards file
///
/// The standards file is read on every call, so edits between calls are
/// picked up. Both files may be YAML, JSON or TOML, chosen by extension.
#[derive(Debug, Clone)]
pub struct StandardsResolver {
    standards_path: PathBuf,
    store: ConfigStore,
}

impl StandardsResolver {
    /// Create a resolver for the standards file at `standards_path`
    pub fn new(standards_path: impl Into<PathBuf>) -> Self {
        Self {
            standards_path: standards_path.into(),
            store: ConfigStore::new(),
        }
    }

    /// Create a resolver for the standards file in the platform config
    /// directory:
    /// - Linux: `~/.config/hostmeta/standards.yml`
    /// - macOS: `~/Library/Application Support/hostmeta/standards.yml`
    /// - Windows: `%APPDATA%\hostmeta\standards.yml`
    pub fn with_default_standards() -> Result<Self> {
        Self::default_standards_path()
            .map(Self::new)
            .ok_or(Error::NoConfigDir)
    }

    /// Where [`with_default_standards`](Self::with_default_standards) looks,
    /// if the platform has a config directory at all.
    pub fn default_standards_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(DEFAULT_STANDARDS_FILE))
    }

    pub fn standards_path(&self) -> &Path {
        &self.standards_path
    }

    /// Load and check the standards tree.
    ///
    /// A missing file is [`Error::StandardsNotFound`]; a sample-type record
    /// with conflicting keys is [`Error::SampleTypeConflict`].
    pub fn load_standards(&self) -> Result<StandardsTree> {
        if !self.standards_path.is_file() {
            return Err(Error::StandardsNotFound {
                path: self.standards_path.clone(),
            });
        }

        tracing::debug!(standards_path = ?self.standards_path, "Loading standards");
        let standards: StandardsTree = self.store.load(&self.standards_path)?;
        standards.check_sample_types()?;
        Ok(standards)
    }

    /// Load and check a study file.
    pub fn load_study(&self, study_path: &Path) -> Result<StudyConfig> {
        tracing::debug!(?study_path, "Loading study config");
        let study: StudyConfig = self.store.load(study_path)?;
        study.check_sample_types()?;
        Ok(study)
    }

    /// The standards tree with the study's overrides applied at every depth,
    /// still nested.
    pub fn combined(&self, study: &StudyConfig) -> Result<StandardsTree> {
        let standards = self.load_standards()?;
        tracing::debug!(
            overrides = study.host_types().len(),
            "Applying study overrides to standards"
        );
        combine_standards_and_study(study, &standards)
    }

    /// The flat dictionary of fully resolved host types for `study`.
    pub fn resolve(&self, study: &StudyConfig) -> Result<FlatHostTypes> {
        let flat = self.combined(study)?.flatten()?;
        tracing::info!(host_types = flat.len(), "Resolved host types");
        Ok(flat)
    }

    /// Load the study at `study_path`, then [`resolve`](Self::resolve) it.
    pub fn resolve_file(&self, study_path: &Path) -> Result<FlatHostTypes> {
        let study = self.load_study(study_path)?;
        self.resolve(&study)
    }
}
