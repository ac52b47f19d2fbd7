//! Project configuration.
//!
//! Optional `architect.toml` inside the project's metadata directory. Every
//! key is optional; command-line flags take precedence.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ArchitectError, ArchitectResult};
use crate::preset::{get_preset, Preset};

/// Metadata directory written into scaffolded projects.
pub const METADATA_DIR: &str = ".firebase-architect";

/// Name of the configuration file inside [`METADATA_DIR`].
pub const CONFIG_FILE: &str = "architect.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchitectConfig {
    /// UI template used when none is given on the command line.
    pub template: Option<String>,
    /// Preset used when none is given on the command line.
    pub preset: Option<String>,
    /// Output directory, relative to the project directory.
    pub output_dir: Option<PathBuf>,
}

impl ArchitectConfig {
    pub fn path(project_dir: &Path) -> PathBuf {
        project_dir.join(METADATA_DIR).join(CONFIG_FILE)
    }

    /// Load the project's config; a missing file yields the defaults.
    pub fn load(project_dir: &Path) -> ArchitectResult<Self> {
        let path = Self::path(project_dir);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> ArchitectResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The configured preset, if any. A preset id that is not registered is
    /// an error.
    pub fn preset(&self) -> ArchitectResult<Option<&'static Preset>> {
        match &self.preset {
            Some(id) => get_preset(id)
                .map(Some)
                .ok_or_else(|| ArchitectError::config(format!("preset '{}' in {} not found", id, CONFIG_FILE))),
            None => Ok(None),
        }
    }

    /// Output directory resolved against the project directory.
    pub fn output_dir(&self, project_dir: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => project_dir.join(dir),
            None => project_dir.to_path_buf(),
        }
    }
}
