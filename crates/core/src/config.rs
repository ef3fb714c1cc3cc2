//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handling never reads environment variables; binaries
//! read them in `main` and hand the parsed values to `CoreConfig::new`.

use crate::constants::DEFAULT_ASSETS_DIR;
use crate::{TherabotError, TherabotResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    assets_dir: PathBuf,
    knowledge_file: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `assets_dir` may point at a directory that does not exist; the prescription is then
    /// rendered without decorations. `knowledge_file`, when given, must be an existing file.
    pub fn new(assets_dir: PathBuf, knowledge_file: Option<PathBuf>) -> TherabotResult<Self> {
        if let Some(path) = &knowledge_file {
            if !path.is_file() {
                return Err(TherabotError::InvalidInput(format!(
                    "knowledge file does not exist: {}",
                    path.display()
                )));
            }
        }

        Ok(Self {
            assets_dir,
            knowledge_file,
        })
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// YAML knowledge table to load instead of the built-in one.
    pub fn knowledge_file(&self) -> Option<&Path> {
        self.knowledge_file.as_deref()
    }
}

/// Resolve the decoration assets directory without reading environment variables.
///
/// An override is used as-is. Otherwise this looks for `assets/` relative to the current
/// working directory and then walks up from `CARGO_MANIFEST_DIR`. If nothing is found the
/// working-directory path is returned anyway, which simply yields no decorations.
pub fn resolve_assets_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }

    let cwd_relative = PathBuf::from(DEFAULT_ASSETS_DIR);
    if cwd_relative.is_dir() {
        return cwd_relative;
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(DEFAULT_ASSETS_DIR);
        if candidate.is_dir() {
            return candidate;
        }
    }

    cwd_relative
}

/// Parse an optional path-valued setting; `None` and blank values mean "not set".
pub fn path_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_env_values_are_unset() {
        assert_eq!(path_from_env_value(None), None);
        assert_eq!(path_from_env_value(Some("   ".into())), None);
        assert_eq!(
            path_from_env_value(Some(" kb.yaml ".into())),
            Some(PathBuf::from("kb.yaml"))
        );
    }

    #[test]
    fn override_assets_dir_wins() {
        let dir = PathBuf::from("/opt/therabot/assets");
        assert_eq!(resolve_assets_dir(Some(dir.clone())), dir);
    }

    #[test]
    fn missing_knowledge_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = CoreConfig::new(dir.path().into(), Some(dir.path().join("kb.yaml")));
        assert!(matches!(result, Err(TherabotError::InvalidInput(_))));
    }

    #[test]
    fn missing_assets_dir_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = CoreConfig::new(dir.path().join("absent"), None).unwrap();
        assert!(cfg.knowledge_file().is_none());
        assert!(cfg.assets_dir().ends_with("absent"));
    }
}
