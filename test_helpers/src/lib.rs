//! Shared fixtures for tests across the workspace.
//!
//! Locates the workspace root from whatever directory a test runs in and hands
//! out paths under `<root>/test_output/`, where tests leave artifacts such as
//! composed scenes for manual inspection. The directory persists between runs.
//!
//! ```rust
//! use test_helpers::{find_project_root, output_path};
//!
//! let root = find_project_root().expect("Failed to find project");
//! assert!(root.join("planisphere").exists());
//!
//! let scene_path = output_path("scene.json");
//! assert!(scene_path.starts_with(&root));
//! ```

use once_cell::sync::Lazy;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum TestHelperError {
    /// No ancestor directory holds a workspace `Cargo.toml`
    #[error("Failed to find project root: {0}")]
    ProjectRootNotFound(String),

    #[error("Failed to write artifact {path}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize artifact: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Walk up from the current directory to the `Cargo.toml` carrying `[workspace]`.
pub fn find_project_root() -> Result<PathBuf, TestHelperError> {
    let mut current_dir = env::current_dir().map_err(|e| {
        TestHelperError::ProjectRootNotFound(format!("Failed to get current directory: {}", e))
    })?;

    loop {
        let cargo_toml = current_dir.join("Cargo.toml");
        if cargo_toml.exists() {
            let content = std::fs::read_to_string(&cargo_toml).map_err(|e| {
                TestHelperError::ProjectRootNotFound(format!("Failed to read Cargo.toml: {}", e))
            })?;

            if content.contains("[workspace]") {
                return Ok(current_dir);
            }
        }

        if !current_dir.pop() {
            break;
        }
    }

    Err(TestHelperError::ProjectRootNotFound(
        "Workspace root not found".to_string(),
    ))
}

static PROJECT_ROOT: Lazy<PathBuf> =
    Lazy::new(|| find_project_root().expect("Failed to find project root directory"));

/// `<root>/test_output/`, created on first use
pub fn get_output_dir() -> PathBuf {
    let output_dir = PROJECT_ROOT.join("test_output");

    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");
    }

    output_dir
}

pub fn output_path<P: AsRef<Path>>(path: P) -> PathBuf {
    get_output_dir().join(path)
}

/// Serialize `value` as pretty JSON into the output directory.
///
/// Parent directories inside the output directory are created as needed.
/// Returns the full path written.
pub fn write_json_artifact<P: AsRef<Path>, T: Serialize>(
    path: P,
    value: &T,
) -> Result<PathBuf, TestHelperError> {
    let path = output_path(path);
    let json = serde_json::to_string_pretty(value)?;

    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, json)
    };
    write().map_err(|source| TestHelperError::ArtifactWrite {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
