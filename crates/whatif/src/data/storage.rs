//! Scenario file storage
//!
//! Directory structure:
//! ~/.whatif/
//!   whatif.log           # Rotated log file
//!   scenarios/
//!     launch.yaml
//!     retention_push.yaml
//!
//! Scenario arguments on the command line are file paths. A bare name that
//! is not an existing file is looked up in `scenarios/` instead.

use std::fs;
use std::path::{Path, PathBuf};

use whatif_core::ScenarioInput;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    NotFound(PathBuf),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::NotFound(path) => {
                write!(f, "Scenario file not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Serialization format of a scenario file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }
}

/// Manages the data directory that holds named scenarios
pub struct ScenarioDirectory {
    root: PathBuf,
}

impl ScenarioDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.whatif/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".whatif")
    }

    /// Get the path to the scenarios directory
    pub fn scenarios_dir(&self) -> PathBuf {
        self.root.join("scenarios")
    }

    /// Get the path a named scenario is stored at
    pub fn scenario_path(&self, name: &str) -> PathBuf {
        self.scenarios_dir()
            .join(format!("{}.yaml", sanitize_filename(name)))
    }

    /// Resolve a command-line scenario argument to a file path
    pub fn resolve(&self, arg: &Path) -> Result<PathBuf, StorageError> {
        if arg.is_file() {
            return Ok(arg.to_path_buf());
        }
        let name = arg.to_string_lossy();
        let named = self.scenario_path(&name);
        if named.is_file() {
            Ok(named)
        } else {
            Err(StorageError::NotFound(arg.to_path_buf()))
        }
    }

    /// Resolve and load a scenario
    pub fn load(&self, arg: &Path) -> Result<ScenarioInput, StorageError> {
        let path = self.resolve(arg)?;
        load_scenario(&path)
    }
}

/// Load a scenario from a YAML (or `.json`) file.
///
/// A scenario without a `name` is named after the file stem.
pub fn load_scenario(path: &Path) -> Result<ScenarioInput, StorageError> {
    let content = fs::read_to_string(path).map_err(|e| {
        StorageError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let mut input = parse_scenario(&content, FileFormat::of(path)).map_err(|e| {
        StorageError::Parse(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    if input.name.is_empty()
        && let Some(stem) = path.file_stem()
    {
        input.name = stem.to_string_lossy().into_owned();
    }

    tracing::debug!(path = %path.display(), name = %input.name, "loaded scenario");
    Ok(input)
}

fn parse_scenario(content: &str, format: FileFormat) -> Result<ScenarioInput, String> {
    match format {
        FileFormat::Yaml => serde_saphyr::from_str(content).map_err(|e| e.to_string()),
        FileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Sanitize a filename by replacing invalid characters
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
