//! Input abstraction for loading plot specs from JSON files or presets.
//!
//! Returns a consistent result type carrying source provenance, so reports
//! can say where a spec came from.

use fourierplot_spec::PlotSpec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Recognized spec file extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Where a spec was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// JSON spec file.
    Json,
    /// Built-in preset.
    Preset,
}

impl SourceKind {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Json => "json",
            SourceKind::Preset => "preset",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A loaded plot spec.
#[derive(Debug)]
pub struct LoadResult {
    pub spec: PlotSpec,
    pub source_kind: SourceKind,
    /// BLAKE3 hash of the source text (the file, or the preset's JSON).
    pub source_hash: String,
    /// Human-readable origin: the file path or `preset:<name>`.
    pub origin: String,
}

/// Errors that can occur during spec loading.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },

    /// No preset with this name.
    UnknownPreset { message: String },

    /// Neither or both of `--spec` and `--preset` were given.
    MissingSource,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown file extension '.{}' (expected .json)", ext),
                None => write!(f, "file has no extension (expected .json)"),
            },
            InputError::JsonParse { message } => write!(f, "JSON parse error: {}", message),
            InputError::UnknownPreset { message } => write!(f, "{}", message),
            InputError::MissingSource => {
                write!(f, "exactly one of --spec or --preset must be given")
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load a spec from either a file path or a preset name.
///
/// Exactly one of the two must be given.
pub fn load_spec_or_preset(
    spec_path: Option<&str>,
    preset: Option<&str>,
) -> Result<LoadResult, InputError> {
    match (spec_path, preset) {
        (Some(path), None) => load_spec(Path::new(path)),
        (None, Some(name)) => load_preset(name),
        _ => Err(InputError::MissingSource),
    }
}

/// Load a spec from a JSON file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use fourierplot_cli::input::load_spec;
///
/// let result = load_spec(Path::new("square.json")).unwrap();
/// println!("Loaded {}", result.spec.plot_id);
/// ```
pub fn load_spec(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => {}
        _ => return Err(InputError::UnknownExtension { extension }),
    }

    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let spec = PlotSpec::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    Ok(LoadResult {
        spec,
        source_kind: SourceKind::Json,
        source_hash,
        origin: path.display().to_string(),
    })
}

/// Load a built-in preset.
pub fn load_preset(name: &str) -> Result<LoadResult, InputError> {
    let spec = PlotSpec::preset(name).map_err(|e| InputError::UnknownPreset {
        message: e.to_string(),
    })?;
    let json = spec.to_json().map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    Ok(LoadResult {
        spec,
        source_kind: SourceKind::Preset,
        source_hash: blake3::hash(json.as_bytes()).to_hex().to_string(),
        origin: format!("preset:{}", name),
    })
}
