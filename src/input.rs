/*!
# Document Loading

Reads a whole content document into memory and parses it into a
[`serde_json::Value`]. JSON is always supported; YAML and TOML input are
available behind the `yaml` and `toml` cargo features (both on by default
via `all-formats`), detected from the file extension.

The collection file the tool appends to is loaded here as well, so that a
missing file starts an empty collection while a present-but-broken file
aborts the run before anything is written.
*/
use serde_json::Value;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::token::Collection;

/// On-disk formats a content document may use.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum DocumentFormat {
    /// JSON, the default for any unrecognized extension.
    Json,
    #[cfg(feature = "yaml")]
    /// YAML (`.yaml`/`.yml`).
    Yaml,
    #[cfg(feature = "toml")]
    /// TOML (`.toml`).
    Toml,
}

impl DocumentFormat {
    /// Detect the format from the file extension. Unknown extensions are
    /// treated as JSON; an extension naming a format this build was
    /// compiled without is an error rather than a confusing JSON parse
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnsupportedFormat`] for a recognized
    /// extension whose feature is disabled.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Ok(Self::Yaml),
            #[cfg(not(feature = "yaml"))]
            Some("yaml" | "yml") => Err(DocumentError::UnsupportedFormat(path.to_path_buf())),
            #[cfg(feature = "toml")]
            Some("toml") => Ok(Self::Toml),
            #[cfg(not(feature = "toml"))]
            Some("toml") => Err(DocumentError::UnsupportedFormat(path.to_path_buf())),
            _ => Ok(Self::Json),
        }
    }
}

/// Errors from loading a content document or an existing collection.
#[derive(Debug)]
pub enum DocumentError {
    /// The file does not exist.
    NotFound(PathBuf),
    /// The file exists but could not be read.
    Read(PathBuf, std::io::Error),
    /// The file contents are not valid for the detected format.
    Parse(PathBuf, Box<dyn Error + Send + Sync>),
    /// The extension names a format this build was compiled without.
    UnsupportedFormat(PathBuf),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "File '{}' not found", path.display()),
            Self::Read(path, err) => {
                write!(f, "Failed to read file '{}': {err}", path.display())
            }
            Self::Parse(path, err) => {
                write!(f, "Invalid content in file '{}': {err}", path.display())
            }
            Self::UnsupportedFormat(path) => write!(
                f,
                "File '{}' uses a format this build does not include",
                path.display()
            ),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(_, err) => Some(err),
            Self::Parse(_, err) => Some(err.as_ref()),
            Self::NotFound(_) | Self::UnsupportedFormat(_) => None,
        }
    }
}

/// Read and parse a whole content document.
///
/// # Errors
///
/// Returns a [`DocumentError`] if the file is missing, unreadable, in a
/// format this build was compiled without, or fails to parse.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let format = DocumentFormat::from_path(path)?;
    let raw = read_whole_file(path)?;
    let parse_err = |err: Box<dyn Error + Send + Sync>| DocumentError::Parse(path.to_path_buf(), err);
    match format {
        DocumentFormat::Json => serde_json::from_str(&raw).map_err(|err| parse_err(Box::new(err))),
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::from_str(&raw).map_err(|err| parse_err(Box::new(err))),
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str(&raw).map_err(|err| parse_err(Box::new(err))),
    }
}

/// Load an existing token collection, or start an empty one if the file
/// does not exist yet.
///
/// # Errors
///
/// Returns a [`DocumentError`] if the file exists but cannot be read or is
/// not a valid collection.
pub fn load_collection(path: &Path) -> Result<Collection, DocumentError> {
    if !path.exists() {
        return Ok(Collection::new());
    }
    let raw = read_whole_file(path)?;
    serde_json::from_str(&raw).map_err(|err| DocumentError::Parse(path.to_path_buf(), Box::new(err)))
}

fn read_whole_file(path: &Path) -> Result<String, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|err| DocumentError::Read(path.to_path_buf(), err))
}
