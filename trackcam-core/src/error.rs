use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failures while reading a camera configuration. The camera math itself
/// has no error cases.
#[derive(Error, Debug)]
pub enum ConfigError
{
  #[error("failed to read camera config {path}: {source}")]
  Io
  {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid camera config: {source}")]
  Parse
  {
    #[from]
    source: serde_json::Error,
  },
}
