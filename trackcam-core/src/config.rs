use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, ViewVolume};
use crate::error::{ConfigError, Result};

//
// ──────────────────────────────────────────────────────────────
//   Camera configuration (JSON)
//
//   {
//     "eye": [0, 0, 30], "target": [0, 0, 0], "up": [0, 1, 0],
//     "scale": 10,
//     "orthographic": false, "preserve_aspect": true
//   }
//
//   Every field is optional; missing ones take the camera
//   defaults. `scale`, when present, wins over `limits`.
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig
{
  pub eye: DVec3,
  pub target: DVec3,
  pub up: DVec3,
  pub limits: ViewVolume,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scale: Option<f64>,
  pub orthographic: bool,
  pub preserve_aspect: bool,
}

impl Default for CameraConfig
{
  fn default() -> Self
  {
    Camera::new().to_config()
  }
}

impl CameraConfig
{
  pub fn load(path: impl AsRef<Path>) -> Result<Self>
  {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
      .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

    let config = Self::from_json(&text)?;
    log::debug!("loaded camera config from {}", path.display());

    Ok(config)
  }

  pub fn from_json(text: &str) -> Result<Self>
  {
    Ok(serde_json::from_str(text)?)
  }

  pub fn to_json(&self) -> Result<String>
  {
    Ok(serde_json::to_string_pretty(self)?)
  }

  pub fn build_camera(&self) -> Camera
  {
    let mut cam = Camera::new();

    cam.set_look_at(self.eye, self.target, self.up);
    match self.scale
    {
      Some(limit) => cam.set_scale(limit),
      None => cam.set_limits(self.limits),
    }
    cam.set_orthographic(self.orthographic);
    cam.set_preserve_aspect(self.preserve_aspect);

    cam
  }
}

impl Camera
{
  /// Snapshot of the current settings; rebuilding from it gives an
  /// identical camera.
  pub fn to_config(&self) -> CameraConfig
  {
    CameraConfig {
      eye: self.eye,
      target: self.target,
      up: self.up,
      limits: self.requested,
      scale: None,
      orthographic: self.orthographic,
      preserve_aspect: self.preserve_aspect,
    }
  }
}
