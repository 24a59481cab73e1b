use glam::DVec3;
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────────
//   View volume
//
//   Limits are given in viewing coordinates centred on the
//   look-at target:
//     x → right on screen
//     y → up on screen (projection of `up`)
//     z → out of the screen, towards the eye
//
//   zmin/zmax are measured from the target, NOT from the eye.
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewVolume
{
  pub xmin: f64,
  pub xmax: f64,
  pub ymin: f64,
  pub ymax: f64,
  pub zmin: f64,
  pub zmax: f64,
}

impl ViewVolume
{
  pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64, zmin: f64, zmax: f64) -> Self
  {
    Self { xmin, xmax, ymin, ymax, zmin, zmax }
  }

  /// Symmetric volume `[-limit, limit]` in x and y, `[-2 limit, 2 limit]` in z.
  pub fn from_scale(limit: f64) -> Self
  {
    Self::new(-limit, limit, -limit, limit, -2.0 * limit, 2.0 * limit)
  }

  /// True if any axis has `max <= min`.
  pub fn is_empty(&self) -> bool
  {
    !(self.xmax > self.xmin && self.ymax > self.ymin && self.zmax > self.zmin)
  }

  pub fn xy_bounds(&self) -> XyBounds
  {
    XyBounds { xmin: self.xmin, xmax: self.xmax, ymin: self.ymin, ymax: self.ymax }
  }
}

impl Default for ViewVolume
{
  fn default() -> Self
  {
    Self::from_scale(5.0)
  }
}

/// The screen-plane rectangle of a view volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyBounds
{
  pub xmin: f64,
  pub xmax: f64,
  pub ymin: f64,
  pub ymax: f64,
}

impl XyBounds
{
  pub fn width(&self) -> f64
  {
    self.xmax - self.xmin
  }

  pub fn height(&self) -> f64
  {
    self.ymax - self.ymin
  }

  pub fn center(&self) -> (f64, f64)
  {
    ((self.xmin + self.xmax) / 2.0, (self.ymin + self.ymax) / 2.0)
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Camera (look-at, Y-up by default, right-hand rule)
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct Camera
{
  pub(crate) eye: DVec3,
  pub(crate) target: DVec3,
  pub(crate) up: DVec3,

  pub(crate) requested: ViewVolume,
  pub(crate) actual: XyBounds,

  pub(crate) orthographic: bool,
  pub(crate) preserve_aspect: bool,
}

impl Camera
{
  /// Eye at (0,0,30) looking at the origin, +Y up, limits ±5 / ±10,
  /// perspective, aspect-preserving.
  pub fn new() -> Self
  {
    let requested = ViewVolume::default();

    Self {
      eye: default_eye(),
      target: DVec3::ZERO,
      up: DVec3::Y,
      requested,
      actual: requested.xy_bounds(),
      orthographic: false,
      preserve_aspect: true,
    }
  }

  /// Replace eye, target and up. Nothing is normalized here; `up` does
  /// not need to be unit length or perpendicular to the view direction.
  pub fn set_look_at(&mut self, eye: DVec3, target: DVec3, up: DVec3)
  {
    log::debug!("camera look-at: eye={eye} target={target} up={up}");

    self.eye = eye;
    self.target = target;
    self.up = up;
  }

  /// Replace the requested view volume. The aspect-adjusted bounds fall
  /// back to the requested ones until the next apply.
  pub fn set_view_volume(&mut self, xmin: f64, xmax: f64, ymin: f64, ymax: f64, zmin: f64, zmax: f64)
  {
    self.set_limits(ViewVolume::new(xmin, xmax, ymin, ymax, zmin, zmax));
  }

  pub fn set_limits(&mut self, limits: ViewVolume)
  {
    log::debug!("camera limits: {limits:?}");

    self.requested = limits;
    self.actual = limits.xy_bounds();
  }

  pub fn set_scale(&mut self, limit: f64)
  {
    self.set_limits(ViewVolume::from_scale(limit));
  }

  pub fn set_orthographic(&mut self, orthographic: bool)
  {
    self.orthographic = orthographic;
  }

  pub fn set_preserve_aspect(&mut self, preserve_aspect: bool)
  {
    self.preserve_aspect = preserve_aspect;
  }

  pub fn orthographic(&self) -> bool
  {
    self.orthographic
  }

  pub fn preserve_aspect(&self) -> bool
  {
    self.preserve_aspect
  }

  /// Requested limits, as last set.
  pub fn limits(&self) -> ViewVolume
  {
    self.requested
  }

  /// X/Y limits after the most recent aspect adjustment.
  pub fn actual_xy_limits(&self) -> XyBounds
  {
    self.actual
  }

  /// `(eye, target, up)`.
  pub fn view_parameters(&self) -> (DVec3, DVec3, DVec3)
  {
    (self.eye, self.target, self.up)
  }

  pub fn eye(&self) -> DVec3
  {
    self.eye
  }

  pub fn target(&self) -> DVec3
  {
    self.target
  }

  pub fn up(&self) -> DVec3
  {
    self.up
  }

  pub fn view_distance(&self) -> f64
  {
    (self.target - self.eye).length()
  }

  /// True if `up` has no component across the view axis (including a
  /// zero `up`), so the camera's vertical is undefined.
  pub fn up_is_parallel(&self) -> bool
  {
    let axis = self.eye - self.target;
    self.up.cross(axis).length() <= f64::EPSILON * self.up.length() * axis.length()
  }
}

impl Default for Camera
{
  fn default() -> Self
  {
    Self::new()
  }
}

fn default_eye() -> DVec3
{
  DVec3::new(0.0, 0.0, 30.0)
}
