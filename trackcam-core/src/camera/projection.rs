use glam::{DMat4, DVec4};

use super::state::{Camera, XyBounds};

//
// ──────────────────────────────────────────────────────────────
//   Projection + view derivation
//
//   Matrices are column-major with OpenGL clip conventions,
//   i.e. the same values glOrtho / glFrustum / gluLookAt load.
//   Both matrices are rebuilt from scratch on every apply.
// ──────────────────────────────────────────────────────────────
//

/// Closest the perspective near plane may get to the eye.
pub const MIN_NEAR: f64 = 0.1;

/// Drawable size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport
{
  pub width: u32,
  pub height: u32,
}

impl Viewport
{
  pub fn new(width: u32, height: u32) -> Self
  {
    Self { width, height }
  }

  pub fn is_empty(&self) -> bool
  {
    self.width == 0 || self.height == 0
  }
}

/// The six planes handed to the projection builder, as distances
/// from the eye for `near`/`far`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum
{
  pub left: f64,
  pub right: f64,
  pub bottom: f64,
  pub top: f64,
  pub near: f64,
  pub far: f64,
  pub orthographic: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices
{
  pub projection: DMat4,
  pub view: DMat4,
  pub frustum: Frustum,
}

impl CameraMatrices
{
  pub fn view_proj(&self) -> DMat4
  {
    self.projection * self.view
  }
}

impl Camera
{
  /// Derive projection and view for the current viewport. Must run every
  /// frame before drawing, since it depends on the viewport size.
  pub fn apply(&mut self, viewport: Viewport) -> CameraMatrices
  {
    self.actual = self.requested.xy_bounds();

    if self.preserve_aspect
    {
      if viewport.is_empty()
      {
        log::warn!("aspect step skipped for empty viewport {viewport:?}");
      }
      else
      {
        self.actual = grow_to_aspect(self.actual, viewport);
      }
    }

    if self.requested.is_empty()
    {
      log::warn!("view volume is empty: {:?}", self.requested);
    }

    let view_distance = self.view_distance();
    if view_distance == 0.0
    {
      log::warn!("eye and target coincide at {}; view is undefined", self.eye);
    }
    else if self.up_is_parallel()
    {
      log::warn!("up {} is parallel to the view axis; view is undefined", self.up);
    }

    let frustum = if self.orthographic
    {
      orthographic_frustum(self.actual, view_distance, self.requested.zmin, self.requested.zmax)
    }
    else
    {
      perspective_frustum(self.actual, view_distance, self.requested.zmin, self.requested.zmax)
    };

    let matrices = CameraMatrices {
      projection: build_projection_matrix(&frustum),
      view: build_view_matrix(self),
      frustum,
    };

    log::trace!("camera applied: {viewport:?} {frustum:?}");

    matrices
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Helper functions
// ──────────────────────────────────────────────────────────────
//

/// Widen x or y symmetrically so the rectangle matches the viewport's
/// height:width ratio. Never shrinks either axis.
pub fn grow_to_aspect(bounds: XyBounds, viewport: Viewport) -> XyBounds
{
  let mut out = bounds;

  let window_aspect = viewport.height as f64 / viewport.width as f64;
  let desired_aspect = bounds.height() / bounds.width();

  if desired_aspect > window_aspect
  {
    let extra = (desired_aspect / window_aspect - 1.0) * bounds.width() / 2.0;
    out.xmin -= extra;
    out.xmax += extra;
  }
  else if window_aspect > desired_aspect
  {
    let extra = (window_aspect / desired_aspect - 1.0) * bounds.height() / 2.0;
    out.ymin -= extra;
    out.ymax += extra;
  }

  out
}

fn orthographic_frustum(bounds: XyBounds, view_distance: f64, zmin: f64, zmax: f64) -> Frustum
{
  Frustum {
    left: bounds.xmin,
    right: bounds.xmax,
    bottom: bounds.ymin,
    top: bounds.ymax,
    near: view_distance - zmax,
    far: view_distance - zmin,
    orthographic: true,
  }
}

/// The view-plane rectangle sits at the target; scale it back onto the
/// near plane by similar triangles.
fn perspective_frustum(bounds: XyBounds, view_distance: f64, zmin: f64, zmax: f64) -> Frustum
{
  let near = (view_distance - zmax).max(MIN_NEAR);
  let far = view_distance - zmin;

  let (cx, cy) = bounds.center();
  let half_w = (near / view_distance) * bounds.width() / 2.0;
  let half_h = (near / view_distance) * bounds.height() / 2.0;

  Frustum {
    left: cx - half_w,
    right: cx + half_w,
    bottom: cy - half_h,
    top: cy + half_h,
    near,
    far,
    orthographic: false,
  }
}

fn build_projection_matrix(f: &Frustum) -> DMat4
{
  if f.orthographic
  {
    DMat4::orthographic_rh_gl(f.left, f.right, f.bottom, f.top, f.near, f.far)
  }
  else
  {
    frustum_rh_gl(f.left, f.right, f.bottom, f.top, f.near, f.far)
  }
}

fn build_view_matrix(cam: &Camera) -> DMat4
{
  DMat4::look_at_rh(cam.eye, cam.target, cam.up)
}

/// Off-axis perspective matrix, identical to `glFrustum`.
fn frustum_rh_gl(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> DMat4
{
  let rl = right - left;
  let tb = top - bottom;
  let fnear = far - near;

  DMat4::from_cols(
    DVec4::new(2.0 * near / rl, 0.0, 0.0, 0.0),
    DVec4::new(0.0, 2.0 * near / tb, 0.0, 0.0),
    DVec4::new((right + left) / rl, (top + bottom) / tb, -(far + near) / fnear, -1.0),
    DVec4::new(0.0, 0.0, -2.0 * far * near / fnear, 0.0),
  )
}
