use crate::camera::{Camera, CameraMatrices, Viewport};
use crate::input::{DragState, PointerButton};
use crate::trackball::{pointer_to_ray, rotate};

//
// ──────────────────────────────────────────────────────────────
//   Host seam
//
//   The window system owns the viewport size and the redraw
//   queue; the controller only asks for them.
// ──────────────────────────────────────────────────────────────
//

pub trait TrackballHost
{
  /// Current drawable size in pixels, in the same space as pointer
  /// coordinates.
  fn viewport(&self) -> Viewport;

  fn request_redraw(&mut self);
}

//
// ──────────────────────────────────────────────────────────────
//   Trackball controller
//
//   Idle ──primary down──▶ Dragging ──same button up──▶ Idle
//                           │   ▲
//                           └───┘ move: rotate + redraw
//
//   Every other press/release is ignored.
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct TrackballController
{
  camera: Camera,
  drag: DragState,
}

impl TrackballController
{
  pub fn new(camera: Camera) -> Self
  {
    Self { camera, drag: DragState::Idle }
  }

  pub fn camera(&self) -> &Camera
  {
    &self.camera
  }

  pub fn camera_mut(&mut self) -> &mut Camera
  {
    &mut self.camera
  }

  pub fn drag_state(&self) -> DragState
  {
    self.drag
  }

  pub fn is_dragging(&self) -> bool
  {
    self.drag.is_active()
  }

  /// Per-frame projection and view; see [`Camera::apply`].
  pub fn apply(&mut self, viewport: Viewport) -> CameraMatrices
  {
    self.camera.apply(viewport)
  }

  /// Returns `true` if the press started a drag.
  pub fn on_pointer_down(&mut self, host: &mut impl TrackballHost, button: PointerButton, x: f64, y: f64) -> bool
  {
    if button != PointerButton::Primary
    {
      return false;
    }

    if self.drag.is_active()
    {
      return false;
    }

    let previous_ray = pointer_to_ray(host.viewport(), x, y);
    self.drag = DragState::Dragging { button, previous_ray };

    log::debug!("trackball drag start at ({x}, {y}) ray={previous_ray}");

    true
  }

  /// Returns `true` if the release ended the current drag. Only the
  /// button that started the drag can end it.
  pub fn on_pointer_up(&mut self, button: PointerButton) -> bool
  {
    match self.drag
    {
      DragState::Dragging { button: held, .. } if held == button =>
      {
        self.drag = DragState::Idle;
        log::debug!("trackball drag end");
        true
      }

      _ => false,
    }
  }

  /// Returns `true` if the camera was rotated (a redraw has been
  /// requested from the host).
  pub fn on_pointer_move(&mut self, host: &mut impl TrackballHost, x: f64, y: f64) -> bool
  {
    let DragState::Dragging { button, previous_ray } = self.drag
    else
    {
      return false;
    };

    let ray = pointer_to_ray(host.viewport(), x, y);
    rotate(&mut self.camera, previous_ray, ray);
    self.drag = DragState::Dragging { button, previous_ray: ray };

    host.request_redraw();

    true
  }
}
