use glam::DVec3;

mod camera_control;

pub use camera_control::{TrackballController, TrackballHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton
{
  Primary,
  Middle,
  Secondary,
  Other(u16),
}

/// Drag bookkeeping. Only one drag at a time; it belongs to the button
/// that started it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState
{
  #[default]
  Idle,
  Dragging
  {
    button: PointerButton,
    previous_ray: DVec3,
  },
}

impl DragState
{
  pub fn is_active(&self) -> bool
  {
    matches!(self, DragState::Dragging { .. })
  }
}
