use trackcam_core::PointerButton;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Pointer input reduced to what the trackball needs. Positions are in
/// physical pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent
{
  Down
  {
    button: PointerButton,
    x: f64,
    y: f64,
  },
  Up
  {
    button: PointerButton,
  },
  Move
  {
    x: f64,
    y: f64,
  },
}

/// winit reports button presses without a position, so the last cursor
/// position is remembered here.
pub struct InputState
{
  pub mouse_x: f64,
  pub mouse_y: f64,
}

impl InputState
{
  pub fn new() -> Self
  {
    Self { mouse_x: 0.0, mouse_y: 0.0 }
  }

  pub fn handle_event(&mut self, event: &WindowEvent) -> Option<PointerEvent>
  {
    match event
    {
      WindowEvent::CursorMoved { position, .. } =>
      {
        self.mouse_x = position.x;
        self.mouse_y = position.y;

        Some(PointerEvent::Move { x: self.mouse_x, y: self.mouse_y })
      }

      WindowEvent::MouseInput { state, button, .. } =>
      {
        let button = pointer_button(*button);

        match state
        {
          ElementState::Pressed => Some(PointerEvent::Down { button, x: self.mouse_x, y: self.mouse_y }),
          ElementState::Released => Some(PointerEvent::Up { button }),
        }
      }

      _ => None,
    }
  }
}

pub fn pointer_button(button: MouseButton) -> PointerButton
{
  match button
  {
    MouseButton::Left => PointerButton::Primary,
    MouseButton::Middle => PointerButton::Middle,
    MouseButton::Right => PointerButton::Secondary,
    MouseButton::Back => PointerButton::Other(3),
    MouseButton::Forward => PointerButton::Other(4),
    MouseButton::Other(n) => PointerButton::Other(n),
  }
}
