use std::sync::Arc;

use anyhow::anyhow;
use trackcam_core::{CameraConfig, CameraUniform, TrackballController, TrackballHost, Viewport};
use winit::{
  application::ApplicationHandler,
  event::WindowEvent,
  event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
  window::{Window, WindowId},
};

use crate::input::{InputState, PointerEvent};

pub fn run(config: CameraConfig) -> anyhow::Result<()>
{
  let event_loop = EventLoop::new().map_err(|err| anyhow!("creating event loop: {err}"))?;
  let mut app = TrackcamApp::new(config);

  event_loop.run_app(&mut app).map_err(|err| anyhow!("running event loop: {err}"))?;

  app.error.map_or(Ok(()), Err)
}

//
// ──────────────────────────────────────────────────────────────
//   Window as trackball host
// ──────────────────────────────────────────────────────────────
//

struct WindowHost<'a>
{
  window: &'a Window,
}

impl TrackballHost for WindowHost<'_>
{
  fn viewport(&self) -> Viewport
  {
    let size = self.window.inner_size();
    Viewport::new(size.width, size.height)
  }

  fn request_redraw(&mut self)
  {
    self.window.request_redraw();
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Application
// ──────────────────────────────────────────────────────────────
//

struct TrackcamApp
{
  window: Option<Arc<Window>>,
  controller: TrackballController,
  input: InputState,
  latest: Option<CameraUniform>,
  error: Option<anyhow::Error>,
}

impl TrackcamApp
{
  fn new(config: CameraConfig) -> Self
  {
    Self {
      window: None,
      controller: TrackballController::new(config.build_camera()),
      input: InputState::new(),
      latest: None,
      error: None,
    }
  }

  fn init_window(&mut self, event_loop: &ActiveEventLoop)
  {
    if self.window.is_some()
    {
      return;
    }

    let attrs = Window::default_attributes().with_title("Trackcam — drag with the left button");

    match event_loop.create_window(attrs)
    {
      Ok(window) =>
      {
        log::info!("window created at {:?}", window.inner_size());
        self.window = Some(Arc::new(window));
      }

      Err(err) =>
      {
        self.error = Some(anyhow!("creating window: {err}"));
        event_loop.exit();
      }
    }
  }

  fn handle_window_event(&mut self, elwt: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    let window = match &self.window
    {
      Some(w) if w.id() == window_id => w.clone(),
      _ => return,
    };

    if let Some(pointer) = self.input.handle_event(&event)
    {
      self.handle_pointer(&window, pointer);
    }

    match event
    {
      WindowEvent::CloseRequested =>
      {
        elwt.exit();
      }

      WindowEvent::Resized(size) =>
      {
        if size.width == 0 || size.height == 0
        {
          return;
        }

        window.request_redraw();
      }

      WindowEvent::RedrawRequested =>
      {
        self.frame(&window);
      }

      _ =>
      {}
    }
  }

  fn handle_pointer(&mut self, window: &Window, pointer: PointerEvent)
  {
    let mut host = WindowHost { window };

    match pointer
    {
      PointerEvent::Down { button, x, y } =>
      {
        self.controller.on_pointer_down(&mut host, button, x, y);
      }

      PointerEvent::Up { button } =>
      {
        self.controller.on_pointer_up(button);
      }

      PointerEvent::Move { x, y } =>
      {
        self.controller.on_pointer_move(&mut host, x, y);
      }
    }
  }

  /// Stand-in for a renderer: derive this frame's matrices and keep the
  /// GPU-ready copy.
  fn frame(&mut self, window: &Window)
  {
    let size = window.inner_size();
    if size.width == 0 || size.height == 0
    {
      return;
    }

    let matrices = self.controller.apply(Viewport::new(size.width, size.height));
    let uniform = CameraUniform::from(&matrices);

    if self.latest != Some(uniform)
    {
      let (eye, target, up) = self.controller.camera().view_parameters();
      log::debug!("eye={eye} target={target} up={up} frustum={:?}", matrices.frustum);
    }

    self.latest = Some(uniform);
  }
}

impl ApplicationHandler for TrackcamApp
{
  fn resumed(&mut self, event_loop: &ActiveEventLoop)
  {
    event_loop.set_control_flow(ControlFlow::Wait);
    self.init_window(event_loop);
  }

  fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    self.handle_window_event(event_loop, window_id, event);
  }
}
