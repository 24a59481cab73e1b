//! Look-at camera with aspect-preserving orthographic/perspective
//! projection and arcball-style trackball rotation.
//!
//! The crate only computes. A host application owns the window, forwards
//! pointer events to a [`TrackballController`], calls
//! [`TrackballController::apply`] once per frame and hands the returned
//! matrices to its own graphics API (for GPU upload see [`CameraUniform`]).

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod trackball;

pub use camera::{Camera, CameraMatrices, CameraUniform, Frustum, Viewport, ViewVolume, XyBounds};
pub use config::CameraConfig;
pub use error::{ConfigError, Result};
pub use input::{DragState, PointerButton, TrackballController, TrackballHost};
