mod projection;
mod state;
mod uniform;

pub use projection::{grow_to_aspect, CameraMatrices, Frustum, Viewport, MIN_NEAR};
pub use state::{Camera, ViewVolume, XyBounds};
pub use uniform::CameraUniform;
