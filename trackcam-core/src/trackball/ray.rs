use glam::DVec3;

use crate::camera::Viewport;

/// Hemisphere radius as a fraction of the smaller half-extent of the window.
pub const HEMISPHERE_FRACTION: f64 = 0.8;

/// Map a pointer position (pixels, y down) onto the unit virtual hemisphere
/// facing the viewer. Points outside the hemisphere land on its rim (z = 0).
///
/// The centre is the integer half of each window dimension, so a press on
/// the centre pixel maps to exactly `(0, 0, 1)`. That includes 1-pixel
/// viewports, where the hemisphere has no radius.
pub fn pointer_to_ray(viewport: Viewport, x: f64, y: f64) -> DVec3
{
  let center_x = (viewport.width / 2) as f64;
  let center_y = (viewport.height / 2) as f64;
  let radius = HEMISPHERE_FRACTION * center_x.min(center_y);

  let dx = x - center_x;
  let dy = center_y - y;

  let planar = (dx * dx + dy * dy).sqrt();
  let dz = if planar >= radius { 0.0 } else { (radius * radius - dx * dx - dy * dy).sqrt() };

  let v = DVec3::new(dx, dy, dz);
  let length = v.length();
  if length == 0.0
  {
    return DVec3::Z;
  }

  v / length
}
