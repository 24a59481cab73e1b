use glam::DVec3;

use crate::camera::Camera;

//
// ──────────────────────────────────────────────────────────────
//   Transvection
//
//   Reflecting through the bisector `e` of two unit vectors and
//   then through the first vector `e1` is the rotation, in the
//   plane they span, that carries `e2` back onto `e1`. Applied
//   to every camera basis vector it turns the frame rigidly,
//   with no trig and no explicit axis.
// ──────────────────────────────────────────────────────────────
//

/// Rotate the eye and up vector about the target so the scene appears to
/// turn by the rotation taking `from` onto `to` (the camera frame itself
/// moves the opposite way). Both rays are unit vectors in screen space
/// (x right, y up, z toward the viewer), as produced by
/// [`pointer_to_ray`](super::pointer_to_ray).
///
/// Eye-to-target distance, the length of `up` and its angle to the view
/// axis are preserved. When the rotation is undefined (opposite rays, or
/// a degenerate camera frame) the camera is not touched.
pub fn rotate(camera: &mut Camera, from: DVec3, to: DVec3)
{
  let offset = camera.eye - camera.target;
  let view_distance = offset.length();

  let basis = ViewBasis::from_camera(offset / view_distance, camera.up);

  let e1 = basis.to_world(from);
  let e2 = basis.to_world(to);
  let e = (e1 + e2).normalize();

  // opposite rays (a flick across the rim) or a degenerate frame
  if !e.is_finite()
  {
    log::warn!("trackball rotation is undefined, camera left as is: from={from} to={to} basis={basis:?}");
    return;
  }

  let z = reflect_in_axis(e1, reflect_in_axis(e, basis.z));

  camera.eye = camera.target + view_distance * z;
  camera.up = reflect_in_axis(e1, reflect_in_axis(e, camera.up));

  log::trace!("trackball rotate: eye={} up={}", camera.eye, camera.up);
}

/// Orthonormal camera frame in world space: `z` points from the target to
/// the eye, `y` is `up` with its `z` component removed.
#[derive(Debug, Clone, Copy)]
struct ViewBasis
{
  x: DVec3,
  y: DVec3,
  z: DVec3,
}

impl ViewBasis
{
  fn from_camera(z: DVec3, up: DVec3) -> Self
  {
    let y = (up - up.dot(z) * z).normalize();
    let x = y.cross(z);

    Self { x, y, z }
  }

  /// Screen-space components → world direction.
  fn to_world(&self, v: DVec3) -> DVec3
  {
    v.x * self.x + v.y * self.y + v.z * self.z
  }
}

/// Mirror `v` through the line spanned by the unit vector `axis`.
fn reflect_in_axis(axis: DVec3, v: DVec3) -> DVec3
{
  2.0 * axis.dot(v) * axis - v
}

#[cfg(test)]
mod tests
{
  use rstest::rstest;

  use super::*;
  use crate::camera::Viewport;
  use crate::trackball::pointer_to_ray;

  const EPS: f64 = 1e-9;

  fn assert_vec_close(a: DVec3, b: DVec3)
  {
    assert!((a - b).length() <= EPS * a.length().max(b.length()).max(1.0), "{a} != {b}");
  }

  fn tilted_camera() -> Camera
  {
    let mut cam = Camera::new();
    cam.set_look_at(DVec3::new(3.0, -4.0, 12.0), DVec3::new(1.0, 1.0, 1.0), DVec3::new(0.2, 2.5, 0.7));
    cam
  }

  #[test]
  fn reflection_fixes_axis_and_flips_normal()
  {
    let axis = DVec3::X;

    assert_eq!(reflect_in_axis(axis, DVec3::X), DVec3::X);
    assert_eq!(reflect_in_axis(axis, DVec3::Y), -DVec3::Y);
  }

  #[test]
  fn basis_is_orthonormal_and_right_handed()
  {
    let cam = tilted_camera();
    let z = (cam.eye - cam.target).normalize();

    let b = ViewBasis::from_camera(z, cam.up);

    assert!((b.x.length() - 1.0).abs() < EPS);
    assert!((b.y.length() - 1.0).abs() < EPS);
    assert!(b.x.dot(b.y).abs() < EPS);
    assert!(b.y.dot(b.z).abs() < EPS);
    assert_vec_close(b.x.cross(b.y), b.z);
  }

  #[rstest]
  #[case(DVec3::Z)]
  #[case(DVec3::X)]
  #[case(DVec3::new(0.6, 0.0, 0.8))]
  #[case(DVec3::new(-0.48, 0.6, 0.64))]
  fn same_ray_is_identity(#[case] r: DVec3)
  {
    let mut cam = tilted_camera();
    let before = cam.clone();

    rotate(&mut cam, r, r);

    assert_vec_close(cam.eye, before.eye);
    assert_vec_close(cam.up, before.up);
    assert_eq!(cam.target, before.target);
  }

  #[test]
  fn drag_right_turns_scene_right()
  {
    let mut cam = Camera::new();

    rotate(&mut cam, DVec3::Z, DVec3::X);

    // the scene follows the pointer, so the eye swings the other way onto -X
    assert_vec_close(cam.eye, DVec3::new(-30.0, 0.0, 0.0));
    assert_vec_close(cam.up, DVec3::Y);
  }

  #[test]
  fn drag_up_tips_scene_up()
  {
    let mut cam = Camera::new();

    rotate(&mut cam, DVec3::Z, DVec3::Y);

    assert_vec_close(cam.eye, DVec3::new(0.0, -30.0, 0.0));
    assert_vec_close(cam.up, DVec3::Z);
  }

  #[test]
  fn rotation_is_in_the_camera_frame()
  {
    // looking down -X with +Z up: screen-right is world +Y
    let mut cam = Camera::new();
    cam.set_look_at(DVec3::new(10.0, 0.0, 0.0), DVec3::ZERO, DVec3::Z);

    rotate(&mut cam, DVec3::Z, DVec3::X);

    assert_vec_close(cam.eye, DVec3::new(0.0, -10.0, 0.0));
    assert_vec_close(cam.up, DVec3::Z);
  }

  #[test]
  fn rotation_pivots_about_target()
  {
    let mut cam = Camera::new();
    let target = DVec3::new(5.0, -2.0, 1.0);
    cam.set_look_at(target + DVec3::new(0.0, 0.0, 8.0), target, DVec3::Y);

    rotate(&mut cam, DVec3::Z, DVec3::X);

    assert_vec_close(cam.eye, target + DVec3::new(-8.0, 0.0, 0.0));
  }

  #[test]
  fn long_drag_preserves_distance_and_up_length()
  {
    let mut cam = tilted_camera();
    let distance = cam.view_distance();
    let up_length = cam.up.length();
    let viewport = Viewport::new(800, 600);

    let mut prev = pointer_to_ray(viewport, 400.0, 300.0);
    for step in 0..500
    {
      let t = step as f64 * 0.037;
      let x = 400.0 + 350.0 * t.cos() * (t * 0.3).sin();
      let y = 300.0 + 280.0 * (t * 1.7).sin();
      let next = pointer_to_ray(viewport, x.round(), y.round());

      rotate(&mut cam, prev, next);
      prev = next;
    }

    assert!((cam.view_distance() - distance).abs() <= EPS * distance);
    assert!((cam.up.length() - up_length).abs() <= EPS * up_length);
    assert_eq!(cam.target, DVec3::new(1.0, 1.0, 1.0));
  }

  #[test]
  fn tilted_up_keeps_its_angle_to_view_axis()
  {
    let mut cam = Camera::new();
    cam.set_look_at(DVec3::new(0.0, 0.0, 30.0), DVec3::ZERO, DVec3::new(0.0, 1.0, 0.5));
    let cos_before = cam.up.normalize().dot((cam.eye - cam.target).normalize());

    rotate(&mut cam, DVec3::Z, DVec3::new(0.6, 0.0, 0.8));

    let cos_after = cam.up.normalize().dot((cam.eye - cam.target).normalize());
    assert!((cos_after - cos_before).abs() < EPS);
    assert!((cam.up.length() - 1.25f64.sqrt()).abs() < EPS);
  }

  #[test]
  fn tilted_up_is_untouched_by_same_ray()
  {
    let mut cam = Camera::new();
    cam.set_look_at(DVec3::new(0.0, 0.0, 30.0), DVec3::ZERO, DVec3::new(0.0, 1.0, 0.5));

    rotate(&mut cam, DVec3::new(0.6, 0.0, 0.8), DVec3::new(0.6, 0.0, 0.8));

    assert_vec_close(cam.up, DVec3::new(0.0, 1.0, 0.5));
    assert_vec_close(cam.eye, DVec3::new(0.0, 0.0, 30.0));
  }

  #[test]
  fn opposite_rim_rays_leave_camera_untouched()
  {
    let mut cam = tilted_camera();
    let before = cam.clone();

    rotate(&mut cam, -DVec3::X, DVec3::X);

    assert_eq!(cam, before);

    // later drags still work
    rotate(&mut cam, DVec3::Z, DVec3::new(0.6, 0.0, 0.8));
    assert!(cam.eye.is_finite());
    assert!((cam.view_distance() - before.view_distance()).abs() <= EPS * before.view_distance());
  }

  #[test]
  fn coincident_eye_and_target_leaves_camera_untouched()
  {
    let mut cam = Camera::new();
    cam.set_look_at(DVec3::ONE, DVec3::ONE, DVec3::Y);
    let before = cam.clone();

    rotate(&mut cam, DVec3::Z, DVec3::X);

    assert_eq!(cam, before);
  }
}
