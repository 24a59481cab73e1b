//! Arcball-style rotation: pointer positions become rays on a virtual
//! hemisphere, and consecutive rays drive a rigid rotation of the camera
//! about its target.

mod ray;
mod transvection;

pub use ray::{pointer_to_ray, HEMISPHERE_FRACTION};
pub use transvection::rotate;
