use super::projection::CameraMatrices;

//
// ──────────────────────────────────────────────────────────────
//   Camera Uniform (GPU side)
//
//   Layout:
//     projection : mat4x4<f32>   → 64 bytes
//     view       : mat4x4<f32>   → 64 bytes
//   Total: 128 bytes
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform
{
  pub projection: [[f32; 4]; 4], // 64 bytes
  pub view: [[f32; 4]; 4],       // 64 bytes
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<CameraUniform>() == 128);

impl CameraUniform
{
  pub fn from_matrices(matrices: &CameraMatrices) -> Self
  {
    Self {
      projection: matrices.projection.as_mat4().to_cols_array_2d(),
      view: matrices.view.as_mat4().to_cols_array_2d(),
    }
  }
}

impl From<&CameraMatrices> for CameraUniform
{
  fn from(matrices: &CameraMatrices) -> Self
  {
    Self::from_matrices(matrices)
  }
}
