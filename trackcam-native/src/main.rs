mod app;
mod input;

use anyhow::Context;
use trackcam_core::CameraConfig;

fn main() -> anyhow::Result<()>
{
  // Default to info; RUST_LOG=trackcam_core=debug shows drag start/end,
  // RUST_LOG=trace every rotation step and per-frame frustum.
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let config = match std::env::args().nth(1)
  {
    Some(path) => CameraConfig::load(&path).with_context(|| format!("loading camera config {path}"))?,
    None => CameraConfig::default(),
  };

  app::run(config)
}
