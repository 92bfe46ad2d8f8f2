mod camera;
mod config;
pub mod convert;
mod error;
pub mod file;
mod traits;

#[cfg(feature = "v4l2")]
mod v4l2;

pub use camera::Camera;
pub use config::{CameraConfig, CaptureSource};
pub use error::CaptureError;
pub use file::FfmpegFileDevice;
pub use traits::{CaptureDevice, FrameSource};

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Device;

/// Open the source described by `config`, verifying the requested resolution.
pub fn open_source(config: &CameraConfig) -> Result<Box<dyn FrameSource>, CaptureError> {
    let requested = config.resolution().map(|preset| preset.size());
    if let Some(path) = config.source().file_path() {
        let camera = Camera::open(FfmpegFileDevice::new(path.to_path_buf()), requested)?;
        return Ok(Box::new(camera));
    }
    open_device(config.source(), config.buffer_count(), requested)
}

#[cfg(feature = "v4l2")]
fn open_device(
    source: &CaptureSource,
    buffer_count: u32,
    requested: Option<depth_base::Size>,
) -> Result<Box<dyn FrameSource>, CaptureError> {
    let path = source
        .device_path()
        .ok_or_else(|| CaptureError::DeviceUnavailable(format!("{source} is not a device")))?;
    let camera = Camera::open(V4l2Device::new(path, buffer_count), requested)?;
    Ok(Box::new(camera))
}

#[cfg(not(feature = "v4l2"))]
fn open_device(
    source: &CaptureSource,
    _buffer_count: u32,
    _requested: Option<depth_base::Size>,
) -> Result<Box<dyn FrameSource>, CaptureError> {
    Err(CaptureError::DeviceUnavailable(format!(
        "cannot open {source}: built without the v4l2 feature"
    )))
}
