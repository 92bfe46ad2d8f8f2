use depth_base::{Size, TensorError};
use std::fmt;

#[derive(Debug)]
pub enum CaptureError {
    /// The device or file could not be opened.
    DeviceUnavailable(String),
    /// The device accepted a different mode than the one requested.
    UnsupportedResolution { requested: Size, actual: Size },
    /// No more frames: end of stream, device error, or a released source.
    Exhausted(String),
    /// A captured buffer could not be turned into an RGB frame.
    Decode(String),
}

impl CaptureError {
    /// True for errors raised while opening, before any frame was produced.
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            CaptureError::DeviceUnavailable(_) | CaptureError::UnsupportedResolution { .. }
        )
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::DeviceUnavailable(msg) => write!(f, "device unavailable: {msg}"),
            CaptureError::UnsupportedResolution { requested, actual } => write!(
                f,
                "camera does not support the selected resolution ({requested}), current resolution is {actual}"
            ),
            CaptureError::Exhausted(msg) => write!(f, "capture exhausted: {msg}"),
            CaptureError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<image::ImageError> for CaptureError {
    fn from(err: image::ImageError) -> Self {
        CaptureError::Decode(err.to_string())
    }
}

impl From<TensorError> for CaptureError {
    fn from(err: TensorError) -> Self {
        CaptureError::Decode(err.to_string())
    }
}
