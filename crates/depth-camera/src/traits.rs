use crate::CaptureError;
use depth_base::{Frame, Size};

/// A source of RGB frames at a fixed resolution.
///
/// `next_frame` blocks until a frame is available. Once the source reports
/// [`CaptureError::Exhausted`] or has been released, it produces no more frames.
pub trait FrameSource {
    /// Capture the next frame, shaped `size().height x size().width x 3`.
    fn next_frame(&mut self) -> Result<Frame, CaptureError>;

    /// Stop capturing and return the device to the system. Calling it again has no effect.
    fn release(&mut self);

    /// The negotiated capture size.
    fn size(&self) -> Size;

    fn is_released(&self) -> bool;
}

/// Low-level capture backend driven by [`crate::Camera`].
pub trait CaptureDevice {
    /// Open the device, asking for `requested` if given. Returns the size the
    /// device actually delivers.
    fn open(&mut self, requested: Option<Size>) -> Result<Size, CaptureError>;

    fn close(&mut self);

    /// Block until a frame is captured and decoded.
    fn blocking_capture(&mut self) -> Result<Frame, CaptureError>;
}
