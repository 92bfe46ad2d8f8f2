use crate::{CaptureDevice, CaptureError, FrameSource};
use depth_base::{Frame, Size};

/// A [`FrameSource`] over a [`CaptureDevice`] whose resolution has been verified.
pub struct Camera<D: CaptureDevice> {
    device: D,
    size: Size,
    released: bool,
}

impl<D: CaptureDevice> Camera<D> {
    /// Open `device` and check that it delivers the requested size.
    ///
    /// If the device settles on a different size, it is closed again and
    /// `CaptureError::UnsupportedResolution` is returned.
    pub fn open(mut device: D, requested: Option<Size>) -> Result<Self, CaptureError> {
        let actual = device.open(requested)?;
        if let Some(requested) = requested {
            if requested != actual {
                device.close();
                return Err(CaptureError::UnsupportedResolution { requested, actual });
            }
        }
        log::info!("capture opened at {}", actual);
        Ok(Self {
            device,
            size: actual,
            released: false,
        })
    }
}

impl<D: CaptureDevice> FrameSource for Camera<D> {
    fn next_frame(&mut self) -> Result<Frame, CaptureError> {
        if self.released {
            return Err(CaptureError::Exhausted("source released".to_string()));
        }
        let frame = self.device.blocking_capture()?;
        if frame.size() != self.size {
            return Err(CaptureError::Decode(format!(
                "frame is {}, expected {}",
                frame.size(),
                self.size
            )));
        }
        Ok(frame)
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.device.close();
        self.released = true;
        log::debug!("capture released");
    }

    fn size(&self) -> Size {
        self.size
    }

    fn is_released(&self) -> bool {
        self.released
    }
}

impl<D: CaptureDevice> Drop for Camera<D> {
    fn drop(&mut self) {
        self.release();
    }
}
