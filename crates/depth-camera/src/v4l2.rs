use crate::{CaptureDevice, CaptureError, convert};
use depth_base::{Frame, Size};
use std::path::PathBuf;
use v4l::{
    Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
    io::traits::CaptureStream, video::Capture,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PixelFormat {
    Mjpeg,
    Yuyv,
}

impl PixelFormat {
    fn fourcc(self) -> FourCC {
        match self {
            PixelFormat::Mjpeg => FourCC::new(b"MJPG"),
            PixelFormat::Yuyv => FourCC::new(b"YUYV"),
        }
    }

    fn from_fourcc(fourcc: &FourCC) -> Option<Self> {
        match &fourcc.repr {
            b"MJPG" => Some(PixelFormat::Mjpeg),
            b"YUYV" => Some(PixelFormat::Yuyv),
            _ => None,
        }
    }
}

/// V4L2 capture device. Prefers MJPEG and falls back to YUYV.
pub struct V4l2Device {
    path: PathBuf,
    buffer_count: u32,
    stream: Option<MmapStream<'static>>,
    size: Size,
    format: PixelFormat,
}

impl V4l2Device {
    pub fn new(path: PathBuf, buffer_count: u32) -> Self {
        Self {
            path,
            buffer_count,
            stream: None,
            size: Size::new(0, 0),
            format: PixelFormat::Mjpeg,
        }
    }

    fn negotiate(&self, device: &Device, size: Size) -> Result<(Size, PixelFormat), CaptureError> {
        for format in [PixelFormat::Mjpeg, PixelFormat::Yuyv] {
            let desired = Format::new(size.width as u32, size.height as u32, format.fourcc());
            let actual = Capture::set_format(device, &desired)
                .map_err(|e| CaptureError::DeviceUnavailable(e.to_string()))?;
            if let Some(format) = PixelFormat::from_fourcc(&actual.fourcc) {
                return Ok((
                    Size::new(actual.width as usize, actual.height as usize),
                    format,
                ));
            }
            log::debug!("{} rejected {}, got {}", self.path.display(), format.fourcc(), actual.fourcc);
        }
        Err(CaptureError::DeviceUnavailable(format!(
            "{} supports neither MJPG nor YUYV",
            self.path.display()
        )))
    }
}

impl CaptureDevice for V4l2Device {
    fn open(&mut self, requested: Option<Size>) -> Result<Size, CaptureError> {
        self.stream.take();

        let device = Device::with_path(&self.path).map_err(|e| {
            CaptureError::DeviceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        let current = Capture::format(&device)
            .map_err(|e| CaptureError::DeviceUnavailable(e.to_string()))?;
        let desired =
            requested.unwrap_or(Size::new(current.width as usize, current.height as usize));

        let (size, format) = self.negotiate(&device, desired)?;
        self.size = size;
        self.format = format;

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, self.buffer_count)
            .map_err(|e| CaptureError::DeviceUnavailable(e.to_string()))?;
        self.stream = Some(stream);

        log::info!("{} streaming {:?} at {}", self.path.display(), self.format, self.size);
        Ok(self.size)
    }

    fn close(&mut self) {
        self.stream.take();
    }

    fn blocking_capture(&mut self) -> Result<Frame, CaptureError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| CaptureError::Exhausted("stream not open".to_string()))?;
        let (buffer, metadata) =
            CaptureStream::next(stream).map_err(|e| CaptureError::Exhausted(e.to_string()))?;

        // drivers may hand back the whole mmap buffer
        let used = (metadata.bytesused as usize).min(buffer.len());
        let data = if used > 0 { &buffer[..used] } else { buffer };

        match self.format {
            PixelFormat::Mjpeg => convert::jpeg_frame(data),
            PixelFormat::Yuyv => convert::yuyv_frame(data, self.size),
        }
    }
}
