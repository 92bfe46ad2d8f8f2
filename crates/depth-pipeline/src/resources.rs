use crate::{Display, DisplayError, MinifbDisplay};
use depth_base::Size;
use depth_camera::{CameraConfig, CaptureError, FrameSource};
use depth_record::{RecordError, Recorder, RecordingSettings};
use minifb::Key;
use std::path::Path;

/// Acquires the external resources of a run.
pub trait Resources {
    fn open_source(&mut self, config: &CameraConfig) -> Result<Box<dyn FrameSource>, CaptureError>;

    fn open_recorder(
        &mut self,
        path: &Path,
        settings: RecordingSettings,
    ) -> Result<Recorder, RecordError>;

    fn open_display(
        &mut self,
        title: &str,
        size: Size,
        stop_key: Key,
    ) -> Result<Box<dyn Display>, DisplayError>;
}

/// Real devices: V4L2 or ffmpeg capture, ffmpeg encoding, a minifb window.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResources;

impl Resources for SystemResources {
    fn open_source(&mut self, config: &CameraConfig) -> Result<Box<dyn FrameSource>, CaptureError> {
        depth_camera::open_source(config)
    }

    fn open_recorder(
        &mut self,
        path: &Path,
        settings: RecordingSettings,
    ) -> Result<Recorder, RecordError> {
        Recorder::open(path, settings)
    }

    fn open_display(
        &mut self,
        title: &str,
        size: Size,
        stop_key: Key,
    ) -> Result<Box<dyn Display>, DisplayError> {
        Ok(Box::new(MinifbDisplay::new(title, size, stop_key)?))
    }
}
