use depth_base::ResolutionPreset;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where frames come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureSource {
    /// V4L2 device by index, `/dev/video{index}`.
    Index(usize),
    /// V4L2 device node, e.g. `/dev/video2`.
    Device(PathBuf),
    /// A video file decoded through ffmpeg.
    File(PathBuf),
}

impl CaptureSource {
    /// Interpret a user-supplied string: a bare number is a device index,
    /// anything under `/dev/` is a device node, everything else is a file.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return CaptureSource::Index(index);
        }
        if trimmed.starts_with("/dev/") {
            return CaptureSource::Device(PathBuf::from(trimmed));
        }
        CaptureSource::File(PathBuf::from(trimmed))
    }

    pub fn device_path(&self) -> Option<PathBuf> {
        match self {
            CaptureSource::Index(index) => Some(PathBuf::from(format!("/dev/video{index}"))),
            CaptureSource::Device(path) => Some(path.clone()),
            CaptureSource::File(_) => None,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            CaptureSource::File(path) => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for CaptureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureSource::Index(index) => write!(f, "camera #{index}"),
            CaptureSource::Device(path) => write!(f, "{}", path.display()),
            CaptureSource::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// Configuration for frame capture.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    source: CaptureSource,
    resolution: Option<ResolutionPreset>,
    buffer_count: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            source: CaptureSource::Index(0),
            resolution: Some(ResolutionPreset::default()),
            buffer_count: 4,
        }
    }
}

impl CameraConfig {
    /// Set the capture source.
    pub fn with_source(mut self, source: CaptureSource) -> Self {
        self.source = source;
        self
    }

    /// Request a capture resolution. `None` keeps whatever the device is set to.
    pub fn with_resolution(mut self, resolution: Option<ResolutionPreset>) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the number of mmap buffers for V4L2 streaming.
    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    // Getters
    pub fn source(&self) -> &CaptureSource {
        &self.source
    }

    pub fn resolution(&self) -> Option<ResolutionPreset> {
        self.resolution
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }
}
