use depth_base::ResolutionPreset;
use depth_camera::CameraConfig;
use depth_infer::InputScaling;
use depth_record::{Codec, DEFAULT_FRAME_RATE};
use depth_render::{Colormap, Polarity, TextStyle};
use minifb::Key;
use std::path::PathBuf;

/// Where and how to save the composited stream.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordingConfig {
    pub dir: PathBuf,
    pub frame_rate: f64,
    pub codec: Codec,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("videos"),
            frame_rate: DEFAULT_FRAME_RATE,
            codec: Codec::default(),
        }
    }
}

/// Everything a run needs, already validated.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub camera: CameraConfig,
    /// `None` disables recording.
    pub recording: Option<RecordingConfig>,
    pub scaling: InputScaling,
    pub colormap: Colormap,
    pub polarity: Polarity,
    pub text_style: TextStyle,
    pub window_title: String,
    pub stop_key: Key,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            recording: None,
            scaling: InputScaling::default(),
            colormap: Colormap::default(),
            polarity: Polarity::default(),
            text_style: TextStyle::default(),
            window_title: "Depth View".to_string(),
            stop_key: Key::Q,
        }
    }
}

impl PipelineConfig {
    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_recording(mut self, recording: Option<RecordingConfig>) -> Self {
        self.recording = recording;
        self
    }

    pub fn with_scaling(mut self, scaling: InputScaling) -> Self {
        self.scaling = scaling;
        self
    }

    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn with_stop_key(mut self, key: Key) -> Self {
        self.stop_key = key;
        self
    }

    pub fn resolution(&self) -> Option<ResolutionPreset> {
        self.camera.resolution()
    }
}
