use crate::{Codec, Encoder, FfmpegEncoder, RecordError};
use chrono::{DateTime, Local};
use depth_base::{CompositedFrame, ResolutionPreset, Size};
use std::fs::File;
use std::path::{Path, PathBuf};

pub const DEFAULT_FRAME_RATE: f64 = 10.0;

/// Fixed parameters of one recording.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordingSettings {
    pub frame_rate: f64,
    pub size: Size,
    pub codec: Codec,
}

impl RecordingSettings {
    /// Settings for composites of frames captured at `preset`.
    pub fn for_preset(preset: ResolutionPreset, frame_rate: f64, codec: Codec) -> Self {
        Self {
            frame_rate,
            size: preset.composite_size(),
            codec,
        }
    }
}

/// `dir/2024-05-01_13.45.10.mp4` style output path.
pub fn timestamped_path(dir: &Path, time: &DateTime<Local>, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", time.format("%Y-%m-%d_%H.%M.%S"), extension))
}

/// Writes composited frames to a video file until stopped.
pub struct Recorder {
    encoder: Option<Box<dyn Encoder>>,
    settings: RecordingSettings,
    path: PathBuf,
    frames: u64,
}

impl Recorder {
    /// Create `path` (and its directory) and start encoding.
    pub fn open(path: impl Into<PathBuf>, settings: RecordingSettings) -> Result<Self, RecordError> {
        let path = path.into();
        if settings.size.is_empty() || settings.frame_rate <= 0.0 {
            return Err(RecordError::SinkUnavailable(format!(
                "invalid recording settings: {} at {} fps",
                settings.size, settings.frame_rate
            )));
        }
        if settings.codec.ffmpeg_encoder().is_none() {
            return Err(RecordError::SinkUnavailable(format!(
                "no encoder for codec {}",
                settings.codec
            )));
        }
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| {
                RecordError::SinkUnavailable(format!("cannot create {}: {}", dir.display(), e))
            })?;
        }
        // the encoder only reports an unwritable output once frames arrive
        File::create(&path).map_err(|e| {
            RecordError::SinkUnavailable(format!("cannot write {}: {}", path.display(), e))
        })?;
        let encoder = match FfmpegEncoder::spawn(&path, &settings) {
            Ok(encoder) => encoder,
            Err(e) => {
                let _ = std::fs::remove_file(&path);
                return Err(e);
            }
        };
        Ok(Self::with_encoder(path, settings, Box::new(encoder)))
    }

    /// Record through an already opened encoder.
    pub fn with_encoder(
        path: impl Into<PathBuf>,
        settings: RecordingSettings,
        encoder: Box<dyn Encoder>,
    ) -> Self {
        let path = path.into();
        log::info!(
            "recording {} at {} fps ({}) to {}",
            settings.size,
            settings.frame_rate,
            settings.codec,
            path.display()
        );
        Self {
            encoder: Some(encoder),
            settings,
            path,
            frames: 0,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.encoder.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &RecordingSettings {
        &self.settings
    }

    pub fn frames_written(&self) -> u64 {
        self.frames
    }

    /// Append a frame. Does nothing once stopped.
    pub fn write(&mut self, frame: &CompositedFrame) -> Result<(), RecordError> {
        let Some(encoder) = self.encoder.as_mut() else {
            return Ok(());
        };
        if frame.size() != self.settings.size {
            return Err(RecordError::FrameSize {
                expected: self.settings.size,
                got: frame.size(),
            });
        }
        encoder.write_frame(frame.data())?;
        self.frames += 1;
        Ok(())
    }

    /// Finalize the file. Later calls do nothing.
    pub fn stop(&mut self) -> Result<(), RecordError> {
        if let Some(mut encoder) = self.encoder.take() {
            encoder.finish()?;
            log::info!("saved {} frames to {}", self.frames, self.path.display());
        }
        Ok(())
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            log::warn!("failed to finalize {}: {}", self.path.display(), e);
        }
    }
}
