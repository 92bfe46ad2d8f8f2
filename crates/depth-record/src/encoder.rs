use crate::{RecordError, RecordingSettings};
use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread;
use std::time::Duration;

const STARTUP_GRACE: Duration = Duration::from_millis(100);

/// Receives raw RGB frames and writes them to a video file.
pub trait Encoder {
    fn write_frame(&mut self, rgb: &[u8]) -> Result<(), RecordError>;

    /// Flush and close the file. Called at most once.
    fn finish(&mut self) -> Result<(), RecordError>;
}

/// Encodes through an `ffmpeg` subprocess reading rawvideo on stdin.
pub struct FfmpegEncoder {
    child: Child,
    stdin: Option<ChildStdin>,
}

impl FfmpegEncoder {
    pub fn spawn(path: &Path, settings: &RecordingSettings) -> Result<Self, RecordError> {
        let encoder = settings.codec.ffmpeg_encoder().ok_or_else(|| {
            RecordError::SinkUnavailable(format!("no encoder for codec {}", settings.codec))
        })?;

        let mut command = Command::new("ffmpeg");
        command
            .args(["-hide_banner", "-loglevel", "error", "-y"])
            .args(["-f", "rawvideo", "-pix_fmt", "rgb24"])
            .args(["-s", &format!("{}x{}", settings.size.width, settings.size.height)])
            .args(["-r", &settings.frame_rate.to_string()])
            .args(["-i", "-", "-an", "-c:v", encoder]);
        if let Some(tag) = settings.codec.tag() {
            command.args(["-tag:v", tag]);
        }
        if encoder != "mjpeg" {
            command.args(["-pix_fmt", "yuv420p"]);
        }
        let mut child = command
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| RecordError::SinkUnavailable(format!("failed to spawn ffmpeg: {e}")))?;

        let stdin = child.stdin.take();
        if stdin.is_none() {
            let _ = child.kill();
            let _ = child.wait();
            return Err(RecordError::SinkUnavailable(
                "ffmpeg stdin not captured".to_string(),
            ));
        }

        // ffmpeg opens its output before reading input, so a bad sink exits early
        thread::sleep(STARTUP_GRACE);
        match child.try_wait() {
            Ok(Some(status)) => {
                return Err(RecordError::SinkUnavailable(format!(
                    "ffmpeg exited at startup with {status}"
                )));
            }
            Ok(None) => {}
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(RecordError::SinkUnavailable(format!(
                    "cannot poll ffmpeg: {e}"
                )));
            }
        }
        Ok(Self { child, stdin })
    }
}

impl Encoder for FfmpegEncoder {
    fn write_frame(&mut self, rgb: &[u8]) -> Result<(), RecordError> {
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| RecordError::Write("encoder already finished".to_string()))?;
        stdin.write_all(rgb)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RecordError> {
        // closing stdin tells ffmpeg to write the trailer
        drop(self.stdin.take());
        let status = self.child.wait()?;
        if !status.success() {
            return Err(RecordError::Write(format!("ffmpeg exited with {status}")));
        }
        Ok(())
    }
}

impl Drop for FfmpegEncoder {
    fn drop(&mut self) {
        if self.stdin.take().is_some() {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
