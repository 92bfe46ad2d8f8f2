use crate::{CaptureDevice, CaptureError};
use depth_base::{Frame, Size};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};

/// Decodes a video file to raw RGB frames through an `ffmpeg` subprocess.
pub struct FfmpegFileDevice {
    path: PathBuf,
    child: Option<Child>,
    stdout: Option<ChildStdout>,
    size: Size,
}

impl FfmpegFileDevice {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            child: None,
            stdout: None,
            size: Size::new(0, 0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Query the native size of the first video stream with `ffprobe`.
pub fn probe_size(path: &Path) -> Result<Size, CaptureError> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=width,height",
            "-of",
            "csv=s=x:p=0",
        ])
        .arg(path)
        .output()
        .map_err(|e| CaptureError::DeviceUnavailable(format!("failed to run ffprobe: {e}")))?;
    if !output.status.success() {
        return Err(CaptureError::DeviceUnavailable(format!(
            "ffprobe failed on {}: {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    parse_probe_output(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| {
        CaptureError::DeviceUnavailable(format!("no video stream in {}", path.display()))
    })
}

/// Parse `ffprobe` output of the form `640x480`.
pub fn parse_probe_output(output: &str) -> Option<Size> {
    let line = output.lines().map(str::trim).find(|l| !l.is_empty())?;
    let (width, height) = line.split_once('x')?;
    let size = Size::new(width.trim().parse().ok()?, height.trim().parse().ok()?);
    (!size.is_empty()).then_some(size)
}

impl CaptureDevice for FfmpegFileDevice {
    fn open(&mut self, requested: Option<Size>) -> Result<Size, CaptureError> {
        self.close();
        if !self.path.is_file() {
            return Err(CaptureError::DeviceUnavailable(format!(
                "{} does not exist",
                self.path.display()
            )));
        }

        // ffmpeg scales to whatever we ask for, so the request always wins
        let size = match requested {
            Some(size) => size,
            None => probe_size(&self.path)?,
        };

        let mut child = Command::new("ffmpeg")
            .args(["-hide_banner", "-loglevel", "error", "-i"])
            .arg(&self.path)
            .args([
                "-vf",
                &format!("scale={}:{}", size.width, size.height),
                "-pix_fmt",
                "rgb24",
                "-f",
                "rawvideo",
                "-",
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| CaptureError::DeviceUnavailable(format!("failed to spawn ffmpeg: {e}")))?;

        self.stdout = child.stdout.take();
        if self.stdout.is_none() {
            let _ = child.kill();
            let _ = child.wait();
            return Err(CaptureError::DeviceUnavailable(
                "ffmpeg stdout not captured".to_string(),
            ));
        }
        self.child = Some(child);
        self.size = size;
        log::info!("decoding {} at {}", self.path.display(), size);
        Ok(size)
    }

    fn close(&mut self) {
        self.stdout.take();
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    fn blocking_capture(&mut self) -> Result<Frame, CaptureError> {
        let stdout = self
            .stdout
            .as_mut()
            .ok_or_else(|| CaptureError::Exhausted("decoder not running".to_string()))?;
        let mut data = vec![0u8; self.size.area() * Frame::CHANNELS];
        match stdout.read_exact(&mut data) {
            Ok(()) => Ok(Frame::new(self.size, data)?),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                Err(CaptureError::Exhausted("end of file".to_string()))
            }
            Err(e) => Err(CaptureError::Exhausted(e.to_string())),
        }
    }
}

impl Drop for FfmpegFileDevice {
    fn drop(&mut self) {
        self.close();
    }
}
