use depth_base::{CompositedFrame, Size};
use minifb::{Key, Window, WindowOptions};
use std::fmt;

#[derive(Debug)]
pub enum DisplayError {
    Open(String),
    Update(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Open(msg) => write!(f, "failed to open window: {msg}"),
            DisplayError::Update(msg) => write!(f, "failed to update window: {msg}"),
        }
    }
}

impl std::error::Error for DisplayError {}

/// A surface that shows composited frames and reports when to stop.
pub trait Display {
    fn show(&mut self, frame: &CompositedFrame) -> Result<(), DisplayError>;

    /// Non-blocking poll for the stop control.
    fn stop_requested(&mut self) -> bool;

    /// Close the surface. Calling it again has no effect.
    fn close(&mut self);
}

/// Convert HWC RGB buffer to packed ARGB u32 for minifb
pub fn rgb_to_argb(buf: &[u8], out: &mut Vec<u32>) {
    out.clear();
    out.extend(
        buf.chunks_exact(3)
            .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32),
    );
}

/// Window backed by minifb. Closing the window also counts as a stop request.
pub struct MinifbDisplay {
    window: Option<Window>,
    stop_key: Key,
    buffer: Vec<u32>,
}

impl MinifbDisplay {
    pub fn new(title: &str, size: Size, stop_key: Key) -> Result<Self, DisplayError> {
        let window = Window::new(title, size.width, size.height, WindowOptions::default())
            .map_err(|e| DisplayError::Open(e.to_string()))?;
        log::info!("window '{}' opened at {}", title, size);
        Ok(Self {
            window: Some(window),
            stop_key,
            buffer: Vec::with_capacity(size.area()),
        })
    }
}

impl Display for MinifbDisplay {
    fn show(&mut self, frame: &CompositedFrame) -> Result<(), DisplayError> {
        let window = self
            .window
            .as_mut()
            .ok_or_else(|| DisplayError::Update("window closed".to_string()))?;
        rgb_to_argb(frame.data(), &mut self.buffer);
        window
            .update_with_buffer(&self.buffer, frame.width(), frame.height())
            .map_err(|e| DisplayError::Update(e.to_string()))
    }

    fn stop_requested(&mut self) -> bool {
        match &self.window {
            Some(window) => !window.is_open() || window.is_key_down(self.stop_key),
            None => true,
        }
    }

    fn close(&mut self) {
        if self.window.take().is_some() {
            log::debug!("window closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_argb() {
        let mut out = vec![7];
        rgb_to_argb(&[255, 0, 0, 0, 128, 255], &mut out);
        assert_eq!(out, vec![0x00FF0000, 0x000080FF]);
    }
}
