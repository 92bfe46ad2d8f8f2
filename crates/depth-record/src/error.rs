use depth_base::Size;
use std::fmt;

#[derive(Debug)]
pub enum RecordError {
    /// The output file or encoder could not be opened.
    SinkUnavailable(String),
    /// Writing or finalizing the file failed.
    Write(String),
    FrameSize { expected: Size, got: Size },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::SinkUnavailable(msg) => write!(f, "sink unavailable: {msg}"),
            RecordError::Write(msg) => write!(f, "write error: {msg}"),
            RecordError::FrameSize { expected, got } => {
                write!(f, "frame is {got}, recorder expects {expected}")
            }
        }
    }
}

impl std::error::Error for RecordError {}

impl From<std::io::Error> for RecordError {
    fn from(err: std::io::Error) -> Self {
        RecordError::Write(err.to_string())
    }
}
