use crate::Device;
use std::fmt;

#[derive(Debug)]
pub enum InferError {
    /// The model could not be opened or has no usable input/output.
    ModelLoad(String),
    /// A tensor does not match the model's declared input shape.
    ShapeMismatch { expected: String, got: String },
    /// The forward pass failed inside the engine.
    Inference(String),
    /// The frame handed to the preprocessor is empty.
    InvalidFrame(String),
    /// The engine produced an output that cannot be read as a depth map.
    Output(String),
    UnsupportedDevice(Device),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            InferError::Inference(msg) => write!(f, "inference error: {msg}"),
            InferError::InvalidFrame(msg) => write!(f, "invalid frame: {msg}"),
            InferError::Output(msg) => write!(f, "output error: {msg}"),
            InferError::UnsupportedDevice(device) => write!(f, "unsupported device: {device}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::ModelLoad(err.to_string())
    }
}
