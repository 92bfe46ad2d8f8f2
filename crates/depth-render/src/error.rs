use depth_base::TensorError;
use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    EmptyDepthMap,
    EmptyFrame,
    Tensor(TensorError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyDepthMap => write!(f, "depth map is empty"),
            RenderError::EmptyFrame => write!(f, "source frame is empty"),
            RenderError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<TensorError> for RenderError {
    fn from(err: TensorError) -> Self {
        RenderError::Tensor(err)
    }
}
