use crate::{DisplayError, PipelineState};
use depth_camera::CaptureError;
use depth_infer::InferError;
use depth_record::RecordError;
use depth_render::RenderError;
use std::fmt;

/// When an error happened relative to the frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPhase {
    /// Before the first frame; nothing was left acquired.
    Startup,
    /// Ended a running loop; resources were released.
    Run,
}

#[derive(Debug)]
pub enum PipelineError {
    Capture(CaptureError),
    Infer(InferError),
    Render(RenderError),
    Record(RecordError),
    Display(DisplayError),
    /// `run` was called on a controller that has already run.
    InvalidState(PipelineState),
}

impl PipelineError {
    pub fn phase(&self) -> ErrorPhase {
        match self {
            PipelineError::Capture(e) if e.is_startup() => ErrorPhase::Startup,
            PipelineError::Infer(InferError::ModelLoad(_) | InferError::UnsupportedDevice(_)) => {
                ErrorPhase::Startup
            }
            PipelineError::Record(RecordError::SinkUnavailable(_)) => ErrorPhase::Startup,
            PipelineError::Display(DisplayError::Open(_)) => ErrorPhase::Startup,
            PipelineError::InvalidState(_) => ErrorPhase::Startup,
            _ => ErrorPhase::Run,
        }
    }

    /// The source ran out of frames, e.g. the end of a video file.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, PipelineError::Capture(CaptureError::Exhausted(_)))
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Capture(e) => write!(f, "capture: {e}"),
            PipelineError::Infer(e) => write!(f, "inference: {e}"),
            PipelineError::Render(e) => write!(f, "render: {e}"),
            PipelineError::Record(e) => write!(f, "record: {e}"),
            PipelineError::Display(e) => write!(f, "display: {e}"),
            PipelineError::InvalidState(state) => {
                write!(f, "pipeline cannot run from state {state:?}")
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Capture(e) => Some(e),
            PipelineError::Infer(e) => Some(e),
            PipelineError::Render(e) => Some(e),
            PipelineError::Record(e) => Some(e),
            PipelineError::Display(e) => Some(e),
            PipelineError::InvalidState(_) => None,
        }
    }
}

impl From<CaptureError> for PipelineError {
    fn from(err: CaptureError) -> Self {
        PipelineError::Capture(err)
    }
}

impl From<InferError> for PipelineError {
    fn from(err: InferError) -> Self {
        PipelineError::Infer(err)
    }
}

impl From<RenderError> for PipelineError {
    fn from(err: RenderError) -> Self {
        PipelineError::Render(err)
    }
}

impl From<RecordError> for PipelineError {
    fn from(err: RecordError) -> Self {
        PipelineError::Record(err)
    }
}

impl From<DisplayError> for PipelineError {
    fn from(err: DisplayError) -> Self {
        PipelineError::Display(err)
    }
}
