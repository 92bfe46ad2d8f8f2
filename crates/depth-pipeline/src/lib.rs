mod config;
mod controller;
mod display;
mod error;
mod resources;

pub use config::{PipelineConfig, RecordingConfig};
pub use controller::{PipelineController, PipelineSession, PipelineState, RunSummary, StopReason};
pub use display::{Display, DisplayError, MinifbDisplay, rgb_to_argb};
pub use error::{ErrorPhase, PipelineError};
pub use resources::{Resources, SystemResources};

pub use minifb::Key;
