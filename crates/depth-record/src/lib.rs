mod codec;
mod encoder;
mod error;
mod recorder;

pub use codec::Codec;
pub use encoder::{Encoder, FfmpegEncoder};
pub use error::RecordError;
pub use recorder::{DEFAULT_FRAME_RATE, Recorder, RecordingSettings, timestamped_path};
