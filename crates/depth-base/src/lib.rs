pub mod depthmap;
pub mod frame;
pub mod logging;
pub mod resolution;
pub mod tensor;

pub use depthmap::DepthMap;
pub use frame::{CompositedFrame, Frame};
pub use logging::{init_stdout_logger, StdoutLogger};
pub use resolution::{ResolutionPreset, Size};
pub use tensor::{Tensor, TensorError};

