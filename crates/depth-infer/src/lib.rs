pub mod backend;
pub mod backends;
pub mod device;
pub mod error;
pub mod estimator;
pub mod modelsource;
pub mod preprocess;
pub mod session;

pub use backend::Backend;
pub use device::Device;
pub use error::InferError;
pub use estimator::{DEFAULT_INPUT_SIZE, DepthEstimator, InputLayout};
pub use modelsource::ModelSource;
pub use preprocess::{InputScaling, Preprocessor};
pub use session::Session;

#[cfg(feature = "onnx")]
pub use backends::OnnxBackend;
