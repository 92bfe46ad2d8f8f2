pub mod colormap;
pub mod compose;
pub mod error;
pub mod fps;
pub mod normalize;
pub mod overlay;

pub use colormap::{Colormap, Lut};
pub use compose::{Polarity, Postprocessor};
pub use error::RenderError;
pub use fps::FpsCounter;
pub use overlay::{TextStyle, draw_text, overlay};
