use crate::normalize::{colorize, invert, normalize, quantize, resize_gray};
use crate::{Colormap, Lut, RenderError};
use depth_base::{CompositedFrame, DepthMap, Frame};

/// Which end of the depth range is rendered bright.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Polarity {
    /// Normalized intensity goes straight into the colormap.
    #[default]
    Direct,
    /// Intensities are flipped (`255 - v`) before the colormap.
    Inverted,
}

/// Renders depth maps next to their source frames.
pub struct Postprocessor {
    colormap: Colormap,
    polarity: Polarity,
    lut: Box<Lut>,
}

impl Default for Postprocessor {
    fn default() -> Self {
        Self::new(Colormap::default(), Polarity::default())
    }
}

impl Postprocessor {
    pub fn new(colormap: Colormap, polarity: Polarity) -> Self {
        Self {
            colormap,
            polarity,
            lut: Box::new(colormap.lut()),
        }
    }

    pub fn colormap(&self) -> Colormap {
        self.colormap
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Color-map `depth` at the size of `source` and place it to the right of `source`.
    pub fn compose(&self, depth: &DepthMap, source: &Frame) -> Result<CompositedFrame, RenderError> {
        if depth.is_empty() {
            return Err(RenderError::EmptyDepthMap);
        }
        if source.is_empty() {
            return Err(RenderError::EmptyFrame);
        }

        let gray = quantize(&normalize(depth));
        let mut gray = resize_gray(gray, depth.size(), source.size())?;
        if self.polarity == Polarity::Inverted {
            invert(&mut gray);
        }
        let colored = colorize(&gray, source.size(), &self.lut)?;
        Ok(CompositedFrame::side_by_side(source, &colored)?)
    }
}
