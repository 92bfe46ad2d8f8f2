use crate::InferError;
use depth_base::{Frame, Size, Tensor};
use image::{ImageBuffer, Rgb, imageops::FilterType};

/// How 8-bit pixel values are mapped to model input values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InputScaling {
    /// `v / 255`, giving values in [0, 1].
    #[default]
    UnitRange,
    /// `(v - zero_point) * scale`, using the model's declared quantization parameters.
    Quantized { scale: f32, zero_point: f32 },
}

impl InputScaling {
    #[inline]
    pub fn apply(self, value: u8) -> f32 {
        match self {
            InputScaling::UnitRange => value as f32 / 255.0,
            InputScaling::Quantized { scale, zero_point } => (value as f32 - zero_point) * scale,
        }
    }
}

/// Turns frames into `[1, height, width, 3]` f32 tensors.
#[derive(Clone, Copy, Debug, Default)]
pub struct Preprocessor {
    scaling: InputScaling,
}

impl Preprocessor {
    pub fn new(scaling: InputScaling) -> Self {
        Self { scaling }
    }

    pub fn scaling(&self) -> InputScaling {
        self.scaling
    }

    /// Resize `frame` to `target` with bilinear filtering, rescale it and add a batch axis.
    pub fn to_tensor(&self, frame: &Frame, target: Size) -> Result<Tensor<f32>, InferError> {
        if frame.is_empty() {
            return Err(InferError::InvalidFrame(format!(
                "frame has zero size ({})",
                frame.size()
            )));
        }
        if target.is_empty() {
            return Err(InferError::InvalidFrame(format!(
                "target size is zero ({target})"
            )));
        }

        let resized = resize_rgb(frame, target)?;
        let data: Vec<f32> = resized.iter().map(|&v| self.scaling.apply(v)).collect();
        Tensor::new(vec![1, target.height, target.width, 3], data)
            .map_err(|e| InferError::InvalidFrame(e.to_string()))
    }
}

fn resize_rgb(frame: &Frame, target: Size) -> Result<Vec<u8>, InferError> {
    if frame.size() == target {
        return Ok(frame.data().to_vec());
    }
    let image: ImageBuffer<Rgb<u8>, &[u8]> =
        ImageBuffer::from_raw(frame.width() as u32, frame.height() as u32, frame.data())
            .ok_or_else(|| InferError::InvalidFrame("frame buffer too small".to_string()))?;
    let resized = image::imageops::resize(
        &image,
        target.width as u32,
        target.height as u32,
        FilterType::Triangle,
    );
    Ok(resized.into_raw())
}

/// Reorder a `[N, H, W, C]` tensor to `[N, C, H, W]`.
pub fn nhwc_to_nchw(tensor: &Tensor<f32>) -> Result<Tensor<f32>, InferError> {
    let &[n, h, w, c] = tensor.shape.as_slice() else {
        return Err(InferError::ShapeMismatch {
            expected: "[N, H, W, C]".to_string(),
            got: format!("{:?}", tensor.shape),
        });
    };
    let mut data = vec![0.0; tensor.data.len()];
    for b in 0..n {
        let base = b * h * w * c;
        for y in 0..h {
            for x in 0..w {
                for ch in 0..c {
                    data[base + (ch * h + y) * w + x] = tensor.data[base + (y * w + x) * c + ch];
                }
            }
        }
    }
    Tensor::new(vec![n, c, h, w], data).map_err(|e| InferError::Inference(e.to_string()))
}
