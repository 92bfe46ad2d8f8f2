use crate::{Size, Tensor, TensorError};

/// Single-channel model output. Values have no fixed range.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthMap {
    size: Size,
    data: Vec<f32>,
}

impl DepthMap {
    pub fn new(size: Size, data: Vec<f32>) -> Result<Self, TensorError> {
        let expected = crate::tensor::element_count(&[size.height, size.width])?;
        if expected != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    pub fn filled(size: Size, value: f32) -> Self {
        Self {
            size,
            data: vec![value; size.area()],
        }
    }

    /// Take the first batch element of a model output.
    ///
    /// Accepted layouts are `[N, H, W]`, `[N, H, W, 1]` and `[N, 1, H, W]`.
    pub fn from_batched(output: Tensor<f32>) -> Result<Self, TensorError> {
        let size = match output.shape.as_slice() {
            &[n, h, w] if n > 0 => Size::new(w, h),
            &[n, h, w, 1] if n > 0 => Size::new(w, h),
            &[n, 1, h, w] if n > 0 => Size::new(w, h),
            other => {
                return Err(TensorError::DimensionMismatch {
                    expected: vec![1, 0, 0],
                    got: other.to_vec(),
                });
            }
        };
        let mut data = output.data;
        data.truncate(size.area());
        Self::new(size, data)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Smallest and largest finite values, or `None` if there are none.
    pub fn finite_range(&self) -> Option<(f32, f32)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
