use crate::{Size, TensorError};

/// An RGB8 image in row-major HWC order.
#[derive(Clone, PartialEq)]
pub struct Frame {
    size: Size,
    data: Vec<u8>,
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("size", &self.size)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl Frame {
    pub const CHANNELS: usize = 3;

    /// Wrap an RGB buffer, checking that it holds exactly `width * height * 3` bytes.
    pub fn new(size: Size, data: Vec<u8>) -> Result<Self, TensorError> {
        let expected = crate::tensor::element_count(&[size.height, size.width, Self::CHANNELS])?;
        if expected != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// A frame where every pixel is `rgb`.
    pub fn filled(size: Size, rgb: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(size.area() * Self::CHANNELS);
        for _ in 0..size.area() {
            data.extend_from_slice(&rgb);
        }
        Self { size, data }
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

    pub fn is_empty(&self) -> bool {
        self.size.is_empty() || self.data.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = (y * self.size.width + x) * Self::CHANNELS;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// One row of pixels as raw RGB bytes.
    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.size.width * Self::CHANNELS;
        &self.data[y * stride..(y + 1) * stride]
    }
}

/// Source frame on the left, colorized depth on the right.
///
/// Always `2 * source width` wide and `source height` tall.
#[derive(Clone, PartialEq)]
pub struct CompositedFrame {
    image: Frame,
    source_width: usize,
}

impl std::fmt::Debug for CompositedFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositedFrame")
            .field("size", &self.image.size)
            .field("source_width", &self.source_width)
            .finish()
    }
}

impl CompositedFrame {
    /// Concatenate `left` and `right` horizontally. Both must have the same size.
    pub fn side_by_side(left: &Frame, right: &Frame) -> Result<Self, TensorError> {
        if left.size != right.size {
            return Err(TensorError::DimensionMismatch {
                expected: vec![left.height(), left.width(), Frame::CHANNELS],
                got: vec![right.height(), right.width(), Frame::CHANNELS],
            });
        }
        let size = Size::new(left.width() * 2, left.height());
        let mut data = Vec::with_capacity(size.area() * Frame::CHANNELS);
        for y in 0..left.height() {
            data.extend_from_slice(left.row(y));
            data.extend_from_slice(right.row(y));
        }
        Ok(Self {
            image: Frame { size, data },
            source_width: left.width(),
        })
    }

    pub fn size(&self) -> Size {
        self.image.size
    }

    pub fn width(&self) -> usize {
        self.image.width()
    }

    pub fn height(&self) -> usize {
        self.image.height()
    }

    /// Width of each half.
    pub fn source_width(&self) -> usize {
        self.source_width
    }

    pub fn data(&self) -> &[u8] {
        self.image.data()
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        self.image.data_mut()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        self.image.pixel(x, y)
    }
}
