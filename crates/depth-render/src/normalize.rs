use crate::{Lut, RenderError};
use depth_base::{DepthMap, Frame, Size, TensorError};
use image::{ImageBuffer, Luma, imageops::FilterType};

/// Min-max normalize to [0, 1]. A constant map, or one with no finite
/// values, becomes all zero. Non-finite entries map to 0.
pub fn normalize(depth: &DepthMap) -> Vec<f32> {
    let Some((min, max)) = depth.finite_range() else {
        log::debug!("depth map has no finite values");
        return vec![0.0; depth.data().len()];
    };
    let range = max - min;
    if range <= 0.0 {
        log::debug!("depth map is constant at {}", min);
        return vec![0.0; depth.data().len()];
    }
    depth
        .data()
        .iter()
        .map(|&v| {
            if v.is_finite() {
                ((v - min) / range).clamp(0.0, 1.0)
            } else {
                0.0
            }
        })
        .collect()
}

/// Scale [0, 1] values to 8 bits, truncating.
pub fn quantize(values: &[f32]) -> Vec<u8> {
    values.iter().map(|&v| (v * 255.0) as u8).collect()
}

/// Resize a single-channel image with bilinear filtering.
pub fn resize_gray(gray: Vec<u8>, from: Size, to: Size) -> Result<Vec<u8>, RenderError> {
    if from == to {
        return Ok(gray);
    }
    let got = gray.len();
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(from.width as u32, from.height as u32, gray).ok_or(
            TensorError::ShapeMismatch {
                expected: from.area(),
                got,
            },
        )?;
    let resized = image::imageops::resize(&image, to.width as u32, to.height as u32, FilterType::Triangle);
    Ok(resized.into_raw())
}

pub fn invert(gray: &mut [u8]) {
    for v in gray {
        *v = 255 - *v;
    }
}

/// Map each intensity through `lut` into an RGB frame.
pub fn colorize(gray: &[u8], size: Size, lut: &Lut) -> Result<Frame, RenderError> {
    let mut data = Vec::with_capacity(gray.len() * 3);
    for &v in gray {
        data.extend_from_slice(&lut[v as usize]);
    }
    Ok(Frame::new(size, data)?)
}
