use crate::CaptureError;
use depth_base::{Frame, Size};

/// Converts YUYV (YUV 4:2:2) pixel data to RGB.
///
/// YUYV packs as `[Y0, U, Y1, V, ...]`; each pair of pixels shares U and V.
/// Uses BT.601 coefficients:
/// - R = Y + 1.402 * (V - 128)
/// - G = Y - 0.344 * (U - 128) - 0.714 * (V - 128)
/// - B = Y + 1.772 * (U - 128)
///
/// Returns `None` if `data` is shorter than `width * height * 2` bytes.
pub fn yuyv_to_rgb(data: &[u8], size: Size) -> Option<Vec<u8>> {
    let pixel_count = size.area();
    let expected_len = pixel_count * 2;
    if data.len() < expected_len {
        return None;
    }

    let mut rgb = Vec::with_capacity(pixel_count * 3);
    for chunk in data[..expected_len].chunks_exact(4) {
        let u = chunk[1] as f32 - 128.0;
        let v = chunk[3] as f32 - 128.0;
        for y in [chunk[0] as f32, chunk[2] as f32] {
            let r = (y + 1.402 * v).clamp(0.0, 255.0) as u8;
            let g = (y - 0.344 * u - 0.714 * v).clamp(0.0, 255.0) as u8;
            let b = (y + 1.772 * u).clamp(0.0, 255.0) as u8;
            rgb.extend_from_slice(&[r, g, b]);
        }
    }
    Some(rgb)
}

/// Decode a YUYV buffer into a frame.
pub fn yuyv_frame(data: &[u8], size: Size) -> Result<Frame, CaptureError> {
    let rgb = yuyv_to_rgb(data, size).ok_or_else(|| {
        CaptureError::Decode(format!(
            "YUYV frame too short: got {} bytes, expected {} for {}",
            data.len(),
            size.area() * 2,
            size
        ))
    })?;
    Ok(Frame::new(size, rgb)?)
}

/// Decode an MJPEG buffer into a frame, whatever its color type.
pub fn jpeg_frame(data: &[u8]) -> Result<Frame, CaptureError> {
    let rgb = image::load_from_memory(data)?.to_rgb8();
    let size = Size::new(rgb.width() as usize, rgb.height() as usize);
    Ok(Frame::new(size, rgb.into_raw())?)
}
