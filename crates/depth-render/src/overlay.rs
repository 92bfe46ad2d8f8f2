use depth_base::CompositedFrame;

const GLYPH_WIDTH: usize = 8;
const GLYPH_HEIGHT: usize = 12;

/// Position, color and size of burned-in text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    /// Top-left corner of the first glyph.
    pub origin: (usize, usize),
    pub color: [u8; 3],
    /// Each font pixel becomes a `scale x scale` block.
    pub scale: usize,
}

impl Default for TextStyle {
    fn default() -> Self {
        // 24 px tall glyphs with the baseline at y = 70
        Self {
            origin: (7, 46),
            color: [0, 255, 100],
            scale: 2,
        }
    }
}

impl TextStyle {
    /// Size in pixels of `text` rendered in this style.
    pub fn extent(&self, text: &str) -> (usize, usize) {
        (
            text.chars().count() * GLYPH_WIDTH * self.scale,
            GLYPH_HEIGHT * self.scale,
        )
    }
}

/// 8x12 bitmap, one byte per row, MSB is the leftmost pixel.
fn glyph(ch: char) -> Option<[u8; 12]> {
    let rows = match ch {
        '0' => [0x00, 0x3C, 0x42, 0x46, 0x4A, 0x52, 0x62, 0x42, 0x42, 0x3C, 0x00, 0x00],
        '1' => [0x00, 0x08, 0x18, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x3E, 0x00, 0x00],
        '2' => [0x00, 0x3C, 0x42, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x7E, 0x00, 0x00],
        '3' => [0x00, 0x3C, 0x42, 0x02, 0x1C, 0x02, 0x02, 0x02, 0x42, 0x3C, 0x00, 0x00],
        '4' => [0x00, 0x04, 0x0C, 0x14, 0x24, 0x44, 0x7E, 0x04, 0x04, 0x04, 0x00, 0x00],
        '5' => [0x00, 0x7E, 0x40, 0x40, 0x7C, 0x02, 0x02, 0x02, 0x42, 0x3C, 0x00, 0x00],
        '6' => [0x00, 0x1C, 0x20, 0x40, 0x7C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00, 0x00],
        '7' => [0x00, 0x7E, 0x02, 0x04, 0x08, 0x08, 0x10, 0x10, 0x20, 0x20, 0x00, 0x00],
        '8' => [0x00, 0x3C, 0x42, 0x42, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00, 0x00],
        '9' => [0x00, 0x3C, 0x42, 0x42, 0x42, 0x3E, 0x02, 0x04, 0x08, 0x70, 0x00, 0x00],
        'F' => [0x00, 0x7E, 0x40, 0x40, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00],
        'P' => [0x00, 0x7C, 0x42, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00],
        'S' => [0x00, 0x3C, 0x42, 0x40, 0x30, 0x0C, 0x02, 0x42, 0x42, 0x3C, 0x00, 0x00],
        'R' => [0x00, 0x7C, 0x42, 0x42, 0x42, 0x7C, 0x48, 0x44, 0x42, 0x42, 0x00, 0x00],
        'E' => [0x00, 0x7E, 0x40, 0x40, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x7E, 0x00, 0x00],
        'C' => [0x00, 0x3C, 0x42, 0x40, 0x40, 0x40, 0x40, 0x40, 0x42, 0x3C, 0x00, 0x00],
        ':' => [0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00],
        '?' => [0x00, 0x3C, 0x42, 0x02, 0x04, 0x08, 0x08, 0x00, 0x08, 0x08, 0x00, 0x00],
        ' ' => [0x00; 12],
        _ => return None,
    };
    Some(rows)
}

/// Draw `text` into an RGB buffer, clipping at the edges. Unknown characters
/// leave a blank cell.
pub fn draw_text(
    buf: &mut [u8],
    width: usize,
    height: usize,
    text: &str,
    origin: (usize, usize),
    color: [u8; 3],
    scale: usize,
) {
    let scale = scale.max(1);
    let (mut x, y) = origin;
    for ch in text.chars() {
        if x >= width {
            break;
        }
        if let Some(rows) = glyph(ch) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (bits >> (7 - col)) & 1 == 1 {
                        fill_block(
                            buf,
                            width,
                            height,
                            x + col * scale,
                            y + row * scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
        x += GLYPH_WIDTH * scale;
    }
}

fn fill_block(
    buf: &mut [u8],
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    size: usize,
    color: [u8; 3],
) {
    for y in y0..(y0 + size).min(height) {
        for x in x0..(x0 + size).min(width) {
            let idx = (y * width + x) * 3;
            buf[idx..idx + 3].copy_from_slice(&color);
        }
    }
}

/// Burn `text` into the top-left of a composited frame.
pub fn overlay(frame: &mut CompositedFrame, text: &str, style: &TextStyle) {
    let (width, height) = (frame.width(), frame.height());
    draw_text(
        frame.data_mut(),
        width,
        height,
        text,
        style.origin,
        style.color,
        style.scale,
    );
}
