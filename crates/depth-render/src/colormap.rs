use std::fmt;
use std::str::FromStr;

/// Lookup table from 8-bit intensity to RGB.
pub type Lut = [[u8; 3]; 256];

/// Named false-color maps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Colormap {
    #[default]
    Magma,
    Bone,
    Gray,
}

// evenly spaced control points, black to light
const MAGMA: [[u8; 3]; 9] = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const BONE: [[u8; 3]; 4] = [[0, 0, 0], [84, 84, 116], [166, 198, 198], [255, 255, 255]];

const GRAY: [[u8; 3]; 2] = [[0, 0, 0], [255, 255, 255]];

impl Colormap {
    pub const ALL: [Colormap; 3] = [Colormap::Magma, Colormap::Bone, Colormap::Gray];

    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Magma => &MAGMA,
            Colormap::Bone => &BONE,
            Colormap::Gray => &GRAY,
        }
    }

    /// Build the 256-entry table by linear interpolation between control points.
    pub fn lut(self) -> Lut {
        let stops = self.stops();
        let segments = (stops.len() - 1) as f32;
        let mut lut = [[0u8; 3]; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            let t = i as f32 / 255.0 * segments;
            let lo = (t.floor() as usize).min(stops.len() - 2);
            let frac = t - lo as f32;
            for c in 0..3 {
                let a = stops[lo][c] as f32;
                let b = stops[lo + 1][c] as f32;
                entry[c] = (a + (b - a) * frac).round() as u8;
            }
        }
        lut
    }

    pub fn name(self) -> &'static str {
        match self {
            Colormap::Magma => "magma",
            Colormap::Bone => "bone",
            Colormap::Gray => "gray",
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colormap::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown colormap '{s}', expected magma, bone or gray"))
    }
}
