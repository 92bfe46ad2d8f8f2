use std::fmt;

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Capture resolutions selectable by the user.
///
/// This is the single table shared by capture negotiation and recorder
/// sizing. The recorder never restates these numbers; it asks for
/// [`ResolutionPreset::composite_size`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResolutionPreset {
    P240 = 1,
    #[default]
    P480 = 2,
    P720 = 3,
    P1080 = 4,
}

impl ResolutionPreset {
    pub const ALL: [ResolutionPreset; 4] = [
        ResolutionPreset::P240,
        ResolutionPreset::P480,
        ResolutionPreset::P720,
        ResolutionPreset::P1080,
    ];

    /// Capture size requested from the device.
    pub const fn size(self) -> Size {
        match self {
            ResolutionPreset::P240 => Size::new(320, 240),
            ResolutionPreset::P480 => Size::new(640, 480),
            ResolutionPreset::P720 => Size::new(1280, 720),
            ResolutionPreset::P1080 => Size::new(1920, 1080),
        }
    }

    /// Size of the side-by-side source + depth image built from a capture at this preset.
    pub const fn composite_size(self) -> Size {
        let size = self.size();
        Size::new(size.width * 2, size.height)
    }

    /// Menu number of this preset (1-4).
    pub const fn option(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            ResolutionPreset::P240 => "240p",
            ResolutionPreset::P480 => "480p",
            ResolutionPreset::P720 => "720p",
            ResolutionPreset::P1080 => "1080p",
        }
    }
}

impl fmt::Display for ResolutionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.size())
    }
}

impl TryFrom<u8> for ResolutionPreset {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ResolutionPreset::P240),
            2 => Ok(ResolutionPreset::P480),
            3 => Ok(ResolutionPreset::P720),
            4 => Ok(ResolutionPreset::P1080),
            _ => Err(format!(
                "Invalid resolution option: {}. Options are 1: 240p, 2: 480p, 3: 720p, 4: 1080p.",
                value
            )),
        }
    }
}
