use std::fmt;
use std::str::FromStr;

/// Four-character video codec code, e.g. `mp4v`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Codec([u8; 4]);

impl Codec {
    pub const MP4V: Codec = Codec(*b"mp4v");
    pub const XVID: Codec = Codec(*b"XVID");
    pub const AVC1: Codec = Codec(*b"avc1");
    pub const MJPG: Codec = Codec(*b"MJPG");

    pub const fn new(fourcc: [u8; 4]) -> Self {
        Codec(fourcc)
    }

    pub fn fourcc(&self) -> [u8; 4] {
        self.0
    }

    /// The ffmpeg encoder that produces this codec, if known.
    pub fn ffmpeg_encoder(&self) -> Option<&'static str> {
        match &self.0 {
            b"mp4v" | b"MP4V" | b"FMP4" | b"XVID" | b"xvid" | b"DIVX" => Some("mpeg4"),
            b"avc1" | b"H264" | b"h264" | b"X264" | b"x264" => Some("libx264"),
            b"hvc1" | b"hev1" | b"HEVC" => Some("libx265"),
            b"MJPG" | b"mjpg" => Some("mjpeg"),
            _ => None,
        }
    }

    /// Container tag ffmpeg should write, when it differs from the encoder default.
    pub fn tag(&self) -> Option<&'static str> {
        match &self.0 {
            b"mp4v" | b"MP4V" => Some("mp4v"),
            b"XVID" | b"xvid" => Some("xvid"),
            b"avc1" => Some("avc1"),
            b"hvc1" => Some("hvc1"),
            _ => None,
        }
    }

    /// File extension of the container this codec is written to.
    pub fn extension(&self) -> &'static str {
        match &self.0 {
            b"MJPG" | b"mjpg" | b"XVID" | b"xvid" | b"DIVX" => "avi",
            _ => "mp4",
        }
    }
}

impl Default for Codec {
    fn default() -> Self {
        Codec::MP4V
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl FromStr for Codec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        let fourcc: [u8; 4] = bytes
            .try_into()
            .map_err(|_| format!("codec must be four characters, got '{s}'"))?;
        if !fourcc.iter().all(u8::is_ascii_alphanumeric) {
            return Err(format!("codec must be alphanumeric, got '{s}'"));
        }
        Ok(Codec(fourcc))
    }
}
