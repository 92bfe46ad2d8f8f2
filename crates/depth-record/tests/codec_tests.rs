use depth_record::Codec;

#[test]
fn test_parse_codec() {
    assert_eq!("mp4v".parse::<Codec>(), Ok(Codec::MP4V));
    assert_eq!("XVID".parse::<Codec>(), Ok(Codec::XVID));
    assert!("mp4".parse::<Codec>().is_err());
    assert!("mp4v2".parse::<Codec>().is_err());
    assert!("mp-4".parse::<Codec>().is_err());
}

#[test]
fn test_default_codec_is_mp4v() {
    assert_eq!(Codec::default(), Codec::MP4V);
    assert_eq!(Codec::default().to_string(), "mp4v");
}

#[test]
fn test_ffmpeg_encoders() {
    assert_eq!(Codec::MP4V.ffmpeg_encoder(), Some("mpeg4"));
    assert_eq!(Codec::XVID.ffmpeg_encoder(), Some("mpeg4"));
    assert_eq!(Codec::AVC1.ffmpeg_encoder(), Some("libx264"));
    assert_eq!(Codec::MJPG.ffmpeg_encoder(), Some("mjpeg"));
    assert_eq!(Codec::new(*b"ZZZZ").ffmpeg_encoder(), None);
}

#[test]
fn test_extensions() {
    assert_eq!(Codec::MP4V.extension(), "mp4");
    assert_eq!(Codec::AVC1.extension(), "mp4");
    assert_eq!(Codec::MJPG.extension(), "avi");
}
