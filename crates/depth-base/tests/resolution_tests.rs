use depth_base::{ResolutionPreset, Size};

#[test]
fn test_preset_sizes() {
    assert_eq!(ResolutionPreset::P240.size(), Size::new(320, 240));
    assert_eq!(ResolutionPreset::P480.size(), Size::new(640, 480));
    assert_eq!(ResolutionPreset::P720.size(), Size::new(1280, 720));
    assert_eq!(ResolutionPreset::P1080.size(), Size::new(1920, 1080));
}

#[test]
fn test_composite_size_is_double_width() {
    for preset in ResolutionPreset::ALL {
        let capture = preset.size();
        let composite = preset.composite_size();
        assert_eq!(composite.width, capture.width * 2);
        assert_eq!(composite.height, capture.height);
    }
}

#[test]
fn test_preset_try_from_option() {
    for option in 1u8..=4 {
        let preset = ResolutionPreset::try_from(option).unwrap();
        assert_eq!(preset.option(), option);
    }
    assert!(ResolutionPreset::try_from(0).is_err());
    assert!(ResolutionPreset::try_from(5).is_err());
}

#[test]
fn test_preset_default_is_480p() {
    assert_eq!(ResolutionPreset::default(), ResolutionPreset::P480);
}

#[test]
fn test_preset_display() {
    assert_eq!(ResolutionPreset::P720.to_string(), "720p (1280x720)");
}
