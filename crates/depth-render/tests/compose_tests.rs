use depth_base::{DepthMap, Frame, Size};
use depth_render::normalize::{invert, normalize, quantize, resize_gray};
use depth_render::{Colormap, Polarity, Postprocessor, RenderError};

#[test]
fn test_normalize_constant_map_is_zero() {
    let depth = DepthMap::filled(Size::new(4, 3), 7.5);
    assert!(normalize(&depth).iter().all(|&v| v == 0.0));
}

#[test]
fn test_normalize_range() {
    let depth = DepthMap::new(Size::new(3, 1), vec![2.0, 4.0, 6.0]).unwrap();
    assert_eq!(normalize(&depth), vec![0.0, 0.5, 1.0]);
}

#[test]
fn test_normalize_ignores_non_finite() {
    let depth = DepthMap::new(Size::new(4, 1), vec![0.0, f32::NAN, 10.0, f32::INFINITY]).unwrap();
    assert_eq!(normalize(&depth), vec![0.0, 0.0, 1.0, 0.0]);

    let all_nan = DepthMap::filled(Size::new(2, 2), f32::NAN);
    assert!(normalize(&all_nan).iter().all(|&v| v == 0.0));
}

#[test]
fn test_quantize_truncates() {
    assert_eq!(quantize(&[0.0, 0.5, 1.0]), vec![0, 127, 255]);
}

#[test]
fn test_invert() {
    let mut gray = vec![0, 100, 255];
    invert(&mut gray);
    assert_eq!(gray, vec![255, 155, 0]);
}

#[test]
fn test_resize_gray_to_target() {
    let gray = vec![50u8; 4 * 2];
    let resized = resize_gray(gray, Size::new(4, 2), Size::new(8, 6)).unwrap();
    assert_eq!(resized.len(), 8 * 6);
    assert!(resized.iter().all(|&v| (49..=51).contains(&v)));
}

#[test]
fn test_compose_is_double_width_for_any_depth_size() {
    let post = Postprocessor::default();
    let frame = Frame::filled(Size::new(64, 48), [1, 2, 3]);
    for depth_size in [Size::new(16, 12), Size::new(64, 48), Size::new(100, 7)] {
        let depth = DepthMap::new(
            depth_size,
            (0..depth_size.area()).map(|v| v as f32).collect(),
        )
        .unwrap();
        let composite = post.compose(&depth, &frame).unwrap();
        assert_eq!(composite.size(), Size::new(128, 48));
        assert_eq!(composite.source_width(), 64);
    }
}

#[test]
fn test_gray_frame_with_constant_depth() {
    let post = Postprocessor::new(Colormap::Magma, Polarity::Direct);
    let frame = Frame::filled(Size::new(640, 480), [128, 128, 128]);
    let depth = DepthMap::filled(Size::new(320, 240), 3.0);

    let composite = post.compose(&depth, &frame).unwrap();
    assert_eq!(composite.size(), Size::new(1280, 480));

    let low = Colormap::Magma.lut()[0];
    for y in (0..480).step_by(37) {
        for x in (0..640).step_by(41) {
            assert_eq!(composite.pixel(x, y), Some([128, 128, 128]));
            assert_eq!(composite.pixel(640 + x, y), Some(low));
        }
    }
}

#[test]
fn test_inverted_polarity_samples_top_of_colormap() {
    let post = Postprocessor::new(Colormap::Gray, Polarity::Inverted);
    let frame = Frame::filled(Size::new(8, 8), [0, 0, 0]);
    let depth = DepthMap::filled(Size::new(4, 4), 1.0);
    let composite = post.compose(&depth, &frame).unwrap();
    assert_eq!(composite.pixel(8, 0), Some([255, 255, 255]));
}

#[test]
fn test_near_is_bright_with_direct_polarity() {
    let post = Postprocessor::new(Colormap::Gray, Polarity::Direct);
    let frame = Frame::filled(Size::new(2, 1), [0, 0, 0]);
    let depth = DepthMap::new(Size::new(2, 1), vec![0.0, 1.0]).unwrap();
    let composite = post.compose(&depth, &frame).unwrap();
    assert_eq!(composite.pixel(2, 0), Some([0, 0, 0]));
    assert_eq!(composite.pixel(3, 0), Some([255, 255, 255]));
}

#[test]
fn test_compose_rejects_empty_inputs() {
    let post = Postprocessor::default();
    let frame = Frame::filled(Size::new(4, 4), [0, 0, 0]);
    let empty_depth = DepthMap::new(Size::new(0, 0), Vec::new()).unwrap();
    assert!(matches!(
        post.compose(&empty_depth, &frame),
        Err(RenderError::EmptyDepthMap)
    ));

    let depth = DepthMap::filled(Size::new(4, 4), 0.0);
    let empty_frame = Frame::new(Size::new(0, 0), Vec::new()).unwrap();
    assert!(matches!(
        post.compose(&depth, &empty_frame),
        Err(RenderError::EmptyFrame)
    ));
}
