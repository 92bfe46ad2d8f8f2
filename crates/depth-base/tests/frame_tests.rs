use depth_base::{CompositedFrame, DepthMap, Frame, Size, Tensor, TensorError};

#[test]
fn test_frame_new_checks_buffer_length() {
    let ok = Frame::new(Size::new(4, 2), vec![0u8; 4 * 2 * 3]);
    assert!(ok.is_ok());

    let short = Frame::new(Size::new(4, 2), vec![0u8; 10]);
    assert!(matches!(
        short,
        Err(TensorError::ShapeMismatch { expected: 24, got: 10 })
    ));
}

#[test]
fn test_frame_zero_dimension_is_empty() {
    let frame = Frame::new(Size::new(0, 480), vec![]).unwrap();
    assert!(frame.is_empty());
}

#[test]
fn test_frame_filled_pixels() {
    let frame = Frame::filled(Size::new(3, 2), [10, 20, 30]);
    assert_eq!(frame.data().len(), 18);
    assert_eq!(frame.pixel(2, 1), Some([10, 20, 30]));
    assert_eq!(frame.pixel(3, 0), None);
}

#[test]
fn test_side_by_side_layout() {
    let left = Frame::filled(Size::new(2, 2), [255, 0, 0]);
    let right = Frame::filled(Size::new(2, 2), [0, 0, 255]);
    let composite = CompositedFrame::side_by_side(&left, &right).unwrap();

    assert_eq!(composite.size(), Size::new(4, 2));
    assert_eq!(composite.source_width(), 2);
    for y in 0..2 {
        assert_eq!(composite.pixel(0, y), Some([255, 0, 0]));
        assert_eq!(composite.pixel(1, y), Some([255, 0, 0]));
        assert_eq!(composite.pixel(2, y), Some([0, 0, 255]));
        assert_eq!(composite.pixel(3, y), Some([0, 0, 255]));
    }
}

#[test]
fn test_side_by_side_rejects_size_mismatch() {
    let left = Frame::filled(Size::new(4, 2), [0, 0, 0]);
    let right = Frame::filled(Size::new(2, 2), [0, 0, 0]);
    assert!(CompositedFrame::side_by_side(&left, &right).is_err());
}

#[test]
fn test_depthmap_from_batched_layouts() {
    let hw = Tensor::new(vec![1, 2, 3], vec![0.0f32; 6]).unwrap();
    assert_eq!(DepthMap::from_batched(hw).unwrap().size(), Size::new(3, 2));

    let nhwc = Tensor::new(vec![1, 2, 3, 1], vec![0.0f32; 6]).unwrap();
    assert_eq!(DepthMap::from_batched(nhwc).unwrap().size(), Size::new(3, 2));

    let nchw = Tensor::new(vec![1, 1, 2, 3], vec![0.0f32; 6]).unwrap();
    assert_eq!(DepthMap::from_batched(nchw).unwrap().size(), Size::new(3, 2));
}

#[test]
fn test_depthmap_from_batched_takes_first_element() {
    let data: Vec<f32> = (0..12).map(|v| v as f32).collect();
    let batch = Tensor::new(vec![2, 2, 3], data).unwrap();
    let map = DepthMap::from_batched(batch).unwrap();
    assert_eq!(map.data(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_depthmap_from_batched_rejects_multichannel() {
    let rgb = Tensor::new(vec![1, 2, 2, 3], vec![0.0f32; 12]).unwrap();
    assert!(DepthMap::from_batched(rgb).is_err());
}

#[test]
fn test_depthmap_finite_range_skips_nan() {
    let map = DepthMap::new(Size::new(4, 1), vec![f32::NAN, 2.0, -1.0, f32::INFINITY]).unwrap();
    assert_eq!(map.finite_range(), Some((-1.0, 2.0)));

    let all_nan = DepthMap::filled(Size::new(2, 2), f32::NAN);
    assert_eq!(all_nan.finite_range(), None);
}
