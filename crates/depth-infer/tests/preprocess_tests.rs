use depth_base::{Frame, Size};
use depth_infer::preprocess::nhwc_to_nchw;
use depth_infer::{InferError, InputScaling, Preprocessor};

#[test]
fn test_to_tensor_shape_and_range() {
    let frame = Frame::filled(Size::new(640, 480), [255, 128, 0]);
    let tensor = Preprocessor::default()
        .to_tensor(&frame, Size::new(320, 240))
        .unwrap();
    assert_eq!(tensor.shape, vec![1, 240, 320, 3]);
    assert!(tensor.data.iter().all(|v| (0.0..=1.0).contains(v)));
    // a flat image stays flat under bilinear resampling, give or take rounding
    let step = 1.0 / 255.0 + 1e-6;
    assert!((tensor.data[0] - 1.0).abs() <= step);
    assert!((tensor.data[1] - 128.0 / 255.0).abs() <= step);
    assert!(tensor.data[2].abs() <= step);
}

#[test]
fn test_to_tensor_upscales() {
    let frame = Frame::filled(Size::new(4, 2), [10, 20, 30]);
    let tensor = Preprocessor::default()
        .to_tensor(&frame, Size::new(8, 6))
        .unwrap();
    assert_eq!(tensor.shape, vec![1, 6, 8, 3]);
}

#[test]
fn test_to_tensor_same_size_keeps_pixels() {
    let data: Vec<u8> = (0..2 * 2 * 3).map(|v| v as u8 * 10).collect();
    let frame = Frame::new(Size::new(2, 2), data.clone()).unwrap();
    let tensor = Preprocessor::new(InputScaling::UnitRange)
        .to_tensor(&frame, Size::new(2, 2))
        .unwrap();
    let expected: Vec<f32> = data.iter().map(|&v| v as f32 / 255.0).collect();
    assert_eq!(tensor.data, expected);
}

#[test]
fn test_to_tensor_quantized_scaling() {
    let frame = Frame::filled(Size::new(2, 2), [128, 128, 128]);
    let scaling = InputScaling::Quantized {
        scale: 2.0,
        zero_point: 127.0,
    };
    let tensor = Preprocessor::new(scaling)
        .to_tensor(&frame, Size::new(2, 2))
        .unwrap();
    assert!(tensor.data.iter().all(|&v| v == 2.0));
}

#[test]
fn test_empty_frame_is_invalid() {
    let frame = Frame::new(Size::new(0, 0), Vec::new()).unwrap();
    let result = Preprocessor::default().to_tensor(&frame, Size::new(320, 240));
    assert!(matches!(result, Err(InferError::InvalidFrame(_))));
}

#[test]
fn test_empty_target_is_invalid() {
    let frame = Frame::filled(Size::new(4, 4), [0, 0, 0]);
    let result = Preprocessor::default().to_tensor(&frame, Size::new(0, 4));
    assert!(matches!(result, Err(InferError::InvalidFrame(_))));
}

#[test]
fn test_nhwc_to_nchw() {
    // 1x1x2x3: two pixels, rgb each
    let tensor =
        depth_base::Tensor::new(vec![1, 1, 2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let nchw = nhwc_to_nchw(&tensor).unwrap();
    assert_eq!(nchw.shape, vec![1, 3, 1, 2]);
    assert_eq!(nchw.data, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
}
