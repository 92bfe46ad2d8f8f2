use depth_base::{Tensor, TensorError};

#[test]
fn test_tensor_new_valid() {
    let tensor = Tensor::new(vec![2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(tensor.shape, vec![2, 3]);
    assert_eq!(tensor.data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_tensor_new_shape_mismatch() {
    let result = Tensor::new(vec![2, 3], vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(TensorError::ShapeMismatch { expected: 6, got: 3 })
    ));
}

#[test]
fn test_tensor_new_overflow() {
    let result = Tensor::<f32>::new(vec![usize::MAX, 2], vec![]);
    assert!(matches!(result, Err(TensorError::ShapeOverflow)));
}

#[test]
fn test_tensor_zeros_nhwc() {
    let tensor = Tensor::<f32>::zeros(vec![1, 240, 320, 3]).unwrap();
    assert_eq!(tensor.ndim(), 4);
    assert_eq!(tensor.len(), 240 * 320 * 3);
    assert!(tensor.data.iter().all(|&v| v == 0.0));
}

#[test]
fn test_tensor_reshape_keeps_data() {
    let tensor = Tensor::new(vec![2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    let reshaped = tensor.reshape(vec![1, 2, 3]).unwrap();
    assert_eq!(reshaped.shape, vec![1, 2, 3]);
    assert_eq!(reshaped.data, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_tensor_reshape_rejects_wrong_count() {
    let tensor = Tensor::new(vec![2, 3], vec![0u8; 6]).unwrap();
    assert!(tensor.reshape(vec![4, 2]).is_err());
}

#[test]
fn test_tensor_is_empty() {
    let empty = Tensor::<f32>::new(vec![0], vec![]).unwrap();
    assert!(empty.is_empty());

    let not_empty = Tensor::new(vec![2], vec![1.0, 2.0]).unwrap();
    assert!(!not_empty.is_empty());
}

#[test]
fn test_tensor_error_display() {
    let err = TensorError::DimensionMismatch {
        expected: vec![1, 320, 240, 3],
        got: vec![1, 240, 320, 3],
    };
    let msg = err.to_string();
    assert!(msg.contains("[1, 320, 240, 3]"));
    assert!(msg.contains("[1, 240, 320, 3]"));
}
