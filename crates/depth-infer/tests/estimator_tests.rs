use depth_base::{Size, Tensor};
use depth_infer::{
    Backend, DepthEstimator, InferError, InputLayout, ModelSource, Session, DEFAULT_INPUT_SIZE,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Session that returns a fixed output and records what it was given.
struct StubSession {
    input_names: Vec<String>,
    output_names: Vec<String>,
    input_shapes: Vec<Vec<i64>>,
    output: Tensor<f32>,
    runs: Rc<Cell<usize>>,
    last_shape: Rc<RefCell<Vec<usize>>>,
    fail: bool,
}

impl StubSession {
    fn new(declared: Vec<i64>, output: Tensor<f32>) -> Self {
        Self {
            input_names: vec!["image".to_string()],
            output_names: vec!["depth".to_string()],
            input_shapes: vec![declared],
            output,
            runs: Rc::new(Cell::new(0)),
            last_shape: Rc::new(RefCell::new(Vec::new())),
            fail: false,
        }
    }
}

impl Session for StubSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        self.runs.set(self.runs.get() + 1);
        *self.last_shape.borrow_mut() = inputs[0].1.shape.clone();
        if self.fail {
            return Err(InferError::Inference("stub failure".to_string()));
        }
        let mut outputs = HashMap::new();
        outputs.insert("depth".to_string(), self.output.clone());
        Ok(outputs)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }

    fn input_shapes(&self) -> &[Vec<i64>] {
        &self.input_shapes
    }
}

fn depth_output(h: usize, w: usize) -> Tensor<f32> {
    let data = (0..h * w).map(|i| i as f32).collect();
    Tensor::new(vec![1, h, w], data).unwrap()
}

#[test]
fn test_infer_returns_depth_map() {
    let stub = StubSession::new(vec![1, 240, 320, 3], depth_output(240, 320));
    let runs = stub.runs.clone();
    let mut estimator = DepthEstimator::from_session(Box::new(stub)).unwrap();

    let input = Tensor::zeros(vec![1, 240, 320, 3]).unwrap();
    let depth = estimator.infer(input).unwrap();
    assert_eq!(depth.size(), Size::new(320, 240));
    assert_eq!(depth.data()[1], 1.0);
    assert_eq!(runs.get(), 1);
}

#[test]
fn test_shape_mismatch_checked_before_run() {
    let stub = StubSession::new(vec![1, 320, 240, 3], depth_output(320, 240));
    let runs = stub.runs.clone();
    let mut estimator = DepthEstimator::from_session(Box::new(stub)).unwrap();

    let input = Tensor::zeros(vec![1, 240, 320, 3]).unwrap();
    let result = estimator.infer(input);
    assert!(matches!(result, Err(InferError::ShapeMismatch { .. })));
    assert_eq!(runs.get(), 0);
}

#[test]
fn test_rank_mismatch_rejected() {
    let stub = StubSession::new(vec![1, 240, 320, 3], depth_output(240, 320));
    let estimator = DepthEstimator::from_session(Box::new(stub)).unwrap();
    let input = Tensor::zeros(vec![240, 320, 3]).unwrap();
    assert!(matches!(
        estimator.bind(input),
        Err(InferError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_input_size_from_declared_shape() {
    let stub = StubSession::new(vec![1, 256, 256, 3], depth_output(256, 256));
    let estimator = DepthEstimator::from_session(Box::new(stub)).unwrap();
    assert_eq!(estimator.input_size(), Size::new(256, 256));
    assert_eq!(estimator.layout(), InputLayout::Nhwc);
}

#[test]
fn test_dynamic_dims_fall_back_to_default_size() {
    let stub = StubSession::new(vec![1, -1, -1, 3], depth_output(240, 320));
    let mut estimator = DepthEstimator::from_session(Box::new(stub)).unwrap();
    assert_eq!(estimator.input_size(), DEFAULT_INPUT_SIZE);

    // dynamic dims accept any size
    let input = Tensor::zeros(vec![1, 240, 320, 3]).unwrap();
    assert!(estimator.infer(input).is_ok());
}

#[test]
fn test_channel_first_model_gets_transposed_input() {
    let stub = StubSession::new(vec![1, 3, 240, 320], depth_output(240, 320));
    let last_shape = stub.last_shape.clone();
    let mut estimator = DepthEstimator::from_session(Box::new(stub)).unwrap();
    assert_eq!(estimator.layout(), InputLayout::Nchw);
    assert_eq!(estimator.input_size(), Size::new(320, 240));

    let input = Tensor::zeros(vec![1, 240, 320, 3]).unwrap();
    estimator.infer(input).unwrap();
    assert_eq!(*last_shape.borrow(), vec![1, 3, 240, 320]);
}

#[test]
fn test_engine_failure_is_inference_error() {
    let mut stub = StubSession::new(vec![1, 240, 320, 3], depth_output(240, 320));
    stub.fail = true;
    let mut estimator = DepthEstimator::from_session(Box::new(stub)).unwrap();
    let input = Tensor::zeros(vec![1, 240, 320, 3]).unwrap();
    assert!(matches!(
        estimator.infer(input),
        Err(InferError::Inference(_))
    ));
}

#[test]
fn test_output_first_batch_element() {
    let output = Tensor::new(vec![2, 1, 2, 2], vec![1.0, 2.0, 3.0, 4.0, 9.0, 9.0, 9.0, 9.0]).unwrap();
    let stub = StubSession::new(vec![1, 2, 2, 3], output);
    let mut estimator = DepthEstimator::from_session(Box::new(stub)).unwrap();
    let depth = estimator.infer(Tensor::zeros(vec![1, 2, 2, 3]).unwrap()).unwrap();
    assert_eq!(depth.data(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_unreadable_output_is_output_error() {
    let output = Tensor::new(vec![6], vec![0.0; 6]).unwrap();
    let stub = StubSession::new(vec![1, 2, 2, 3], output);
    let mut estimator = DepthEstimator::from_session(Box::new(stub)).unwrap();
    let result = estimator.infer(Tensor::zeros(vec![1, 2, 2, 3]).unwrap());
    assert!(matches!(result, Err(InferError::Output(_))));
}

#[test]
fn test_session_without_inputs_fails_to_load() {
    let mut stub = StubSession::new(vec![1, 2, 2, 3], depth_output(2, 2));
    stub.input_names.clear();
    assert!(matches!(
        DepthEstimator::from_session(Box::new(stub)),
        Err(InferError::ModelLoad(_))
    ));
}

#[test]
fn test_non_image_input_fails_to_load() {
    let stub = StubSession::new(vec![1, 512], depth_output(2, 2));
    assert!(matches!(
        DepthEstimator::from_session(Box::new(stub)),
        Err(InferError::ModelLoad(_))
    ));
}

struct FailingBackend;

impl Backend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    fn load_model(&self, model: ModelSource) -> Result<Box<dyn Session>, InferError> {
        Err(InferError::ModelLoad(format!("cannot open {model}")))
    }
}

#[test]
fn test_load_propagates_backend_error() {
    let result = DepthEstimator::load(ModelSource::File("missing.onnx".into()), &FailingBackend);
    match result {
        Err(InferError::ModelLoad(msg)) => assert!(msg.contains("missing.onnx")),
        _ => panic!("expected ModelLoad"),
    }
}
