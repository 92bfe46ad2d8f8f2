use crate::InferError;
use depth_base::Tensor;
use std::collections::HashMap;

/// A loaded model, ready to run forward passes.
pub trait Session {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError>;
    fn input_names(&self) -> &[String];
    fn output_names(&self) -> &[String];
    /// Declared input shapes, in the order of `input_names`. Dynamic dimensions are negative.
    fn input_shapes(&self) -> &[Vec<i64>];
}
