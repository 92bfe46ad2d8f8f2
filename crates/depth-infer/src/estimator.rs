use crate::preprocess::nhwc_to_nchw;
use crate::{Backend, InferError, ModelSource, Session};
use depth_base::{DepthMap, Size, Tensor};
use std::collections::HashMap;

/// Input size used when the model leaves height or width dynamic.
pub const DEFAULT_INPUT_SIZE: Size = Size::new(320, 240);

/// Channel order of the model's image input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputLayout {
    /// `[N, H, W, C]`
    Nhwc,
    /// `[N, C, H, W]`
    Nchw,
}

impl InputLayout {
    /// Guess the layout from a rank-4 declared shape.
    pub fn detect(shape: &[i64]) -> Self {
        match shape {
            [_, 3, _, last] if *last != 3 => InputLayout::Nchw,
            [_, 1, _, last] if *last != 1 && *last != 3 => InputLayout::Nchw,
            _ => InputLayout::Nhwc,
        }
    }
}

/// Monocular depth model: takes `[1, H, W, 3]` tensors, returns a [`DepthMap`].
pub struct DepthEstimator {
    session: Box<dyn Session>,
    input_name: String,
    output_name: String,
    input_shape: Vec<i64>,
    layout: InputLayout,
}

impl DepthEstimator {
    /// Load `model` through `backend`.
    pub fn load(model: ModelSource, backend: &dyn Backend) -> Result<Self, InferError> {
        log::info!("loading depth model {} with {} backend", model, backend.name());
        let session = backend.load_model(model)?;
        Self::from_session(session)
    }

    /// Wrap an already loaded session, capturing its declared input shape.
    pub fn from_session(session: Box<dyn Session>) -> Result<Self, InferError> {
        let input_name = session
            .input_names()
            .first()
            .cloned()
            .ok_or_else(|| InferError::ModelLoad("model has no inputs".to_string()))?;
        let output_name = session
            .output_names()
            .first()
            .cloned()
            .ok_or_else(|| InferError::ModelLoad("model has no outputs".to_string()))?;
        let input_shape = session
            .input_shapes()
            .first()
            .cloned()
            .ok_or_else(|| InferError::ModelLoad("model declares no input shape".to_string()))?;
        if input_shape.len() != 4 {
            return Err(InferError::ModelLoad(format!(
                "expected a rank-4 image input, model declares {:?}",
                input_shape
            )));
        }
        let layout = InputLayout::detect(&input_shape);

        let estimator = Self {
            session,
            input_name,
            output_name,
            input_shape,
            layout,
        };
        log::info!(
            "depth model input '{}' {:?} ({:?}), output '{}'",
            estimator.input_name,
            estimator.input_shape,
            estimator.layout,
            estimator.output_name
        );
        Ok(estimator)
    }

    pub fn input_shape(&self) -> &[i64] {
        &self.input_shape
    }

    pub fn layout(&self) -> InputLayout {
        self.layout
    }

    /// Declared shape reordered to `[N, H, W, C]`.
    fn declared_nhwc(&self) -> [i64; 4] {
        let s = &self.input_shape;
        match self.layout {
            InputLayout::Nhwc => [s[0], s[1], s[2], s[3]],
            InputLayout::Nchw => [s[0], s[2], s[3], s[1]],
        }
    }

    /// Spatial size the preprocessor must produce.
    pub fn input_size(&self) -> Size {
        let [_, h, w, _] = self.declared_nhwc();
        Size::new(
            if w > 0 { w as usize } else { DEFAULT_INPUT_SIZE.width },
            if h > 0 { h as usize } else { DEFAULT_INPUT_SIZE.height },
        )
    }

    /// Check an NHWC tensor against the declared input and convert it to the
    /// model's layout. Nothing is sent to the engine here.
    pub fn bind(&self, tensor: Tensor<f32>) -> Result<Tensor<f32>, InferError> {
        let declared = self.declared_nhwc();
        let matches = tensor.shape.len() == 4
            && declared
                .iter()
                .zip(&tensor.shape)
                .all(|(&want, &got)| want < 0 || want as usize == got);
        if !matches {
            return Err(InferError::ShapeMismatch {
                expected: format!("{:?}", declared),
                got: format!("{:?}", tensor.shape),
            });
        }
        match self.layout {
            InputLayout::Nhwc => Ok(tensor),
            InputLayout::Nchw => nhwc_to_nchw(&tensor),
        }
    }

    /// Run one forward pass on a bound tensor.
    pub fn execute(&mut self, bound: Tensor<f32>) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        self.session.run(&[(self.input_name.as_str(), bound)])
    }

    /// Take the first batch element of the first output.
    pub fn read_output(
        &self,
        mut outputs: HashMap<String, Tensor<f32>>,
    ) -> Result<DepthMap, InferError> {
        let output = outputs.remove(&self.output_name).ok_or_else(|| {
            InferError::Output(format!("model produced no '{}' output", self.output_name))
        })?;
        DepthMap::from_batched(output).map_err(|e| InferError::Output(e.to_string()))
    }

    /// `bind`, `execute` and `read_output` in one call.
    pub fn infer(&mut self, tensor: Tensor<f32>) -> Result<DepthMap, InferError> {
        let bound = self.bind(tensor)?;
        let outputs = self.execute(bound)?;
        self.read_output(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_layout() {
        assert_eq!(InputLayout::detect(&[1, 256, 256, 3]), InputLayout::Nhwc);
        assert_eq!(InputLayout::detect(&[1, 3, 384, 384]), InputLayout::Nchw);
        assert_eq!(InputLayout::detect(&[1, 3, -1, -1]), InputLayout::Nchw);
        assert_eq!(InputLayout::detect(&[-1, -1, -1, 3]), InputLayout::Nhwc);
    }
}
