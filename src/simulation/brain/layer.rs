//! A single fully connected layer with an absorbed bias row.

use ndarray::{Array1, Array2, s};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;

/// A single layer of the decision network.
///
/// The weight matrix has shape `(input_size + 1, output_size)`. Row 0 holds the
/// biases: the forward pass prepends a constant 1 to the input vector before the
/// vector-matrix product.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Weight matrix (`input_size + 1` × `output_size`), bias row first.
    pub weights: Array2<f32>,
}

impl Layer {
    /// Creates a new layer with weights drawn uniformly from `[-0.5, 0.5)`.
    pub fn new_random(shape: (usize, usize)) -> Self {
        Self {
            weights: Array2::random(shape, Uniform::new(-0.5_f32, 0.5)),
        }
    }

    /// Returns the `(rows, columns)` shape of the weight matrix.
    pub fn shape(&self) -> (usize, usize) {
        self.weights.dim()
    }

    /// Performs forward pass with tanh activation.
    #[inline]
    pub fn forward(&self, inputs: &Array1<f32>) -> Array1<f32> {
        debug_assert_eq!(inputs.len() + 1, self.weights.nrows());

        let mut biased = Array1::<f32>::ones(inputs.len() + 1);
        biased.slice_mut(s![1..]).assign(inputs);

        let mut output = biased.dot(&self.weights);
        output.mapv_inplace(f32::tanh);
        output
    }
}
