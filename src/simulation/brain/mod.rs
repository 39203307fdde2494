//! Neural decision network for seeker brains.
//!
//! Every brain has the same fixed topology: 4 sensor inputs, hidden layers of
//! 10, 20 and 10 neurons, and 2 outputs (rotation delta, speed delta), all with
//! tanh activation. Genetic operators work on whole layers: crossover copies
//! each layer from one of the two parents and mutation replaces layers with
//! fresh random ones.

use ndarray::Array1;
use rand::Rng;

pub mod layer;

pub use layer::Layer;

/// Number of sensor inputs.
pub const INPUT_SIZE: usize = 4;
/// Number of control outputs.
pub const OUTPUT_SIZE: usize = 2;
/// Weight matrix shapes, including the bias row of every layer.
pub const LAYER_SHAPES: [(usize, usize); 4] = [
    (INPUT_SIZE + 1, 10),
    (11, 20),
    (21, 10),
    (11, OUTPUT_SIZE),
];

/// Feed-forward network that maps a sensor vector to a control delta.
#[derive(Debug, Clone, PartialEq)]
pub struct Brain {
    /// Ordered layers from input to output.
    pub layers: Vec<Layer>,
}

impl Brain {
    /// Creates a new brain with random weights in `[-0.5, 0.5)`.
    pub fn new_random() -> Self {
        let layers = LAYER_SHAPES.iter().map(|&shape| Layer::new_random(shape)).collect();
        Brain { layers }
    }

    /// Runs a forward pass through the brain.
    ///
    /// Returns `[Δrotation, Δspeed]`, each in `(-1, 1)`.
    #[inline]
    pub fn think(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let mut output = inputs.clone();
        for layer in &self.layers {
            output = layer.forward(&output);
        }
        output
    }

    /// Creates a new brain whose layers are copied from either parent.
    ///
    /// Each layer is taken from `parent1` with probability `rate` and from
    /// `parent2` otherwise. Layers are never blended and never shared.
    pub fn crossover(parent1: &Brain, parent2: &Brain, rate: f32) -> Self {
        let mut rng = rand::rng();
        let layers = parent1
            .layers
            .iter()
            .zip(&parent2.layers)
            .map(|(layer1, layer2)| {
                if rng.random::<f32>() < rate {
                    layer1.clone()
                } else {
                    layer2.clone()
                }
            })
            .collect();
        Brain { layers }
    }

    /// Replaces each layer with a fresh random one with probability `rate`.
    ///
    /// Returns the number of layers that were replaced.
    pub fn mutate(&mut self, rate: f32) -> usize {
        let mut rng = rand::rng();
        let mut replaced = 0;
        for layer in &mut self.layers {
            if rng.random::<f32>() < rate {
                *layer = Layer::new_random(layer.shape());
                replaced += 1;
            }
        }
        replaced
    }
}
