pub mod probability;

pub use probability::{bernoulli, clamp_normal, sigmoid, truncated_normal, weighted_index};
