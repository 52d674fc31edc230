pub mod aggregate;

pub use aggregate::{CageModel, CageModelForm};
