pub mod aggregate;

pub use aggregate::{CageType, CageTypeForm};
