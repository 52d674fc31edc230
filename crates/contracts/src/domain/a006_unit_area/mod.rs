pub mod aggregate;

pub use aggregate::{UnitArea, UnitAreaForm};
