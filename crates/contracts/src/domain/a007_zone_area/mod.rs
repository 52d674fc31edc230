pub mod aggregate;

pub use aggregate::{ZoneArea, ZoneAreaForm};
