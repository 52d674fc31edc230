pub mod aggregate;

pub use aggregate::{Family, FamilyForm};
