pub mod api;
pub mod options;
pub mod serde_helpers;
pub mod validation;
