pub mod aggregate;

pub use aggregate::{FeedType, FeedTypeForm};
