pub mod aggregate;

pub use aggregate::{FeedCategory, FeedCategoryForm};
