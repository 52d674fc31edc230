pub mod api;
pub mod form_fields;
pub mod list_page;
pub mod options;
pub mod resource;

pub use list_page::collection_page;
pub use resource::{CollectionResource, RowActions};
