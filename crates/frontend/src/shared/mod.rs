pub mod api_utils;
pub mod cascade;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod mutation;
pub mod notify;
pub mod page_frame;
pub mod page_standard;
pub mod pagination;
pub mod query_cache;
