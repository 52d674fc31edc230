pub mod cascade;
pub mod ui;
