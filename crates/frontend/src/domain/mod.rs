pub mod common;

pub mod a001_family;
pub mod a002_feed_category;
pub mod a003_feed_type;
pub mod a004_cage_model;
pub mod a005_cage_type;
pub mod a006_unit_area;
pub mod a007_zone_area;
pub mod a008_animal;
