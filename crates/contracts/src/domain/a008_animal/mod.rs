pub mod aggregate;
pub mod form;

pub use aggregate::{
    AnimalCageData, AnimalDetailData, AnimalDetailItem, AnimalFullDetail, AnimalHeader,
    AnimalHeaderData,
};
pub use form::AnimalFormValues;
