use crate::domain::common::{NamedForm, NamedRecord};

pub type CageType = NamedRecord;
pub type CageTypeForm = NamedForm;
