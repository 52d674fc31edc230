use crate::domain::common::{NamedForm, NamedRecord};

/// Top-level organisational area; zone areas belong to one.
pub type UnitArea = NamedRecord;
pub type UnitAreaForm = NamedForm;
