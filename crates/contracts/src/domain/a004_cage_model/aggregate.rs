use crate::domain::common::{NamedForm, NamedRecord};

/// Enclosure construction model.
pub type CageModel = NamedRecord;
pub type CageModelForm = NamedForm;
