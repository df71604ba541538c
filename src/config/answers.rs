use crate::core::form::RegistrationForm;
use crate::domain::model::{FieldValue, FieldVariant};
use crate::utils::error::{RegistrationError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A filled-in registration, keyed by field id:
///
/// ```toml
/// nome_completo = "Maria Souza"
/// whatsapp = "19999998888"
/// sacramentos = ["Batismo", "Crisma"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    pub values: BTreeMap<String, FieldValue>,
}

impl Answers {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistrationError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RegistrationError::ConfigValidationError {
            field: "answers".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Feeds every answer into `form` the way a person would enter it:
    /// free text is typed one character at a time, dates and single
    /// choices are picked whole, checkbox options are ticked one by one.
    /// Fields are visited in form order.
    pub fn replay(&self, form: &mut RegistrationForm) -> Result<()> {
        for id in self.values.keys() {
            form.field(id)?;
        }

        let order: Vec<(String, FieldVariant)> = form
            .fields()
            .iter()
            .map(|f| (f.id.clone(), f.variant))
            .collect();

        for (id, variant) in order {
            let Some(value) = self.values.get(&id) else {
                continue;
            };

            match variant {
                FieldVariant::Text | FieldVariant::Number | FieldVariant::Textarea => {
                    form.type_text(&id, value.as_text())?;
                }
                FieldVariant::Date | FieldVariant::Select | FieldVariant::Radio => {
                    form.input(&id, value.as_text())?;
                }
                FieldVariant::Checkbox => {
                    for option in value.values() {
                        form.toggle(&id, option)?;
                    }
                }
            }
            tracing::debug!("{} = {:?}", id, form.value(&id));
        }

        Ok(())
    }
}
