use crate::config::toml_config::FormConfig;
use crate::core::age_gate::{parse_birth_date, AgeGate};
use crate::domain::model::{FieldConfig, FieldValue, FieldVariant, FormSubmission};
use crate::domain::ports::{Clock, FieldRenderer};
use crate::utils::error::{EligibilityError, RegistrationError, Result};
use crate::utils::validation;
use std::collections::HashMap;
use std::sync::Arc;

/// View-model behind the registration page: one buffer per field plus the
/// age gate's error slot. Every input event goes through here.
pub struct RegistrationForm {
    fields: Vec<FieldConfig>,
    values: HashMap<String, FieldValue>,
    gate: AgeGate,
}

impl RegistrationForm {
    pub fn new(fields: Vec<FieldConfig>, gate: AgeGate) -> Self {
        Self {
            fields,
            values: HashMap::new(),
            gate,
        }
    }

    pub fn from_config(config: &FormConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            config.fields.clone(),
            AgeGate::new(config.form.min_age, clock),
        )
    }

    pub fn fields(&self) -> &[FieldConfig] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Result<&FieldConfig> {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| RegistrationError::UnknownField {
                field: id.to_string(),
            })
    }

    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    pub fn text(&self, id: &str) -> &str {
        self.values.get(id).map(FieldValue::as_text).unwrap_or("")
    }

    pub fn gate(&self) -> &AgeGate {
        &self.gate
    }

    /// Replaces a field's contents, as a paste or a picker selection would.
    ///
    /// The value is stored untouched unless the field has a normalizer.
    /// Checkbox groups toggle `raw` instead.
    pub fn input(&mut self, id: &str, raw: &str) -> Result<&FieldValue> {
        let field = self.field(id)?;
        if field.variant.is_multi_valued() {
            return self.toggle(id, raw);
        }

        let value = match field.normalizer {
            Some(kind) => kind.apply(raw),
            None => raw.to_string(),
        };
        let gated = field.age_gate;

        if gated {
            self.gate.on_birth_date_change(&value);
        }
        self.values.insert(id.to_string(), FieldValue::Text(value));
        Ok(&self.values[id])
    }

    /// Appends one typed character, then re-applies the field's mask.
    pub fn keystroke(&mut self, id: &str, ch: char) -> Result<&FieldValue> {
        let mut buffer = self.text(id).to_string();
        buffer.push(ch);
        self.input(id, &buffer)
    }

    pub fn type_text(&mut self, id: &str, text: &str) -> Result<&FieldValue> {
        self.field(id)?;
        for ch in text.chars() {
            self.keystroke(id, ch)?;
        }
        Ok(&*self.values.entry(id.to_string()).or_default())
    }

    /// Ticks or unticks one option of a checkbox group.
    pub fn toggle(&mut self, id: &str, option: &str) -> Result<&FieldValue> {
        let field = self.field(id)?;
        if !field.variant.is_multi_valued() {
            return Err(RegistrationError::ValidationError {
                field: id.to_string(),
                message: "only checkbox groups can be toggled".to_string(),
            });
        }

        let entry = self
            .values
            .entry(id.to_string())
            .or_insert_with(|| FieldValue::Choices(Vec::new()));
        let mut choices: Vec<String> = entry.values().into_iter().map(str::to_string).collect();
        match choices.iter().position(|c| c == option) {
            Some(index) => {
                choices.remove(index);
            }
            None => choices.push(option.to_string()),
        }
        *entry = FieldValue::Choices(choices);
        Ok(&*entry)
    }

    pub fn error(&self) -> Option<&EligibilityError> {
        self.gate.error()
    }

    /// The submit control is usable only while the error slot is empty.
    pub fn submit_enabled(&self) -> bool {
        self.gate.submit_enabled()
    }

    fn birth_date_text(&self) -> &str {
        self.fields
            .iter()
            .find(|f| f.age_gate)
            .map(|f| self.text(&f.id))
            .unwrap_or("")
    }

    /// Browser-style constraint validation: required, pattern, min and
    /// option membership. Empty optional fields are skipped.
    pub fn check_constraints(&self) -> Result<()> {
        for field in &self.fields {
            let value = self.values.get(&field.id).cloned().unwrap_or_default();

            if value.is_empty() {
                if field.required {
                    return Err(RegistrationError::ValidationError {
                        field: field.id.clone(),
                        message: "this field is required".to_string(),
                    });
                }
                continue;
            }

            if field.variant.is_choice() {
                let allowed = field.option_values();
                for choice in value.values() {
                    validation::validate_choice(&field.id, choice, &allowed)?;
                }
                continue;
            }

            let text = value.as_text();
            if let Some(pattern) = &field.pattern {
                validation::validate_pattern(&field.id, text, pattern)?;
            }
            match field.variant {
                FieldVariant::Number => validation::validate_number(&field.id, text, field.min)?,
                FieldVariant::Date if parse_birth_date(text).is_none() => {
                    return Err(RegistrationError::ValidationError {
                        field: field.id.clone(),
                        message: format!("'{}' is not a valid date", text),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Runs the submit sequence and returns the payload for the form
    /// endpoint. Nothing is sent from here.
    pub fn submit(&mut self) -> Result<FormSubmission> {
        if let Some(err) = self.gate.error() {
            tracing::warn!("Submit pressed while disabled: {}", err);
            return Err(RegistrationError::SubmitBlocked {
                reason: err.to_string(),
            });
        }

        let birth_date = self.birth_date_text().to_string();
        self.gate.validate_on_submit(&birth_date)?;

        if let Err(e) = self.check_constraints() {
            tracing::warn!("Constraint validation failed: {}", e);
            return Err(e);
        }

        Ok(self.to_submission())
    }

    pub fn to_submission(&self) -> FormSubmission {
        let mut submission = FormSubmission::default();
        for field in &self.fields {
            if let Some(value) = self.values.get(&field.id) {
                for v in value.values() {
                    submission.push(&field.entry, v);
                }
            }
        }
        submission
    }

    pub fn render_fields(&self, renderer: &dyn FieldRenderer) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| renderer.render_field(f, self.values.get(&f.id)))
            .collect()
    }
}
