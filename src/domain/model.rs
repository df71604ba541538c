use serde::{Deserialize, Serialize};

/// Control kinds the field renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldVariant {
    Text,
    Number,
    Date,
    Select,
    Radio,
    Checkbox,
    Textarea,
}

impl FieldVariant {
    /// Select, radio and checkbox fields only accept one of their options.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::Select | Self::Radio | Self::Checkbox)
    }

    pub fn is_multi_valued(self) -> bool {
        self == Self::Checkbox
    }
}

/// Input masks that can be attached to a free-text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NormalizerKind {
    Phone,
    PostalCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub id: String,
    /// Name the external form endpoint expects for this answer.
    pub entry: String,
    pub label: String,
    pub variant: FieldVariant,
    /// Fields are required unless marked otherwise.
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub rows: Option<u32>,
    #[serde(default)]
    pub numeric: bool,
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default)]
    pub normalizer: Option<NormalizerKind>,
    /// Marks the birth date field checked by the age gate.
    #[serde(default)]
    pub age_gate: bool,
}

fn default_required() -> bool {
    true
}

impl FieldConfig {
    pub fn new(id: &str, entry: &str, label: &str, variant: FieldVariant) -> Self {
        Self {
            id: id.to_string(),
            entry: entry.to_string(),
            label: label.to_string(),
            variant,
            required: true,
            section: None,
            placeholder: None,
            pattern: None,
            min: None,
            rows: None,
            numeric: false,
            options: Vec::new(),
            normalizer: None,
            age_gate: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn in_section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn numeric_keyboard(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub fn with_options(mut self, options: &[(&str, &str)]) -> Self {
        self.options = options
            .iter()
            .map(|(value, label)| FieldOption::new(value, label))
            .collect();
        self
    }

    /// Options whose label is the value itself.
    pub fn with_plain_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|v| FieldOption::new(v, v)).collect();
        self
    }

    pub fn with_normalizer(mut self, kind: NormalizerKind) -> Self {
        self.normalizer = Some(kind);
        self
    }

    pub fn gated_by_age(mut self) -> Self {
        self.age_gate = true;
        self
    }

    pub fn option_values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }
}

/// Current contents of one field. Checkbox groups hold every ticked option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Choices(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Choices(choices) => choices.iter().all(|c| c.is_empty()),
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text.as_str(),
            Self::Choices(choices) => choices.first().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Text(text) if text.is_empty() => Vec::new(),
            Self::Text(text) => vec![text.as_str()],
            Self::Choices(choices) => choices
                .iter()
                .filter(|c| !c.is_empty())
                .map(String::as_str)
                .collect(),
        }
    }

    pub fn contains(&self, option: &str) -> bool {
        self.values().contains(&option)
    }
}

/// The payload handed to the external form endpoint: entry name to answer,
/// in field order. Checkbox groups contribute one pair per ticked option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub entries: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn push(&mut self, entry: &str, value: &str) {
        self.entries.push((entry.to_string(), value.to_string()));
    }

    pub fn get(&self, entry: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(name, _)| name == entry)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    pub label: String,
    pub value: String,
}

/// Static header shown above the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub title: String,
    #[serde(default)]
    pub motto: Option<String>,
    #[serde(default)]
    pub motto_reference: Option<String>,
    #[serde(default)]
    pub details: Vec<EventDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_untagged_deserialization() {
        let single: FieldValue = serde_json::from_str(r#""Maria""#).unwrap();
        assert_eq!(single, FieldValue::Text("Maria".to_string()));

        let many: FieldValue = serde_json::from_str(r#"["Batismo", "Crisma"]"#).unwrap();
        assert_eq!(many.values(), vec!["Batismo", "Crisma"]);
        assert!(many.contains("Crisma"));
    }

    #[test]
    fn test_empty_values() {
        assert!(FieldValue::default().is_empty());
        assert!(FieldValue::Choices(vec![]).is_empty());
        assert!(FieldValue::default().values().is_empty());
    }

    #[test]
    fn test_fields_are_required_unless_marked_optional() {
        let field: FieldConfig =
            serde_json::from_str(r#"{"id": "a", "entry": "entry.1", "label": "A", "variant": "text"}"#)
                .unwrap();
        assert!(field.required);
        assert_eq!(field, FieldConfig::new("a", "entry.1", "A", FieldVariant::Text));

        let optional: FieldConfig = serde_json::from_str(
            r#"{"id": "b", "entry": "entry.2", "label": "B", "variant": "text", "required": false}"#,
        )
        .unwrap();
        assert!(!optional.required);
    }

    #[test]
    fn test_submission_lookup() {
        let mut submission = FormSubmission::default();
        submission.push("entry.1", "a");
        submission.push("entry.2", "b");
        submission.push("entry.1", "c");
        assert_eq!(submission.get("entry.1"), vec!["a", "c"]);
        assert_eq!(submission.len(), 3);
    }
}
