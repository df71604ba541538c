use crate::config::form_definition::{
    default_event, default_fields, DEFAULT_ENDPOINT, DEFAULT_MIN_AGE,
};
use crate::core::engine::DEFAULT_SUCCESS_ROUTE;
use crate::domain::model::{EventDetails, FieldConfig, FieldVariant};
use crate::utils::error::{RegistrationError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormSettings,
    #[serde(default = "default_event")]
    pub event: EventDetails,
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_min_age")]
    pub min_age: u32,
    #[serde(default = "default_success_route")]
    pub success_route: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_min_age() -> u32 {
    DEFAULT_MIN_AGE
}

fn default_success_route() -> String {
    DEFAULT_SUCCESS_ROUTE.to_string()
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            min_age: default_min_age(),
            success_route: default_success_route(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form: FormSettings::default(),
            event: default_event(),
            fields: default_fields(),
        }
    }
}

impl FormConfig {
    /// 從 TOML 檔案載入表單設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistrationError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析表單設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RegistrationError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FORM_ENDPOINT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegistrationError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("form.endpoint", &self.form.endpoint)?;
        validation::validate_range("form.min_age", self.form.min_age, 1, 120)?;
        validation::validate_non_empty_string("form.success_route", &self.form.success_route)?;

        if self.fields.is_empty() {
            return Err(RegistrationError::MissingConfigError {
                field: "fields".to_string(),
            });
        }

        let mut ids = HashSet::new();
        let mut entries = HashSet::new();
        for field in &self.fields {
            validation::validate_non_empty_string("fields.id", &field.id)?;
            validation::validate_non_empty_string(&format!("fields.{}.entry", field.id), &field.entry)?;

            if !ids.insert(field.id.as_str()) {
                return Err(RegistrationError::ConfigValidationError {
                    field: format!("fields.{}", field.id),
                    message: "duplicate field id".to_string(),
                });
            }
            if !entries.insert(field.entry.as_str()) {
                return Err(RegistrationError::ConfigValidationError {
                    field: format!("fields.{}.entry", field.id),
                    message: format!("entry '{}' is used by more than one field", field.entry),
                });
            }
            if field.variant.is_choice() && field.options.is_empty() {
                return Err(RegistrationError::ConfigValidationError {
                    field: format!("fields.{}.options", field.id),
                    message: "choice fields need at least one option".to_string(),
                });
            }
            if let Some(pattern) = &field.pattern {
                validation::compile_pattern(&format!("fields.{}.pattern", field.id), pattern)?;
            }
            if field.age_gate && field.variant != FieldVariant::Date {
                return Err(RegistrationError::ConfigValidationError {
                    field: format!("fields.{}.age_gate", field.id),
                    message: "only a date field can be checked by the age gate".to_string(),
                });
            }
        }

        let gated = self.fields.iter().filter(|f| f.age_gate).count();
        if gated != 1 {
            return Err(RegistrationError::ConfigValidationError {
                field: "fields.age_gate".to_string(),
                message: format!("exactly one birth date field is required, found {}", gated),
            });
        }

        Ok(())
    }

    pub fn endpoint(&self) -> &str {
        &self.form.endpoint
    }
}

impl Validate for FormConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
