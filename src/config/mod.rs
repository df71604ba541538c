pub mod answers;
pub mod form_definition;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::{RegistrationError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "retreat-registration")]
#[command(about = "Fill, check and submit the retreat registration form")]
pub struct CliConfig {
    /// Form definition (TOML); the built-in retreat form is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Filled-in answers (TOML, field id = value)
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Override the form endpoint from the config
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Write the rendered registration page to this path
    #[arg(long)]
    pub render: Option<String>,

    /// Reference date for the age check (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub today: Option<String>,

    /// Validate the answers without posting them
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn today_date(&self) -> Result<Option<NaiveDate>> {
        self.today
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                    RegistrationError::InvalidConfigValueError {
                        field: "today".to_string(),
                        value: raw.to_string(),
                        reason: e.to_string(),
                    }
                })
            })
            .transpose()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            validation::validate_url("endpoint", endpoint)?;
        }
        if let Some(path) = &self.config {
            validation::validate_input_file("config", path)?;
        }
        if let Some(path) = &self.answers {
            validation::validate_input_file("answers", path)?;
        }
        if let Some(path) = &self.render {
            validation::validate_output_file("render", path)?;
        }
        self.today_date()?;
        Ok(())
    }
}
