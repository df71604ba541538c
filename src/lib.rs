pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    render_page, DryRunSink, FixedClock, GoogleFormsSink, HtmlFieldRenderer, LoggingNavigator,
    RecordingNavigator, SystemClock,
};
pub use config::{answers::Answers, toml_config::FormConfig};
pub use crate::core::{
    age_gate::{compute_age, AgeGate},
    engine::RegistrationEngine,
    form::RegistrationForm,
    normalizer::{normalize_phone, normalize_postal_code},
};
pub use utils::error::{EligibilityError, RegistrationError, Result};
