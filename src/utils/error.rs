use thiserror::Error;

/// Why the age gate is blocking submission. The `Display` text is what the
/// page shows next to the submit button.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EligibilityError {
    #[error("You must be at least {min_age} full years old to register")]
    Underage { min_age: u32 },

    #[error("Please enter your birth date")]
    BirthDateRequired,

    #[error("Registration is restricted to those aged {min_age} or older")]
    Restricted { min_age: u32 },
}

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Submission request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Not eligible: {0}")]
    Eligibility(#[from] EligibilityError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Field '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Submit is disabled: {reason}")]
    SubmitBlocked { reason: String },

    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Form endpoint rejected the submission with status {status}")]
    SubmissionRejected { status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Eligibility,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status the CLI uses for an error of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Low => 0,
            Self::Medium => 2,
            Self::High => 1,
            Self::Critical => 3,
        }
    }
}

impl RegistrationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::SubmissionRejected { .. } => ErrorCategory::Network,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
            Self::Eligibility(_) | Self::SubmitBlocked { .. } => ErrorCategory::Eligibility,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } | Self::UnknownField { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Eligibility => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Eligibility(e) => e.to_string(),
            Self::SubmitBlocked { reason } => reason.clone(),
            Self::ValidationError { field, message } => {
                format!("Please check the '{}' field: {}", field, message)
            }
            Self::UnknownField { field } => format!("The form has no field named '{}'", field),
            Self::ApiError(_) | Self::SubmissionRejected { .. } => {
                "The registration could not be delivered to the form service".to_string()
            }
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the form configuration file and CLI flags",
            ErrorCategory::Input => "Correct the highlighted answer and submit again",
            ErrorCategory::Eligibility => "Check the birth date; applicants must meet the minimum age",
            ErrorCategory::Network => "Check your connection and the form endpoint URL, then resubmit",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
