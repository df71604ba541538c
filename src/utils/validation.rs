use crate::utils::error::{RegistrationError, Result};
use regex::Regex;
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RegistrationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RegistrationError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RegistrationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

fn path_error(field_name: &str, path: &Path, reason: &str) -> RegistrationError {
    RegistrationError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// The path must name an existing regular file.
pub fn validate_input_file(field_name: &str, path: &str) -> Result<()> {
    let path = Path::new(path);
    if path.as_os_str().is_empty() {
        return Err(path_error(field_name, path, "Path cannot be empty"));
    }
    if !path.is_file() {
        return Err(path_error(field_name, path, "File does not exist"));
    }
    Ok(())
}

/// The path must be writable as a file: not a directory, and its parent
/// directory must already exist.
pub fn validate_output_file(field_name: &str, path: &str) -> Result<()> {
    let path = Path::new(path);
    if path.as_os_str().is_empty() {
        return Err(path_error(field_name, path, "Path cannot be empty"));
    }
    if path.is_dir() {
        return Err(path_error(field_name, path, "Path is a directory"));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => Err(path_error(
            field_name,
            path,
            "Parent directory does not exist",
        )),
        _ => Ok(()),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistrationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RegistrationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Compiles an HTML `pattern` attribute. Like the browser, the pattern must
/// match the whole value.
pub fn compile_pattern(field_name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
        RegistrationError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Invalid pattern '{}': {}", pattern, e),
        }
    })
}

pub fn validate_pattern(field_name: &str, value: &str, pattern: &str) -> Result<()> {
    let re = compile_pattern(field_name, pattern)?;
    if !re.is_match(value) {
        return Err(RegistrationError::ValidationError {
            field: field_name.to_string(),
            message: format!("'{}' does not match the requested format", value),
        });
    }
    Ok(())
}

pub fn validate_number(field_name: &str, value: &str, min: Option<i64>) -> Result<()> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| RegistrationError::ValidationError {
            field: field_name.to_string(),
            message: format!("'{}' is not a number", value),
        })?;

    if let Some(min) = min {
        if number < min as f64 {
            return Err(RegistrationError::ValidationError {
                field: field_name.to_string(),
                message: format!("Value must be at least {}", min),
            });
        }
    }
    Ok(())
}

pub fn validate_choice(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(RegistrationError::ValidationError {
            field: field_name.to_string(),
            message: format!("'{}' is not one of the available options", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://example.com").is_ok());
        assert!(validate_url("endpoint", "http://example.com").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "invalid-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_file_paths() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("answers.toml");
        std::fs::write(&existing, "nome_completo = \"Ana\"\n").unwrap();
        let existing = existing.to_str().unwrap();
        let missing = dir.path().join("missing.toml");
        let missing = missing.to_str().unwrap();
        let dir_path = dir.path().to_str().unwrap();

        assert!(validate_input_file("answers", existing).is_ok());
        assert!(validate_input_file("answers", missing).is_err());
        assert!(validate_input_file("answers", dir_path).is_err());
        assert!(validate_input_file("answers", "").is_err());

        assert!(validate_output_file("render", missing).is_ok());
        assert!(validate_output_file("render", existing).is_ok());
        assert!(validate_output_file("render", "page.html").is_ok());
        assert!(validate_output_file("render", dir_path).is_err());
        let orphan = dir.path().join("nope").join("page.html");
        assert!(validate_output_file("render", orphan.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("min_age", 14u32, 0, 120).is_ok());
        assert!(validate_range("min_age", 121u32, 0, 120).is_err());
    }

    #[test]
    fn test_pattern_matches_whole_value() {
        assert!(validate_pattern("cep", "12345-678", "[0-9]{5}-?[0-9]{3}").is_ok());
        assert!(validate_pattern("cep", "12345678", "[0-9]{5}-?[0-9]{3}").is_ok());
        assert!(validate_pattern("cep", "12345-6789", "[0-9]{5}-?[0-9]{3}").is_err());
        assert!(validate_pattern("phone", "(19) 99999-8888", "^[-() 0-9]+$").is_ok());
        assert!(validate_pattern("phone", "call me", "^[-() 0-9]+$").is_err());
        assert!(compile_pattern("bad", "[0-9").is_err());
    }

    #[test]
    fn test_validate_number() {
        assert!(validate_number("numero", "123", Some(1)).is_ok());
        assert!(validate_number("numero", "0", Some(1)).is_err());
        assert!(validate_number("numero", "abc", None).is_err());
    }

    #[test]
    fn test_validate_choice() {
        assert!(validate_choice("sexo", "Feminino", &["Masculino", "Feminino"]).is_ok());
        assert!(validate_choice("sexo", "Outro", &["Masculino", "Feminino"]).is_err());
    }
}
