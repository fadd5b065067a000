use crate::utils::error::{Result, UkpolError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(UkpolError::ConfigError {
            message: format!("{}: URL cannot be empty", field_name),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(UkpolError::ConfigError {
                message: format!("{}: unsupported URL scheme: {}", field_name, scheme),
            }),
        },
        Err(e) => Err(UkpolError::ConfigError {
            message: format!("{}: invalid URL '{}': {}", field_name, url_str, e),
        }),
    }
}

/// Postcodes must be entered in full without a space ("B610PL", not "B61 0PL");
/// the geocoder cannot resolve the spaced form.
pub fn validate_postcode(postcode: &str) -> Result<()> {
    if postcode.is_empty() {
        return Err(UkpolError::ValidationError {
            message: "Postcode cannot be empty".to_string(),
        });
    }

    if postcode.chars().any(char::is_whitespace) {
        return Err(UkpolError::ValidationError {
            message: format!(
                "Postcode '{}' must not contain spaces - enter it in full, e.g. B610PL",
                postcode
            ),
        });
    }

    Ok(())
}
