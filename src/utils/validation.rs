use crate::utils::error::{FrenzyError, Result};
use chrono::NaiveDateTime;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Where restaurant data comes from: an HTTP(S) endpoint or a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Http(Url),
    File(std::path::PathBuf),
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(FrenzyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(FrenzyError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FrenzyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FrenzyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FrenzyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Anything with a `scheme://` prefix must be an HTTP(S) URL; everything
/// else is taken as a local file path.
pub fn validate_source(field_name: &str, source: &str) -> Result<DataSource> {
    if source.trim().is_empty() {
        return Err(FrenzyError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    if source.contains("://") {
        validate_url(field_name, source).map(DataSource::Http)
    } else {
        validate_path(field_name, source)?;
        Ok(DataSource::File(source.into()))
    }
}

/// Accepts `YYYY-MM-DDTHH:MM[:SS]`, with `T` or a space between date and time.
pub fn validate_open_at(field_name: &str, value: &str) -> Result<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value.trim(), format).ok())
        .ok_or_else(|| FrenzyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a local date and time like 2022-02-14T21:30".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source", "https://example.com/restaurants.json").is_ok());
        assert!(validate_url("source", "http://example.com").is_ok());
        assert!(validate_url("source", "").is_err());
        assert!(validate_url("source", "invalid-url").is_err());
        assert!(validate_url("source", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_source() {
        assert!(matches!(
            validate_source("source", "https://example.com/restaurants.json").unwrap(),
            DataSource::Http(_)
        ));
        assert_eq!(
            validate_source("source", "data/restaurants.json").unwrap(),
            DataSource::File("data/restaurants.json".into())
        );
        assert!(validate_source("source", "ftp://example.com/r.json").is_err());
        assert!(validate_source("source", "  ").is_err());
    }

    #[test]
    fn test_validate_open_at() {
        let at = validate_open_at("open_at", "2022-02-14T21:30").unwrap();
        assert_eq!(at.to_string(), "2022-02-14 21:30:00");
        assert!(validate_open_at("open_at", "2022-02-14 21:30:15").is_ok());
        assert!(validate_open_at("open_at", "2022-02-14").is_err());
        assert!(validate_open_at("open_at", "9pm").is_err());
    }
}
