use crate::utils::error::{ExtractError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts the URI shapes the conversion engine understands. A bare absolute
/// path is allowed here because the caller promotes it to `file://` before use.
pub fn validate_uri(field_name: &str, uri: &str) -> Result<()> {
    if uri.trim().is_empty() {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: uri.to_string(),
            reason: "URI cannot be empty".to_string(),
        });
    }

    // data: URIs are opaque; Url::parse accepts them but scheme is all we check.
    if uri.starts_with("data:") || uri.starts_with('/') {
        return Ok(());
    }

    match Url::parse(uri) {
        Ok(url) => match url.scheme() {
            "http" | "https" | "file" => Ok(()),
            scheme => Err(ExtractError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: uri.to_string(),
                reason: format!("Unsupported URI scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: uri.to_string(),
            reason: format!("Invalid URI format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, expected: &str) -> Result<()> {
    let actual = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str());
    match actual {
        Some(ext) if ext == expected => Ok(()),
        _ => Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!("Expected a .{} file", expected),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uri() {
        assert!(validate_uri("uri", "https://example.com").is_ok());
        assert!(validate_uri("uri", "http://example.com").is_ok());
        assert!(validate_uri("uri", "file:///tmp/page.html").is_ok());
        assert!(validate_uri("uri", "data:text/plain,hello").is_ok());
        assert!(validate_uri("uri", "/tmp/page.html").is_ok());
        assert!(validate_uri("uri", "").is_err());
        assert!(validate_uri("uri", "not a uri").is_err());
        assert!(validate_uri("uri", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./out").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("schema", "schema.toml", "toml").is_ok());
        assert!(validate_file_extension("schema", "schema.yaml", "toml").is_err());
        assert!(validate_file_extension("schema", "schema", "toml").is_err());
    }
}
