use crate::domain::ports::{MarkdownSource, Storage};
use crate::utils::error::{ExtractError, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use percent_encoding::percent_decode_str;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use url::Url;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

/// Default conversion-engine client: resolves the URI schemes the pipeline
/// accepts and hands the body back as Markdown text. The real document
/// conversion happens on the other side of the URI; this adapter only moves
/// bytes.
#[derive(Debug, Clone, Default)]
pub struct UriFetcher {
    client: reqwest::Client,
}

impl UriFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl MarkdownSource for UriFetcher {
    async fn convert(&self, uri: &str) -> Result<String> {
        let uri = promote_local_path(uri);

        if uri.starts_with("data:") {
            return decode_data_uri(&uri);
        }

        let parsed = Url::parse(&uri).map_err(|e| ExtractError::InvalidUriError {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {
                let response = self.client.get(parsed).send().await?;
                let response = response.error_for_status()?;
                Ok(response.text().await?)
            }
            "file" => {
                let path = parsed
                    .to_file_path()
                    .map_err(|_| ExtractError::InvalidUriError {
                        uri: uri.to_string(),
                        reason: "file URI does not name a local path".to_string(),
                    })?;
                Ok(tokio::fs::read_to_string(path).await?)
            }
            scheme => Err(ExtractError::UnsupportedSchemeError {
                scheme: scheme.to_string(),
            }),
        }
    }
}

/// A bare absolute path is a common way to hand over a local document; promote
/// it to a `file://` URI instead of rejecting it.
pub fn promote_local_path(uri: &str) -> String {
    let trimmed = uri.trim();
    if trimmed.starts_with('/') {
        format!("file://{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// RFC 2397 `data:[<mediatype>][;base64],<payload>`. Non-base64 payloads are
/// percent-encoded octets and are decoded before use.
fn decode_data_uri(uri: &str) -> Result<String> {
    static DATA_URI_RE: OnceLock<Regex> = OnceLock::new();
    let pattern = DATA_URI_RE
        .get_or_init(|| Regex::new(r"(?s)^data:(?P<meta>[^,]*),(?P<payload>.*)$").expect("valid regex"));

    let captures = pattern
        .captures(uri)
        .ok_or_else(|| ExtractError::InvalidUriError {
            uri: uri.to_string(),
            reason: "data URI is missing the ',' payload separator".to_string(),
        })?;

    let meta = &captures["meta"];
    let payload = &captures["payload"];

    if meta.ends_with(";base64") {
        let bytes = BASE64
            .decode(payload)
            .map_err(|e| ExtractError::InvalidUriError {
                uri: uri.to_string(),
                reason: format!("invalid base64 payload: {}", e),
            })?;
        String::from_utf8(bytes).map_err(|e| ExtractError::InvalidUriError {
            uri: uri.to_string(),
            reason: format!("payload is not UTF-8: {}", e),
        })
    } else {
        percent_decode_str(payload)
            .decode_utf8()
            .map(|decoded| decoded.into_owned())
            .map_err(|e| ExtractError::InvalidUriError {
                uri: uri.to_string(),
                reason: format!("payload is not UTF-8 after percent-decoding: {}", e),
            })
    }
}
