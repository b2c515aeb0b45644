//! Base URL normalization for the tracker endpoint.
//!
//! Team `.env` files tend to carry the Jira host in whatever shape it was
//! copied from the browser, so the configured value is cleaned up once here
//! before any request path is appended to it.

use url::{Position, Url};

use crate::config::ConfigError;

/// Turn a configured host into a base URL suitable for `format!("{base}/rest/...")`.
///
/// A missing scheme defaults to `https://`, and a trailing `/` (or a path that
/// is just `/`) is dropped so joined paths never contain `//`.
pub fn normalize_base_url(input: &str) -> Result<String, ConfigError> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(ConfigError::InvalidUrl {
      value: input.to_string(),
      reason: "host cannot be empty".to_string(),
    });
  }

  let lowered = trimmed.to_ascii_lowercase();
  let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).map_err(|e| ConfigError::InvalidUrl {
    value: input.to_string(),
    reason: e.to_string(),
  })?;

  if url.host().is_none() {
    return Err(ConfigError::InvalidUrl {
      value: input.to_string(),
      reason: "missing host".to_string(),
    });
  }

  let mut result = url[..Position::BeforePath].to_string();
  let path = url.path().trim_end_matches('/');
  result.push_str(path);

  Ok(result)
}
