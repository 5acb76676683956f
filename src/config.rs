//! Configuration management for toprated.
//!
//! Values come from environment variables, which may be provided through a
//! `.env` file. Two files are read, earlier ones winning because `dotenv`
//! never overrides a variable that is already set:
//! 1. Environment variables of the process
//! 2. `.env` in the local data directory (`toprated/.env`)
//! 3. `.env` in the working directory
//!
//! Settings:
//! - `DISCOGS_API_TOKEN` - personal access token (required)
//! - `DISCOGS_API_URL` - API root, defaults to `https://api.discogs.com`
//! - `DISCOGS_REQUEST_INTERVAL_MS` - minimum spacing between requests,
//!   defaults to 1500

use std::{env, path::PathBuf, time::Duration};

use crate::{
    discogs::{ClientConfig, client::DEFAULT_API_URL},
    error::{Error, Res},
};

/// The catalog allows 60 authenticated requests per minute.
pub const DEFAULT_REQUEST_INTERVAL_MS: u64 = 1500;

/// Loads `.env` files from the local data directory and the working directory.
///
/// Missing files are fine; a file that exists but cannot be parsed is an error.
pub async fn load_env() -> Res<()> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| {
            Error::configuration(format!("Cannot read {}: {}", path.display(), e))
        })?;
    }

    // the working directory file is optional
    let _ = dotenv::dotenv();
    Ok(())
}

/// Directory for the `.env` file and the stored style list.
///
/// - Linux: `~/.local/share/toprated`
/// - macOS: `~/Library/Application Support/toprated`
/// - Windows: `%LOCALAPPDATA%/toprated`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("toprated");
    path
}

/// The personal access token from `DISCOGS_API_TOKEN`.
///
/// # Errors
///
/// Returns a configuration error if the variable is unset or blank.
pub fn discogs_token() -> Res<String> {
    parse_token(env::var("DISCOGS_API_TOKEN").ok())
}

/// Catalog root from `DISCOGS_API_URL`, falling back to [`DEFAULT_API_URL`].
pub fn discogs_api_url() -> String {
    env::var("DISCOGS_API_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Minimum spacing between requests, from `DISCOGS_REQUEST_INTERVAL_MS`.
///
/// Defaults to [`DEFAULT_REQUEST_INTERVAL_MS`] when unset.
///
/// # Errors
///
/// Returns a configuration error if the value is not a whole number of milliseconds.
pub fn request_interval() -> Res<Duration> {
    parse_interval_ms(env::var("DISCOGS_REQUEST_INTERVAL_MS").ok())
}

/// Client settings assembled from the environment.
pub fn client_config() -> Res<ClientConfig> {
    Ok(ClientConfig::new(discogs_api_url(), discogs_token()?))
}

fn parse_token(value: Option<String>) -> Res<String> {
    value
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            Error::configuration(
                "DISCOGS_API_TOKEN must be set. Create a personal access token in your Discogs developer settings.",
            )
        })
}

fn parse_interval_ms(value: Option<String>) -> Res<Duration> {
    match value {
        None => Ok(Duration::from_millis(DEFAULT_REQUEST_INTERVAL_MS)),
        Some(raw) => raw.trim().parse::<u64>().map(Duration::from_millis).map_err(|_| {
            Error::configuration(format!(
                "DISCOGS_REQUEST_INTERVAL_MS must be a number of milliseconds, got '{}'",
                raw
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_a_configuration_error() {
        assert!(parse_token(None).unwrap_err().is_configuration());
        assert!(parse_token(Some("  ".into())).is_err());
        assert_eq!(parse_token(Some(" abc ".into())).unwrap(), "abc");
    }

    #[test]
    fn interval_defaults_and_parses() {
        assert_eq!(parse_interval_ms(None).unwrap(), Duration::from_millis(1500));
        assert_eq!(
            parse_interval_ms(Some("1000".into())).unwrap(),
            Duration::from_secs(1)
        );
        assert!(parse_interval_ms(Some("fast".into())).is_err());
    }
}
