//! Reading response snapshots from files or stdin.

use serde::de::DeserializeOwned;
use std::error::Error as StdError;
use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::core::config::data::path_display;

/// Errors raised while loading a snapshot for the mapper.
#[derive(Debug)]
pub enum InputError {
    /// The snapshot could not be read.
    Read {
        origin: String,
        source: std::io::Error,
    },
    /// The snapshot is not valid JSON for the expected response shape.
    Parse {
        origin: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Read { origin, source } => {
                write!(f, "Failed to read response from {origin}: {source}")
            }
            InputError::Parse { origin, source } => {
                write!(f, "Failed to parse response from {origin}: {source}")
            }
        }
    }
}

impl StdError for InputError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            InputError::Read { source, .. } => Some(source),
            InputError::Parse { source, .. } => Some(source),
        }
    }
}

/// `None` and `-` read stdin.
pub fn read_snapshot<T: DeserializeOwned>(input: Option<&Path>) -> Result<T, InputError> {
    match input.filter(|path| path.as_os_str() != "-") {
        Some(path) => {
            let origin = path_display(path);
            let contents = std::fs::read_to_string(path).map_err(|source| InputError::Read {
                origin: origin.clone(),
                source,
            })?;
            parse_snapshot(&contents, &origin)
        }
        None => {
            let mut contents = String::new();
            std::io::stdin()
                .read_to_string(&mut contents)
                .map_err(|source| InputError::Read {
                    origin: "stdin".to_string(),
                    source,
                })?;
            parse_snapshot(&contents, "stdin")
        }
    }
}

pub fn parse_snapshot<T: DeserializeOwned>(contents: &str, origin: &str) -> Result<T, InputError> {
    serde_json::from_str(contents).map_err(|source| InputError::Parse {
        origin: origin.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::response::TokenResponse;
    use tempfile::TempDir;

    #[test]
    fn reads_snapshot_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("token.json");
        std::fs::write(&path, r#"{"access_token": "tok1"}"#).expect("write should succeed");

        let token: TokenResponse =
            read_snapshot(Some(path.as_path())).expect("snapshot should load");

        assert_eq!(token.access_token.as_deref(), Some("tok1"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("missing.json");

        let err =
            read_snapshot::<TokenResponse>(Some(path.as_path())).expect_err("should fail");

        assert!(matches!(err, InputError::Read { .. }));
    }

    #[test]
    fn invalid_json_names_its_origin() {
        let err = parse_snapshot::<TokenResponse>("{not json", "token.json")
            .expect_err("should fail");

        assert!(matches!(err, InputError::Parse { .. }));
        assert!(err.to_string().contains("token.json"));
    }
}
