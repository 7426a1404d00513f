use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Error types for the fallible edges of the crate
// ============================================================================
//
// The passing-semantics operations themselves never fail. Errors only come
// from loading a scenario file, writing the narration, the checked map swap
// and parsing demo names.

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to read scenario file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scenario file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Missing key '{key}' in mapping")]
    MissingKey { key: String },

    #[error("Unknown demo '{name}' (expected one of: {expected})")]
    UnknownDemo { name: String, expected: String },
}

impl DemoError {
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub fn unknown_demo(name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::UnknownDemo {
            name: name.into(),
            expected: expected.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let err = DemoError::missing_key("cherry");
        assert_eq!(err.to_string(), "Missing key 'cherry' in mapping");
    }

    #[test]
    fn test_unknown_demo_message() {
        let err = DemoError::unknown_demo("teleport", "swap-naive, slice");
        assert!(err.to_string().contains("'teleport'"));
        assert!(err.to_string().contains("swap-naive, slice"));
    }

    #[test]
    fn test_config_error_keeps_source() {
        let source = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err = DemoError::Config {
            path: PathBuf::from("scenario.toml"),
            source,
        };
        assert!(err.to_string().starts_with("Invalid scenario file 'scenario.toml'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
