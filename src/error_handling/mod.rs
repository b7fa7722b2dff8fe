//! Error handling.
//!
//! Error types are split by where they stop:
//! - **Initialization**: logger and listener set-up; abort start-up
//! - **Input validation**: malformed request bodies; HTTP 400
//! - **Resolution**: per-domain DNS failures; captured as result data
//! - **Config load**: provider table problems; degrade to an empty table

mod types;

pub use types::{ConfigLoadError, InitializationError, InputValidationError, ResolutionError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolution_error_display_is_raw_message() {
        // The message is stored verbatim in dnsResponse, so no prefix is added
        let err = ResolutionError::Lookup("no record found for Query".to_string());
        assert_eq!(err.to_string(), "no record found for Query");
    }

    #[test]
    fn test_resolution_error_no_records_names_domain() {
        let err = ResolutionError::NoRecords("example.com".to_string());
        assert_eq!(err.to_string(), "No NS records found for example.com");
    }

    #[test]
    fn test_input_validation_error_hides_reason() {
        let err = InputValidationError::new("`domains` is not an array");
        assert_eq!(err.to_string(), "Invalid input");
        assert_eq!(err.reason, "`domains` is not an array");
    }

    #[test]
    fn test_config_load_error_read_includes_path() {
        let err = ConfigLoadError::Read {
            path: PathBuf::from("/tmp/providers.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/providers.json"));
        assert!(msg.contains("not found"));
    }
}
