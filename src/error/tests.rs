//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod pulse_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let pulse_error = PulseError::from(json_error);

        match pulse_error {
            PulseError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let pulse_error = PulseError::from(io_error);

        match pulse_error {
            PulseError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_input_helper() {
        let error = PulseError::invalid_input("expected a JSON array");

        match &error {
            PulseError::InvalidInput { message } => assert_eq!(message, "expected a JSON array"),
            _ => panic!("Expected InvalidInput error variant"),
        }
        assert_eq!(error.to_string(), "Invalid input: expected a JSON array");
    }

    #[test]
    fn test_unknown_stat_error() {
        let error = PulseError::UnknownStat {
            name: "Gaols".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Unknown statistic"));
        assert!(error_string.contains("Gaols"));
    }

    #[test]
    fn test_player_not_found_error() {
        let error = PulseError::PlayerNotFound {
            name: "Bukayo Saka".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Player not found"));
        assert!(error_string.contains("Bukayo Saka"));
    }

    #[test]
    fn test_invalid_api_url_error() {
        let error = PulseError::InvalidApiUrl {
            url: "ftp://example.com".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("ftp://example.com"));
        assert!(error_string.contains("http://"));
    }

    #[test]
    fn test_error_is_debug() {
        let error = PulseError::invalid_input("bad payload");
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("InvalidInput"));
    }
}
