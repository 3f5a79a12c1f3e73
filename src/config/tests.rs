#[cfg(test)]
mod tests {
    use crate::config::{Config, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, TEMPERATURE};
    use crate::error::AdapterError;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(config.max_tokens, 100);
        assert_eq!(config.temperature, TEMPERATURE);
        assert!(config.prompt.is_empty());
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_fixed_temperature() {
        assert_eq!(TEMPERATURE, 0.2);
    }

    #[test]
    fn test_validate_empty_api_key() {
        let config = Config::default();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, AdapterError::MissingApiKey));
        assert_eq!(
            err.to_string(),
            "GOOGLE_API_KEY environment variable not set"
        );
    }

    #[test]
    fn test_validate_blank_api_key() {
        let config = Config {
            api_key: "   ".to_string(),
            ..Config::default()
        };

        assert!(matches!(
            config.validate(),
            Err(AdapterError::MissingApiKey)
        ));
    }

    #[test]
    fn test_validate_present_api_key() {
        let config = Config {
            api_key: "abc123".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_ok());
    }
}
