use crate::app::AppError;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub default_id_tag: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("CSMS_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::config("CSMS_BASE_URL is required"))?;

        let api_key = lookup("CSMS_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::config("CSMS_API_KEY is required"))?;

        Ok(Self {
            base_url,
            api_key,
            request_timeout_secs: parse_or_default(&lookup, "REQUEST_TIMEOUT_SECS", 15_u64)?,
            connect_timeout_secs: parse_or_default(&lookup, "CONNECT_TIMEOUT_SECS", 5_u64)?,
            default_id_tag: lookup("DEFAULT_ID_TAG")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "DEMO_IDTAG".to_string()),
        })
    }
}

fn parse_or_default<T, F>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr + Copy,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::config(format!("{key} must be a valid number"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::ClientConfig;

    fn minimal_lookup(key: &str) -> Option<String> {
        match key {
            "CSMS_BASE_URL" => Some("http://controller.local:8080".to_string()),
            "CSMS_API_KEY" => Some("changeme-123".to_string()),
            _ => None,
        }
    }

    #[test]
    fn rejects_missing_base_url() {
        let result = ClientConfig::from_lookup(|key| match key {
            "CSMS_API_KEY" => Some("changeme-123".to_string()),
            _ => None,
        });
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid configuration: CSMS_BASE_URL is required"
        );
    }

    #[test]
    fn rejects_missing_api_key() {
        let result = ClientConfig::from_lookup(|key| match key {
            "CSMS_BASE_URL" => Some("http://controller.local:8080".to_string()),
            _ => None,
        });
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid configuration: CSMS_API_KEY is required"
        );
    }

    #[test]
    fn applies_defaults_for_optional_fields() {
        let config = ClientConfig::from_lookup(minimal_lookup).expect("config should be valid");

        assert_eq!(config.base_url, "http://controller.local:8080");
        assert_eq!(config.api_key, "changeme-123");
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.connect_timeout_secs, 5);
        assert_eq!(config.default_id_tag, "DEMO_IDTAG");
    }

    #[test]
    fn strips_trailing_slash_from_base_url() {
        let config = ClientConfig::from_lookup(|key| match key {
            "CSMS_BASE_URL" => Some("http://controller.local:8080/".to_string()),
            other => minimal_lookup(other),
        })
        .expect("config should be valid");

        assert_eq!(config.base_url, "http://controller.local:8080");
    }

    #[test]
    fn rejects_invalid_numeric_values() {
        let result = ClientConfig::from_lookup(|key| match key {
            "REQUEST_TIMEOUT_SECS" => Some("abc".to_string()),
            other => minimal_lookup(other),
        });

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid configuration: REQUEST_TIMEOUT_SECS must be a valid number"
        );
    }
}
