//! Email delivery settings, baked in at build time.

/// Every contact message goes to this address.
pub const CONTACT_EMAIL: &str = "ravitejneeli474@gmail.com";

pub const SERVICE_ID_VAR: &str = "DEVFOLIO_EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "DEVFOLIO_EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "DEVFOLIO_EMAILJS_PUBLIC_KEY";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{0} is blank")]
    Blank(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_email: String,
}

impl EmailConfig {
    /// Reads the values captured from the build environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("DEVFOLIO_EMAILJS_SERVICE_ID"),
            option_env!("DEVFOLIO_EMAILJS_TEMPLATE_ID"),
            option_env!("DEVFOLIO_EMAILJS_PUBLIC_KEY"),
        )
    }

    pub fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            service_id: required(SERVICE_ID_VAR, service_id)?,
            template_id: required(TEMPLATE_ID_VAR, template_id)?,
            public_key: required(PUBLIC_KEY_VAR, public_key)?,
            to_email: CONTACT_EMAIL.to_string(),
        })
    }
}

fn required(name: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    let value = value.ok_or(ConfigError::Missing(name))?.trim();
    if value.is_empty() {
        return Err(ConfigError::Blank(name));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_config() {
        let config = EmailConfig::from_values(Some("svc"), Some(" tpl "), Some("key")).unwrap();
        assert_eq!(config.service_id, "svc");
        assert_eq!(config.template_id, "tpl");
        assert_eq!(config.public_key, "key");
        assert_eq!(config.to_email, CONTACT_EMAIL);
    }

    #[test]
    fn test_missing_and_blank_values() {
        assert_eq!(
            EmailConfig::from_values(None, Some("tpl"), Some("key")),
            Err(ConfigError::Missing(SERVICE_ID_VAR))
        );
        assert_eq!(
            EmailConfig::from_values(Some("svc"), Some("  "), Some("key")),
            Err(ConfigError::Blank(TEMPLATE_ID_VAR))
        );
        assert_eq!(
            ConfigError::Missing(PUBLIC_KEY_VAR).to_string(),
            "DEVFOLIO_EMAILJS_PUBLIC_KEY is not set"
        );
    }
}
