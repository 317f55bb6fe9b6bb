use std::env;

const MIN_SECRET_LENGTH: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least {MIN_SECRET_LENGTH} characters long for HS256")]
    SecretTooShort,

    #[error("Invalid {0} value")]
    InvalidValue(&'static str),
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub access_token_expiry: i64,         // seconds
    pub confirmation_token_expiry_days: i64,
}

impl JwtConfig {
    fn parse_number(key: &'static str, default: i64) -> Result<i64, JwtConfigError> {
        match env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| JwtConfigError::InvalidValue(key)),
            Err(_) => Ok(default),
        }
    }

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;

        if secret_key.len() < MIN_SECRET_LENGTH {
            return Err(JwtConfigError::SecretTooShort);
        }

        let access_token_expiry = Self::parse_number("JWT_ACCESS_EXPIRY", 86_400)?;
        if access_token_expiry <= 0 {
            return Err(JwtConfigError::InvalidValue("JWT_ACCESS_EXPIRY"));
        }

        let confirmation_token_expiry_days =
            Self::parse_number("CONFIRMATION_TOKEN_EXPIRY_DAYS", 3)?;
        if confirmation_token_expiry_days <= 0 {
            return Err(JwtConfigError::InvalidValue(
                "CONFIRMATION_TOKEN_EXPIRY_DAYS",
            ));
        }

        Ok(Self {
            secret_key,
            access_token_expiry,
            confirmation_token_expiry_days,
        })
    }
}
