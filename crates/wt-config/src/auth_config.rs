use crate::{ConfigError, ConfigErrorResult, MIN_SIGNING_KEY_CHARS};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Process-wide secret used to sign API keys. Required: the server
    /// refuses to start without it, rather than failing on first use.
    pub signing_key: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.signing_key {
            None => Err(ConfigError::auth(
                "auth.signing_key must be set (config.toml or WT_AUTH_SIGNING_KEY)",
            )),
            Some(key) if key.len() < MIN_SIGNING_KEY_CHARS => Err(ConfigError::auth(format!(
                "auth.signing_key must be at least {} characters, got {}",
                MIN_SIGNING_KEY_CHARS,
                key.len()
            ))),
            Some(_) => Ok(()),
        }
    }

    /// The validated signing key bytes.
    ///
    /// Panics when called before `validate()`; startup order guarantees
    /// validation happens first.
    pub fn signing_key_bytes(&self) -> &[u8] {
        self.signing_key
            .as_deref()
            .expect("auth config validated at startup")
            .as_bytes()
    }
}
