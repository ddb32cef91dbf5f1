use std::env;

use chrono::Duration;

use crate::constants::{
  DEFAULT_COOKIE_PATH, DEFAULT_PROTOCOL, ENV_COOKIE_LIFETIME_SECS, ENV_COOKIE_PATH,
  ENV_DEFAULT_PROTOCOL, MAX_EXPIRY_OFFSET_SECS, SECONDS_30_DAYS,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseConfig {
  pub default_protocol: String, // status line protocol when the request never declared one
  pub cookie_lifetime: Duration, // default cookie expiry, measured from now
  pub cookie_path: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
  BadCookieLifetime(String), // not a whole number of seconds, or too far out
}

impl Default for ResponseConfig {
  fn default() -> ResponseConfig {
    ResponseConfig {
      default_protocol: DEFAULT_PROTOCOL.to_owned(),
      cookie_lifetime: Duration::seconds(SECONDS_30_DAYS),
      cookie_path: DEFAULT_COOKIE_PATH.to_owned(),
    }
  }
}

impl ResponseConfig {
  // overrides defaults with any WEBE_* variables found in the environment
  pub fn from_env() -> Result<ResponseConfig, ConfigError> {
    return ResponseConfig::from_lookup(|key| env::var(key).ok());
  }

  pub fn from_lookup<F>(lookup: F) -> Result<ResponseConfig, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = ResponseConfig::default();
    if let Some(protocol) = lookup(ENV_DEFAULT_PROTOCOL) {
      config.default_protocol = protocol;
    }
    if let Some(lifetime) = lookup(ENV_COOKIE_LIFETIME_SECS) {
      match lifetime.trim().parse::<i64>() {
        Ok(secs) if (-MAX_EXPIRY_OFFSET_SECS..=MAX_EXPIRY_OFFSET_SECS).contains(&secs) => {
          config.cookie_lifetime = Duration::seconds(secs)
        }
        _ => return Err(ConfigError::BadCookieLifetime(lifetime)),
      }
    }
    if let Some(path) = lookup(ENV_COOKIE_PATH) {
      config.cookie_path = path;
    }
    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  #[test]
  fn defaults() {
    let config = ResponseConfig::default();
    assert_eq!(config.default_protocol, "HTTP/1.0");
    assert_eq!(config.cookie_lifetime, Duration::days(30));
    assert_eq!(config.cookie_path, "/");
  }

  #[test]
  fn lookup_overrides() {
    let mut vars = HashMap::new();
    vars.insert(ENV_DEFAULT_PROTOCOL, "HTTP/1.1".to_owned());
    vars.insert(ENV_COOKIE_LIFETIME_SECS, "60".to_owned());
    let config = ResponseConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();
    assert_eq!(config.default_protocol, "HTTP/1.1");
    assert_eq!(config.cookie_lifetime, Duration::seconds(60));
    assert_eq!(config.cookie_path, "/");
  }

  #[test]
  fn bad_lifetime() {
    let result = ResponseConfig::from_lookup(|key| match key {
      ENV_COOKIE_LIFETIME_SECS => Some("a month".to_owned()),
      _ => None,
    });
    assert_eq!(result, Err(ConfigError::BadCookieLifetime("a month".to_owned())));
  }

  #[test]
  fn lifetime_out_of_range() {
    for secs in &["9223372036854775807", "-9223372036854775808", "100000000000000"] {
      let result = ResponseConfig::from_lookup(|key| match key {
        ENV_COOKIE_LIFETIME_SECS => Some(secs.to_string()),
        _ => None,
      });
      assert_eq!(result, Err(ConfigError::BadCookieLifetime(secs.to_string())));
    }
  }
}
