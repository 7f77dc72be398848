//! Page configuration.
//!
//! Every field has a default, so a page only needs to override what differs.
//! The browser entry point reads overrides from an optional
//! `<script type="application/json" id="userbar-config">` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_LOG_LEVEL, LOGOUT_ENDPOINT, LOGOUT_SELECTOR, RELOAD_DELAY_MS, USER_AVATAR_SELECTOR,
    USER_INFO_ENDPOINT, USER_NAME_SELECTOR,
};
use crate::error::ConfigError;
use crate::notification::NotificationTimings;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub user_endpoint: String,
    pub logout_endpoint: String,
    pub user_name_selector: String,
    pub user_avatar_selector: String,
    pub logout_selector: String,
    /// Wait between an accepted logout and the page reload.
    pub reload_delay_ms: u32,
    pub notification: NotificationTimings,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            user_endpoint: USER_INFO_ENDPOINT.to_owned(),
            logout_endpoint: LOGOUT_ENDPOINT.to_owned(),
            user_name_selector: USER_NAME_SELECTOR.to_owned(),
            user_avatar_selector: USER_AVATAR_SELECTOR.to_owned(),
            logout_selector: LOGOUT_SELECTOR.to_owned(),
            reload_delay_ms: RELOAD_DELAY_MS,
            notification: NotificationTimings::default(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON object of overrides on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidLogLevel`] for an unrecognized level name.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.log_level()?;
        Ok(config)
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if `log_level` is not a
    /// `log::Level` name.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
