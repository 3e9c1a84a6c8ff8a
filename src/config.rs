//! Process configuration loaded from the environment.
//!
//! A deployment provides three values: the chat transport token, a
//! comma-separated list of administrator chat ids, and a `PostgreSQL`
//! connection string. A `.env` file in the working directory is honoured
//! when present. The administrator list is turned into an [`AdminRoster`]
//! here and injected into the administrative surface at construction; no
//! ambient global carries it.

use crate::assignment::domain::AdminRoster;
use crate::player::domain::ChatId;
use thiserror::Error;

/// Environment variable naming the chat transport token.
const BOT_TOKEN_VAR: &str = "BOT_TOKEN";

/// Environment variable listing administrator chat ids, comma-separated.
const ADMIN_CHAT_IDS_VAR: &str = "ADMIN_CHAT_IDS";

/// Environment variable holding the `PostgreSQL` connection string.
const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Errors raised while reading process configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("missing required environment variable: {0}")]
    MissingVariable(&'static str),

    /// An administrator chat id is not a valid integer.
    #[error("invalid administrator chat id: {0}")]
    InvalidAdminChatId(String),
}

/// Process configuration for a quizdrop deployment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    bot_token: String,
    admin_chat_ids: Vec<ChatId>,
    database_url: String,
}

impl ServiceConfig {
    /// Loads configuration from the environment, honouring a `.env` file.
    ///
    /// An absent `ADMIN_CHAT_IDS` yields an empty roster: every
    /// administrative operation is then denied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] when the token or database
    /// URL is unset, or [`ConfigError::InvalidAdminChatId`] when an
    /// administrator id does not parse as an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let bot_token = require_var(BOT_TOKEN_VAR)?;
        let database_url = require_var(DATABASE_URL_VAR)?;
        let admin_raw = std::env::var(ADMIN_CHAT_IDS_VAR).unwrap_or_default();
        let admin_chat_ids = parse_admin_chat_ids(&admin_raw)?;

        Ok(Self {
            bot_token,
            admin_chat_ids,
            database_url,
        })
    }

    /// Returns the chat transport token.
    #[must_use]
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    /// Returns the configured administrator chat ids.
    #[must_use]
    pub fn admin_chat_ids(&self) -> &[ChatId] {
        &self.admin_chat_ids
    }

    /// Returns the `PostgreSQL` connection string.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Builds the administrator roster injected into the admin surface.
    #[must_use]
    pub fn admin_roster(&self) -> AdminRoster {
        AdminRoster::new(self.admin_chat_ids.iter().copied())
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVariable(name))
}

fn parse_admin_chat_ids(raw: &str) -> Result<Vec<ChatId>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map(ChatId::new)
                .map_err(|_| ConfigError::InvalidAdminChatId(part.to_owned()))
        })
        .collect()
}
