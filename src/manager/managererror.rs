use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error("definition has an empty name")]
    EmptyName,
    #[error("invalid holiday rule '{name}': {reason}")]
    InvalidHolidayRule {
        name: String,
        reason: String
    }
}

impl ManagerError {
    pub fn invalid_rule(name: &str, reason: impl Into<String>) -> ManagerError {
        ManagerError::InvalidHolidayRule {
            name: name.to_owned(),
            reason: reason.into()
        }
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
    where T: DeserializeOwned {
    Ok(serde_json::from_value(json_value)?)
}
