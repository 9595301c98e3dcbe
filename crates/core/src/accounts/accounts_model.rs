//! Account domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accounts_constants::ACCOUNT_NAME_MAX_LEN;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing an account in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub name: String,
    /// Opaque balance, no currency unit and no sign constraint
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

impl NewAccount {
    pub fn new(name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }

    /// Returns the name as it will be stored.
    pub fn stored_name(&self) -> String {
        truncate_name(&self.name)
    }
}

/// Input model for updating an existing account. Only the name can change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub id: Option<i64>,
    pub name: String,
}

impl AccountUpdate {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Validates the account update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        Ok(())
    }

    /// Returns the target id, failing when it was not provided.
    pub fn account_id(&self) -> Result<i64> {
        self.id
            .ok_or_else(|| Error::Validation(ValidationError::MissingField("id".to_string())))
    }

    /// Returns the name as it will be stored.
    pub fn stored_name(&self) -> String {
        truncate_name(&self.name)
    }
}

/// Truncates a name to [`ACCOUNT_NAME_MAX_LEN`] characters.
pub fn truncate_name(name: &str) -> String {
    match name.char_indices().nth(ACCOUNT_NAME_MAX_LEN) {
        Some((byte_idx, _)) => name[..byte_idx].to_string(),
        None => name.to_string(),
    }
}
