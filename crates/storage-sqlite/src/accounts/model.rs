//! Database model for accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;
use gobank_core::accounts::{Account, NewAccount};

/// Database model for accounts
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: i64,
    pub name: String,
    /// Decimal text so no precision is lost in SQLite
    pub balance: String,
    pub created_at: NaiveDateTime,
}

/// Row inserted on create; the id comes from the table sequence.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
pub struct NewAccountDB {
    pub name: String,
    pub balance: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<AccountDB> for Account {
    type Error = StorageError;

    fn try_from(db: AccountDB) -> Result<Self, Self::Error> {
        let balance = Decimal::from_str(&db.balance).map_err(|e| {
            StorageError::InvalidValue(format!(
                "balance '{}' of account {}: {}",
                db.balance, db.id, e
            ))
        })?;
        Ok(Self {
            id: db.id,
            name: db.name,
            balance,
            created_at: db.created_at.and_utc(),
        })
    }
}

impl From<NewAccount> for NewAccountDB {
    fn from(domain: NewAccount) -> Self {
        Self {
            name: domain.stored_name(),
            balance: domain.balance.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
