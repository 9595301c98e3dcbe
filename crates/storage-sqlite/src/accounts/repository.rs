use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use gobank_core::accounts::{Account, AccountRepositoryTrait, AccountUpdate, NewAccount};
use gobank_core::errors::{Error, Result};

use super::model::{AccountDB, NewAccountDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::accounts;
use crate::schema::accounts::dsl::*;

/// Repository for managing account data in the database.
///
/// Reads use pooled connections; every write goes through the writer actor.
pub struct AccountRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        let row: NewAccountDB = new_account.into();

        self.writer
            .exec(move |conn| {
                let stored = diesel::insert_into(accounts::table)
                    .values(&row)
                    .returning(AccountDB::as_returning())
                    .get_result::<AccountDB>(conn)
                    .into_core()?;
                Ok(Account::try_from(stored)?)
            })
            .await
    }

    async fn update(&self, account_update: AccountUpdate) -> Result<Account> {
        account_update.validate()?;
        let account_id = account_update.account_id()?;
        let new_name = account_update.stored_name();

        self.writer
            .exec(move |conn| {
                let stored = diesel::update(accounts.find(account_id))
                    .set(name.eq(new_name))
                    .returning(AccountDB::as_returning())
                    .get_result::<AccountDB>(conn)
                    .optional()
                    .into_core()?
                    .ok_or_else(|| Error::account_not_found(account_id))?;
                Ok(Account::try_from(stored)?)
            })
            .await
    }

    async fn delete(&self, account_id: i64) -> Result<usize> {
        self.writer
            .exec(move |conn| diesel::delete(accounts.find(account_id)).execute(conn).into_core())
            .await
    }

    fn get_by_id(&self, account_id: i64) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;

        let stored = accounts
            .find(account_id)
            .select(AccountDB::as_select())
            .first::<AccountDB>(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| Error::account_not_found(account_id))?;

        Ok(Account::try_from(stored)?)
    }

    fn list(&self) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = accounts
            .select(AccountDB::as_select())
            .order(id.asc())
            .load::<AccountDB>(&mut conn)
            .into_core()?;

        let accounts_list = rows
            .into_iter()
            .map(Account::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(accounts_list)
    }
}
