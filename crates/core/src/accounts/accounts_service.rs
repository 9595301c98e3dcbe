use log::{debug, warn};
use std::sync::Arc;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing accounts
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
    missing_delete_ok: bool,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self {
            repository,
            missing_delete_ok: false,
        }
    }

    /// When enabled, deleting an id that does not exist succeeds without effect
    /// instead of failing with `Error::NotFound`.
    pub fn with_missing_delete_ok(mut self, missing_delete_ok: bool) -> Self {
        self.missing_delete_ok = missing_delete_ok;
        self
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        debug!("Creating account '{}'", new_account.name);
        self.repository.create(new_account).await
    }

    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account> {
        debug!("Updating account {:?}", account_update.id);
        self.repository.update(account_update).await
    }

    fn get_account(&self, account_id: i64) -> Result<Account> {
        self.repository.get_by_id(account_id)
    }

    fn list_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list()
    }

    async fn delete_account(&self, account_id: i64) -> Result<()> {
        debug!("Deleting account with id {}", account_id);
        let deleted = self.repository.delete(account_id).await?;
        if deleted == 0 {
            if self.missing_delete_ok {
                warn!("Delete of missing account {} ignored", account_id);
                return Ok(());
            }
            return Err(Error::account_not_found(account_id));
        }
        Ok(())
    }
}
