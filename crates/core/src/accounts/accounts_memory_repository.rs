//! Process-lifetime account store.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::accounts_constants::FIRST_ACCOUNT_ID;
use super::accounts_model::{Account, AccountUpdate, NewAccount};
use super::accounts_traits::AccountRepositoryTrait;
use crate::errors::{Error, Result};

struct MemoryState {
    next_id: i64,
    accounts: BTreeMap<i64, Account>,
}

/// Account repository that keeps every record in memory.
///
/// Id assignment and insertion happen under one write guard, so concurrent
/// creates never share an id. Ids are not reused after a delete.
pub struct InMemoryAccountRepository {
    state: RwLock<MemoryState>,
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: FIRST_ACCOUNT_ID,
                accounts: BTreeMap::new(),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|_| Error::Unexpected("account store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|_| Error::Unexpected("account store lock poisoned".to_string()))
    }
}

#[async_trait]
impl AccountRepositoryTrait for InMemoryAccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        let mut state = self.write()?;
        let account = Account {
            id: state.next_id,
            name: new_account.stored_name(),
            balance: new_account.balance,
            created_at: Utc::now(),
        };
        state.next_id += 1;
        state.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account_update: AccountUpdate) -> Result<Account> {
        account_update.validate()?;
        let account_id = account_update.account_id()?;

        let mut state = self.write()?;
        let account = state
            .accounts
            .get_mut(&account_id)
            .ok_or_else(|| Error::account_not_found(account_id))?;
        account.name = account_update.stored_name();
        Ok(account.clone())
    }

    async fn delete(&self, account_id: i64) -> Result<usize> {
        let mut state = self.write()?;
        Ok(usize::from(state.accounts.remove(&account_id).is_some()))
    }

    fn get_by_id(&self, account_id: i64) -> Result<Account> {
        self.read()?
            .accounts
            .get(&account_id)
            .cloned()
            .ok_or_else(|| Error::account_not_found(account_id))
    }

    fn list(&self) -> Result<Vec<Account>> {
        Ok(self.read()?.accounts.values().cloned().collect())
    }
}
