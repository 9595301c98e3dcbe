//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations of this trait handle the persistence of account data.
/// The store owns identity assignment: every created account gets an id the
/// store has never handed out before.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Creates a new account, assigning its id and creation timestamp.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Replaces the name of an existing account.
    ///
    /// Fails with `Error::NotFound` when no account has the given id.
    async fn update(&self, account_update: AccountUpdate) -> Result<Account>;

    /// Deletes an account by its ID.
    ///
    /// Returns the number of deleted records; a missing id yields 0.
    async fn delete(&self, account_id: i64) -> Result<usize>;

    /// Retrieves an account by its ID.
    fn get_by_id(&self, account_id: i64) -> Result<Account>;

    /// Lists all accounts ordered by id.
    fn list(&self) -> Result<Vec<Account>>;
}

/// Trait defining the contract for Account service operations.
///
/// The service layer coordinates repository calls and applies the
/// missing-record policy for deletes.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account with validation.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Updates the name of an existing account.
    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account>;

    /// Deletes an account.
    async fn delete_account(&self, account_id: i64) -> Result<()>;

    /// Retrieves an account by ID.
    fn get_account(&self, account_id: i64) -> Result<Account>;

    /// Lists all accounts.
    fn list_accounts(&self) -> Result<Vec<Account>>;
}
