//! Accounts module - domain models, services, traits and the in-memory store.

mod accounts_constants;
mod accounts_memory_repository;
mod accounts_model;
mod accounts_service;
mod accounts_traits;

#[cfg(test)]
mod accounts_model_tests;
#[cfg(test)]
mod accounts_service_tests;

// Re-export the public interface
pub use accounts_constants::*;
pub use accounts_memory_repository::InMemoryAccountRepository;
pub use accounts_model::{truncate_name, Account, AccountUpdate, NewAccount};
pub use accounts_service::AccountService;
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
