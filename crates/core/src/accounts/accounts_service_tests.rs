//! Tests for AccountService over the in-memory store.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal_macros::dec;

use crate::accounts::{
    AccountService, AccountServiceTrait, AccountUpdate, InMemoryAccountRepository, NewAccount,
};
use crate::errors::Error;

fn create_service() -> AccountService {
    AccountService::new(Arc::new(InMemoryAccountRepository::new()))
}

#[tokio::test]
async fn test_create_returns_stored_record() {
    let service = create_service();
    let started = Utc::now();

    let account = service
        .create_account(NewAccount::new("Alice", dec!(100)))
        .await
        .unwrap();

    assert_eq!(account.name, "Alice");
    assert_eq!(account.balance, dec!(100));
    assert!(account.id >= 0);
    assert!(account.created_at >= started);
    assert_eq!(service.get_account(account.id).unwrap(), account);
}

#[tokio::test]
async fn test_create_accepts_blank_and_negative() {
    let service = create_service();
    let empty = service
        .create_account(NewAccount::new("", dec!(-50)))
        .await
        .unwrap();
    assert_eq!(empty.name, "");
    assert_eq!(empty.balance, dec!(-50));

    let spaces = service
        .create_account(NewAccount::new("   ", dec!(1)))
        .await
        .unwrap();
    assert_eq!(spaces.name, "   ");
    assert_eq!(service.list_accounts().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_missing_account_is_not_found() {
    let service = create_service();
    service
        .create_account(NewAccount::new("Alice", dec!(1)))
        .await
        .unwrap();

    for missing in [0, 2, 99, -1] {
        assert!(matches!(
            service.get_account(missing),
            Err(Error::NotFound(_))
        ));
    }
}

#[tokio::test]
async fn test_list_returns_every_created_account_once() {
    let service = create_service();
    let mut created = Vec::new();
    for i in 0..5 {
        created.push(
            service
                .create_account(NewAccount::new(format!("acct-{i}"), dec!(10)))
                .await
                .unwrap(),
        );
    }

    let listed = service.list_accounts().unwrap();
    assert_eq!(listed, created);

    let ids: HashSet<i64> = listed.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_list_on_empty_store_is_empty() {
    let service = create_service();
    assert!(service.list_accounts().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_changes_only_name() {
    let service = create_service();
    let original = service
        .create_account(NewAccount::new("Alice", dec!(42.5)))
        .await
        .unwrap();

    let updated = service
        .update_account(AccountUpdate::new(original.id, "Alicia"))
        .await
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.balance, original.balance);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(service.get_account(original.id).unwrap(), updated);
}

#[tokio::test]
async fn test_update_missing_account_is_not_found() {
    let service = create_service();
    let err = service
        .update_account(AccountUpdate::new(12, "Ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(service.list_accounts().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let service = create_service();
    let account = service
        .create_account(NewAccount::new("Alice", dec!(1)))
        .await
        .unwrap();
    let keeper = service
        .create_account(NewAccount::new("Bob", dec!(2)))
        .await
        .unwrap();

    service.delete_account(account.id).await.unwrap();

    assert!(matches!(
        service.get_account(account.id),
        Err(Error::NotFound(_))
    ));
    assert_eq!(service.list_accounts().unwrap(), vec![keeper]);
}

#[tokio::test]
async fn test_delete_twice_reports_not_found_and_keeps_store_intact() {
    let service = create_service();
    let account = service
        .create_account(NewAccount::new("Alice", dec!(1)))
        .await
        .unwrap();
    let keeper = service
        .create_account(NewAccount::new("Bob", dec!(2)))
        .await
        .unwrap();

    service.delete_account(account.id).await.unwrap();
    let err = service.delete_account(account.id).await.unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(service.list_accounts().unwrap(), vec![keeper]);
}

#[tokio::test]
async fn test_lenient_delete_ignores_missing_ids() {
    let service = create_service().with_missing_delete_ok(true);
    service.delete_account(404).await.unwrap();
    assert!(service.list_accounts().unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_creates_produce_distinct_records() {
    let service = Arc::new(create_service());

    let tasks = (0..64).map(|i| {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .create_account(NewAccount::new(format!("acct-{i}"), dec!(1)))
                .await
        })
    });
    let created: Vec<_> = futures::future::join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    let ids: HashSet<i64> = created.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), 64);
    assert_eq!(service.list_accounts().unwrap().len(), 64);
    for account in &created {
        assert_eq!(&service.get_account(account.id).unwrap(), account);
    }
}
