//! Tests for account domain models.

use crate::accounts::{truncate_name, Account, AccountUpdate, NewAccount, ACCOUNT_NAME_MAX_LEN};
use crate::errors::{Error, ValidationError};
use rust_decimal::Decimal;
use std::str::FromStr;
use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

fn create_test_account() -> Account {
    Account {
        id: 7,
        name: "Alice".to_string(),
        balance: dec!(100),
        created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    }
}

// ==================== Serialization ====================

#[test]
fn test_account_serializes_with_camel_case_fields() {
    let json = serde_json::to_value(create_test_account()).unwrap();

    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["balance"].to_string(), "100");
    assert_eq!(json["createdAt"], "2024-01-02T03:04:05Z");
    assert!(json.get("created_at").is_none());
}

#[test]
fn test_new_account_accepts_integer_and_fractional_balances() {
    let whole: NewAccount = serde_json::from_str(r#"{"name":"Alice","balance":100}"#).unwrap();
    assert_eq!(whole.balance, dec!(100));

    let fractional: NewAccount =
        serde_json::from_str(r#"{"name":"Bob","balance":-12.5}"#).unwrap();
    assert_eq!(fractional.balance, dec!(-12.5));
}

#[test]
fn test_balance_keeps_every_digit_through_json() {
    let parsed: NewAccount =
        serde_json::from_str(r#"{"name":"Big","balance":12345678901234567.89}"#).unwrap();
    assert_eq!(
        parsed.balance,
        Decimal::from_str("12345678901234567.89").unwrap()
    );

    let account = Account {
        balance: parsed.balance,
        ..create_test_account()
    };
    let text = serde_json::to_string(&account).unwrap();
    assert!(text.contains(r#""balance":12345678901234567.89"#), "{text}");
}

#[test]
fn test_new_account_rejects_non_numeric_balance() {
    let parsed = serde_json::from_str::<NewAccount>(r#"{"name":"Alice","balance":"lots"}"#);
    assert!(parsed.is_err());
}

#[test]
fn test_new_account_rejects_missing_balance() {
    let parsed = serde_json::from_str::<NewAccount>(r#"{"name":"Alice"}"#);
    assert!(parsed.is_err());
}

#[test]
fn test_account_update_parses_id_and_name() {
    let update: AccountUpdate = serde_json::from_str(r#"{"id":3,"name":"Carol"}"#).unwrap();
    assert_eq!(update.id, Some(3));
    assert_eq!(update.name, "Carol");
}

// ==================== Validation ====================

#[test]
fn test_account_update_blank_name_is_valid() {
    assert!(AccountUpdate::new(3, "").validate().is_ok());
    assert!(AccountUpdate::new(3, "   ").validate().is_ok());
}

#[test]
fn test_account_update_requires_id() {
    let update = AccountUpdate {
        id: None,
        name: "Carol".to_string(),
    };
    let err = update.validate().unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingField(ref field)) if field == "id"
    ));
}

// ==================== Name truncation ====================

#[test]
fn test_short_names_are_kept() {
    assert_eq!(truncate_name("Alice"), "Alice");
}

#[test]
fn test_long_names_are_truncated() {
    let long = "a".repeat(ACCOUNT_NAME_MAX_LEN + 10);
    let stored = NewAccount::new(long, dec!(0)).stored_name();
    assert_eq!(stored.chars().count(), ACCOUNT_NAME_MAX_LEN);
}

#[test]
fn test_truncation_respects_multibyte_characters() {
    let long = "é".repeat(ACCOUNT_NAME_MAX_LEN + 1);
    let stored = truncate_name(&long);
    assert_eq!(stored.chars().count(), ACCOUNT_NAME_MAX_LEN);
    assert!(stored.chars().all(|c| c == 'é'));
}
