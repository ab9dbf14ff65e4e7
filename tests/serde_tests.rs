//! Serialization tests for `Result` and `DomainFailure`.
//!
//! Run with `--features serde`.

use resulting::result::{DomainFailure, Result};
use rstest::rstest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Wallet {
    owner: String,
    balance: i64,
}

#[rstest]
fn success_serializes_externally_tagged() {
    let json = serde_json::to_string(&Result::success(42)).unwrap();
    assert_eq!(json, r#"{"Success":42}"#);
}

#[rstest]
fn failure_serializes_externally_tagged() {
    let json = serde_json::to_string(&Result::<i32>::failure("it broke")).unwrap();
    assert_eq!(json, r#"{"Failure":"it broke"}"#);
}

#[rstest]
#[case(Result::success(Wallet { owner: "alice".to_string(), balance: 10 }))]
#[case(Result::failure("wallet not found"))]
fn wallet_result_roundtrip(#[case] original: Result<Wallet>) {
    let json = serde_json::to_string(&original).unwrap();
    let restored: Result<Wallet> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn unknown_variant_is_rejected() {
    let parsed = serde_json::from_str::<Result<i32>>(r#"{"Pending":1}"#);
    assert!(parsed.is_err());
}

#[rstest]
fn domain_failure_serializes_its_message() {
    let json = serde_json::to_string(&DomainFailure::new("overdrawn")).unwrap();
    assert_eq!(json, r#"{"message":"overdrawn"}"#);

    let restored: DomainFailure = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.message(), "overdrawn");
}
