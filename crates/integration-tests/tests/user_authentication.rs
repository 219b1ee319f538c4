//! Integration tests for credential authentication.
//!
//! Authentication failure is an ordinary outcome: the lookup returns
//! `Ok(None)`, never an error.

#![allow(clippy::unwrap_used)]

use jungle_integration_tests::john_doe;
use jungle_storefront::{AuthService, MemoryStore, User};

fn saved_subject(store: &mut MemoryStore) -> User {
    let mut user = User::new(john_doe());
    user.save_strict(store).unwrap();
    user
}

#[test]
fn test_logs_in_with_correct_credentials() {
    let mut store = MemoryStore::new();
    let subject = saved_subject(&mut store);

    let user = AuthService::new(&store)
        .authenticate_with_credentials("johndoe@email.com", "password")
        .unwrap();
    assert_eq!(user, Some(subject));
}

#[test]
fn test_rejects_unknown_email() {
    let mut store = MemoryStore::new();
    saved_subject(&mut store);

    let user = AuthService::new(&store)
        .authenticate_with_credentials("idk@email.com", "password")
        .unwrap();
    assert_eq!(user, None);
}

#[test]
fn test_rejects_wrong_password() {
    let mut store = MemoryStore::new();
    saved_subject(&mut store);

    let user = AuthService::new(&store)
        .authenticate_with_credentials("johndoe@email.com", "1234")
        .unwrap();
    assert_eq!(user, None);
}

#[test]
fn test_password_is_case_sensitive() {
    let mut store = MemoryStore::new();
    saved_subject(&mut store);

    let user = AuthService::new(&store)
        .authenticate_with_credentials("johndoe@email.com", "PASSWORD")
        .unwrap();
    assert_eq!(user, None);
}

#[test]
fn test_logs_in_with_surrounding_spaces() {
    let mut store = MemoryStore::new();
    let subject = saved_subject(&mut store);

    let user = AuthService::new(&store)
        .authenticate_with_credentials("   johndoe@email.com   ", "password")
        .unwrap();
    assert_eq!(user, Some(subject));
}

#[test]
fn test_email_is_not_case_sensitive() {
    let mut store = MemoryStore::new();
    let subject = saved_subject(&mut store);

    let user = AuthService::new(&store)
        .authenticate_with_credentials("JohnDOE@email.com", "password")
        .unwrap();
    assert_eq!(user, Some(subject));
}

#[test]
fn test_internal_whitespace_is_not_ignored() {
    let mut store = MemoryStore::new();
    saved_subject(&mut store);

    let user = AuthService::new(&store)
        .authenticate_with_credentials("john doe@email.com", "password")
        .unwrap();
    assert_eq!(user, None);
}

#[test]
fn test_returns_persisted_state() {
    let mut store = MemoryStore::new();
    let subject = saved_subject(&mut store);

    let user = AuthService::new(&store)
        .authenticate_with_credentials("johndoe@email.com", "password")
        .unwrap()
        .unwrap();

    assert_eq!(user.id(), subject.id());
    assert_eq!(user.full_name(), "John Doe");
    assert!(user.password.is_none());
    assert_eq!(user.password_digest(), subject.password_digest());
}
