use super::*;
use crate::util::session_store::{TOKEN_KEY, USER_KEY};
use crate::util::storage::{KeyValueStorage, MemoryStorage};

// =============================================================
// Helpers
// =============================================================

fn make_user(user_type: UserType) -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        user_type,
    }
}

fn make_context(storage: &MemoryStorage) -> SessionContext {
    SessionContext::new(SessionStore::new(storage.clone()))
}

fn seeded_storage(user_type: UserType) -> MemoryStorage {
    let storage = MemoryStorage::new();
    SessionStore::new(storage.clone())
        .write_session("tok", &make_user(user_type))
        .unwrap();
    storage
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_default_is_loading() {
    assert_eq!(SessionState::default(), SessionState::Loading);
}

#[test]
fn session_state_accessors() {
    let authed = SessionState::Authenticated(make_user(UserType::Seller));
    assert!(authed.is_authenticated());
    assert!(!authed.is_loading());
    assert_eq!(authed.user_type(), Some(UserType::Seller));

    assert!(SessionState::Loading.is_loading());
    assert!(!SessionState::Loading.is_authenticated());
    assert_eq!(SessionState::Loading.user(), None);

    assert!(!SessionState::Unauthenticated.is_authenticated());
    assert!(!SessionState::Unauthenticated.is_loading());
    assert_eq!(SessionState::Unauthenticated.user_type(), None);
}

#[test]
fn session_state_from_stored_session() {
    let user = make_user(UserType::Admin);
    assert_eq!(
        SessionState::from(StoredSession::Complete { token: "t".to_owned(), user: user.clone() }),
        SessionState::Authenticated(user)
    );
    assert_eq!(SessionState::from(StoredSession::Empty), SessionState::Unauthenticated);
    assert_eq!(SessionState::from(StoredSession::Partial), SessionState::Unauthenticated);
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn new_context_is_loading_until_hydrated() {
    let storage = seeded_storage(UserType::Buyer);
    let session = make_context(&storage);

    assert!(session.loading());
    assert!(!session.is_authenticated());
    assert_eq!(session.user(), None);

    session.hydrate();
    assert!(!session.loading());
    assert!(session.is_authenticated());
    assert_eq!(session.user(), Some(make_user(UserType::Buyer)));
}

#[test]
fn hydrate_with_empty_storage_is_unauthenticated() {
    let storage = MemoryStorage::new();
    let session = make_context(&storage);
    session.hydrate();
    assert_eq!(session.state(), SessionState::Unauthenticated);
}

#[test]
fn hydrate_with_corrupt_profile_is_unauthenticated_and_clears_storage() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok").unwrap();
    storage.set(USER_KEY, "{not json").unwrap();

    let session = make_context(&storage);
    session.hydrate();

    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert!(storage.is_empty());
}

#[test]
fn hydrate_runs_once() {
    let storage = MemoryStorage::new();
    let session = make_context(&storage);
    session.hydrate();

    // A session written behind the context's back is not picked up again.
    SessionStore::new(storage.clone())
        .write_session("tok", &make_user(UserType::Admin))
        .unwrap();
    session.hydrate();
    assert_eq!(session.state(), SessionState::Unauthenticated);
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_is_visible_immediately() {
    let storage = MemoryStorage::new();
    let session = make_context(&storage);
    session.hydrate();

    let user = make_user(UserType::Seller);
    session.login("tok-9", user.clone()).unwrap();

    assert!(session.is_authenticated());
    assert!(!session.loading());
    assert_eq!(session.user(), Some(user));
    assert_eq!(storage.get(TOKEN_KEY), Ok(Some("tok-9".to_owned())));
}

#[test]
fn login_is_visible_through_cloned_handles() {
    let storage = MemoryStorage::new();
    let session = make_context(&storage);
    let consumer = session.clone();
    session.hydrate();

    session.login("tok", make_user(UserType::Buyer)).unwrap();
    assert!(consumer.is_authenticated());

    consumer.logout();
    assert!(!session.is_authenticated());
}

#[test]
fn login_failure_leaves_unauthenticated_and_empty_storage() {
    let storage = MemoryStorage::new();
    storage.fail_writes_to(Some(TOKEN_KEY));
    let session = make_context(&storage);
    session.hydrate();

    assert!(session.login("tok", make_user(UserType::Buyer)).is_err());
    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert!(storage.is_empty());
}

#[test]
fn login_with_blank_token_stays_unauthenticated() {
    let storage = MemoryStorage::new();
    let session = make_context(&storage);
    session.hydrate();

    let err = session.login("  ", make_user(UserType::Buyer)).unwrap_err();
    assert!(matches!(err, SessionError::EmptyToken));
    assert!(!session.is_authenticated());
    assert_eq!(session.state(), SessionState::Unauthenticated);

    // In-memory state agrees with what a reload would find.
    let store = SessionStore::new(storage.clone());
    assert!(!store.derive_authenticated());
    assert_eq!(store.load(), StoredSession::Empty);
    assert!(storage.is_empty());
}

#[test]
fn logout_clears_storage_and_state() {
    let storage = seeded_storage(UserType::Admin);
    let session = make_context(&storage);
    session.hydrate();
    assert!(session.is_authenticated());

    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.user(), None);
    assert_eq!(storage.get(TOKEN_KEY), Ok(None));
    assert_eq!(storage.get(USER_KEY), Ok(None));
}

#[test]
fn logout_twice_is_harmless() {
    let storage = seeded_storage(UserType::Buyer);
    let session = make_context(&storage);
    session.hydrate();
    session.logout();
    session.logout();
    assert!(storage.is_empty());
    assert_eq!(session.state(), SessionState::Unauthenticated);
}
