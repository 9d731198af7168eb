use super::*;
use crate::net::types::UserProfile;
use crate::util::routes;
use crate::util::session_store::SessionStore;
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

// =============================================================
// shows_children
// =============================================================

#[test]
fn only_render_shows_children() {
    assert!(shows_children(GuardDecision::Render));
    assert!(!shows_children(GuardDecision::Wait));
    assert!(!shows_children(GuardDecision::Redirect(routes::LOGIN)));
}

// =============================================================
// Decision memos over a live session
// =============================================================

#[test]
fn private_guard_waits_until_hydrated_then_redirects_to_login() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = MemoryStorage::new();
        storage.set("token", "tok").unwrap();
        let session = make_context(&storage);
        let decision = private_decision(session.clone(), UserType::Buyer);

        assert_eq!(decision.get_untracked(), GuardDecision::Wait);
        assert!(!shows_children(decision.get_untracked()));

        // Token without profile: partial storage resolves to signed out.
        session.hydrate();
        assert_eq!(decision.get_untracked(), GuardDecision::Redirect(routes::LOGIN));
        assert!(!shows_children(decision.get_untracked()));
    });
}

#[test]
fn private_guard_follows_login_and_logout() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = MemoryStorage::new();
        let session = make_context(&storage);
        let decision = private_decision(session.clone(), UserType::Seller);
        session.hydrate();

        session.login("tok", make_user(UserType::Seller)).unwrap();
        assert_eq!(decision.get_untracked(), GuardDecision::Render);
        assert!(shows_children(decision.get_untracked()));

        session.logout();
        assert_eq!(decision.get_untracked(), GuardDecision::Redirect(routes::LOGIN));
    });
}

#[test]
fn private_guard_sends_other_role_to_own_dashboard() {
    let owner = Owner::new();
    owner.with(|| {
        let session = make_context(&MemoryStorage::new());
        let decision = private_decision(session.clone(), UserType::Admin);
        session.hydrate();

        session.login("tok", make_user(UserType::Buyer)).unwrap();
        assert_eq!(decision.get_untracked(), GuardDecision::Redirect(routes::BUYER_DASHBOARD));
    });
}

#[test]
fn public_guard_waits_then_renders_for_anonymous_visitor() {
    let owner = Owner::new();
    owner.with(|| {
        let session = make_context(&MemoryStorage::new());
        let decision = public_decision(session.clone());

        assert_eq!(decision.get_untracked(), GuardDecision::Wait);
        session.hydrate();
        assert_eq!(decision.get_untracked(), GuardDecision::Render);

        session.login("tok", make_user(UserType::Seller)).unwrap();
        assert_eq!(decision.get_untracked(), GuardDecision::Redirect(routes::SELLER_DASHBOARD));
    });
}
