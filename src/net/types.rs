//! Account DTOs shared by storage, session state, and the auth API client.
//!
//! DESIGN
//! ======
//! `UserProfile` is the schema check for persisted and received profiles:
//! deserialization rejects anything outside the closed `userType` set, so a
//! profile that parses is always safe to route on.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role. Closed set; decides which area of the app is reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Buyer,
    Seller,
    Admin,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Buyer, UserType::Seller, UserType::Admin];

    /// Wire/storage spelling of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Buyer => "buyer",
            UserType::Seller => "seller",
            UserType::Admin => "admin",
        }
    }

    /// Human-readable label for menus and forms.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UserType::Buyer => "Buyer",
            UserType::Seller => "Seller",
            UserType::Admin => "Admin",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role string outside `{buyer, seller, admin}`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized user type: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for UserType {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "buyer" => Ok(UserType::Buyer),
            "seller" => Ok(UserType::Seller),
            "admin" => Ok(UserType::Admin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Signed-in user as persisted under the `user` storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend user identifier. Accepted as a JSON string or integer.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    pub user_type: UserType,
}

/// User record as returned by the auth API, before the role is checked.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: String,
}

impl TryFrom<WireUser> for UserProfile {
    type Error = UnknownRole;

    fn try_from(wire: WireUser) -> Result<Self, Self::Error> {
        let user_type = wire.user_type.parse()?;
        Ok(UserProfile { id: wire.id, name: wire.name, email: wire.email, user_type })
    }
}

/// Successful login/register response: the `(token, user)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: WireUser,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Ok(s),
        serde_json::Value::Number(n) if n.is_u64() || n.is_i64() => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected non-empty string or integer id, got {other}"))),
    }
}
