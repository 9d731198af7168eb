//! Client/server boundary: account DTOs and the auth API client.

pub mod api;
pub mod types;
