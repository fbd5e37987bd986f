//! HTTP surface: the public resolver and the passkey-protected management API.
//!
//! Handlers stay thin. They decode a DTO, call one service operation and map
//! the result back to JSON or a redirect; every rule lives in
//! [`crate::application`].

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
