pub mod account;
pub mod auth;
pub mod catalog;
pub mod error;
pub mod extract;
pub mod media;
pub mod payloads;
pub mod server;
pub mod tools;
