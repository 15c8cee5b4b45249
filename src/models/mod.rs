//! Database models shared across the catalog repository.

pub mod config;
pub mod game;
pub mod platform;
pub mod tag;
