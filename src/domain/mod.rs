//! Domain aggregates exposed by the catalog service layer.

pub mod game;
pub mod platform;
pub mod tag;
pub mod types;
