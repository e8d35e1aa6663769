//! Domain layer: entities and persistence contracts.

pub mod entities;
pub mod repositories;
