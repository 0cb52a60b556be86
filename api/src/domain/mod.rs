//! Domain layer
//!
//! Employee and benefit models plus the repository ports the application
//! layer depends on. Nothing here knows about HTTP or SeaORM.
//! - `entities`: Domain models
//! - `ports`: Trait definitions for persistence

pub mod entities;
pub mod ports;
