pub mod control_service;
pub mod legacy_migration;

pub use control_service::*;
pub use legacy_migration::*;
