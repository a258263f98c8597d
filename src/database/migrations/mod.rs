pub use sea_orm_migration::prelude::*;

mod m20260715_000001_create_network_tables;
mod m20260715_000002_create_inflow_tables;
mod m20260716_000003_create_control_and_settings_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_create_network_tables::Migration),
            Box::new(m20260715_000002_create_inflow_tables::Migration),
            Box::new(m20260716_000003_create_control_and_settings_tables::Migration),
        ]
    }
}
