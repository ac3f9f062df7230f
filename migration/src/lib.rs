pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_tags_table;
mod m20240601_000002_create_reservations_table;
mod m20240601_000003_create_reservations_tags_table;
mod m20240615_000001_create_time_off_requests_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_tags_table::Migration),
            Box::new(m20240601_000002_create_reservations_table::Migration),
            Box::new(m20240601_000003_create_reservations_tags_table::Migration),
            Box::new(m20240615_000001_create_time_off_requests_table::Migration),
        ]
    }
}
