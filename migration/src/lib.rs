pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_shop_table;
mod m20250601_000003_create_appointment_table;
mod m20250601_000004_create_confirmed_slot_index;

pub use m20250601_000004_create_confirmed_slot_index::CONFIRMED_SLOT_INDEX_SQL;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_shop_table::Migration),
            Box::new(m20250601_000003_create_appointment_table::Migration),
            Box::new(m20250601_000004_create_confirmed_slot_index::Migration),
        ]
    }
}
