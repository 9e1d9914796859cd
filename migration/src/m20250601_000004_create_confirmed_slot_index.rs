use sea_orm_migration::{prelude::*, sea_orm::ConnectionTrait};

/// Partial unique index allowing at most one confirmed appointment per
/// shop, date and time slot.
///
/// Written as raw SQL because the index builder has no portable form for the
/// `WHERE` clause. Both SQLite and Postgres accept this statement.
pub const CONFIRMED_SLOT_INDEX_SQL: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
    idx_appointment_confirmed_slot ON appointment (shop_id, date, time_slot) \
    WHERE status = 'confirmed'";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(CONFIRMED_SLOT_INDEX_SQL)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_appointment_confirmed_slot")
            .await?;

        Ok(())
    }
}
