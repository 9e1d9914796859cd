use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shop::Table)
                    .if_not_exists()
                    .col(pk_auto(Shop::Id))
                    .col(string(Shop::Name))
                    .col(string(Shop::Contact))
                    .col(string_len(Shop::ShopType, 16))
                    .col(string(Shop::Address))
                    .col(integer(Shop::OwnerId))
                    .col(string_len(Shop::OpeningTime, 5))
                    .col(string_len(Shop::ClosingTime, 5))
                    .col(integer(Shop::SlotDuration).default(30))
                    .col(
                        timestamp(Shop::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Shop::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_owner_id")
                            .from(Shop::Table, Shop::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shop::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shop {
    Table,
    Id,
    Name,
    Contact,
    ShopType,
    Address,
    OwnerId,
    OpeningTime,
    ClosingTime,
    SlotDuration,
    CreatedAt,
    UpdatedAt,
}
