use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, ForeignKey, ForeignKeyAction, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::uuid,
};

use crate::{
    m20240601_000001_create_tags_table::Tags,
    m20240601_000002_create_reservations_table::Reservations,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservationsTags::Table)
                    .if_not_exists()
                    .col(uuid(ReservationsTags::ReservationId))
                    .col(uuid(ReservationsTags::TagId))
                    .primary_key(
                        Index::create()
                            .name("pk-reservations_tags")
                            .col(ReservationsTags::ReservationId)
                            .col(ReservationsTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations_tags-reservation_id")
                            .from(ReservationsTags::Table, ReservationsTags::ReservationId)
                            .to(Reservations::Table, Reservations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-reservations_tags-tag_id")
                            .from(ReservationsTags::Table, ReservationsTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationsTags::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ReservationsTags {
    Table,
    ReservationId,
    TagId,
}
