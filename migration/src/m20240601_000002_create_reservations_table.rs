use sea_orm_migration::{prelude::*, schema::*};

const INDEX_NAME: &str = "reservations_date_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(uuid(Reservations::Id).primary_key())
                    .col(double(Reservations::SchemaVersion).default(1.2))
                    .col(text(Reservations::Date))
                    .col(text(Reservations::Time))
                    .col(integer(Reservations::Seats).check(Expr::col(Reservations::Seats).gte(1)))
                    .col(text(Reservations::PhoneNumber))
                    .col(text(Reservations::Name))
                    .col(text_null(Reservations::Notes))
                    .col(text_null(Reservations::Status))
                    .col(boolean(Reservations::Deleted).default(false))
                    .col(boolean_null(Reservations::AllowSms))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Reservations::Table)
                    .col(Reservations::Date)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Reservations {
    Table,
    Id,
    SchemaVersion,
    Date,
    Time,
    Seats,
    PhoneNumber,
    Name,
    Notes,
    Status,
    Deleted,
    AllowSms,
}
