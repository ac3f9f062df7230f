use sea_orm_migration::{prelude::*, schema::*};

const INDEX_NAME: &str = "time_off_requests_name_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeOffRequests::Table)
                    .if_not_exists()
                    .col(uuid(TimeOffRequests::Id).primary_key())
                    .col(double(TimeOffRequests::SchemaVersion).default(1.0))
                    .col(text(TimeOffRequests::StartDate))
                    .col(text(TimeOffRequests::EndDate))
                    .col(text(TimeOffRequests::Name))
                    .col(text_null(TimeOffRequests::Details))
                    .col(text(TimeOffRequests::Status).default("pending"))
                    .col(boolean(TimeOffRequests::Deleted).default(false))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(TimeOffRequests::Table)
                    .col(TimeOffRequests::Name)
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
            .drop_table(Table::drop().table(TimeOffRequests::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TimeOffRequests {
    Table,
    Id,
    SchemaVersion,
    StartDate,
    EndDate,
    Name,
    Details,
    Status,
    Deleted,
}
