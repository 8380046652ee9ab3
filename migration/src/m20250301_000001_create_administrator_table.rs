use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Administrator::Table)
                    .if_not_exists()
                    .col(pk_auto(Administrator::Id))
                    .col(string(Administrator::Email))
                    .col(string(Administrator::Password))
                    .col(string(Administrator::Profile))
                    .to_owned(),
            )
            .await?;

        // Login looks administrators up by email
        manager
            .create_index(
                Index::create()
                    .name("idx_administrator_email")
                    .table(Administrator::Table)
                    .col(Administrator::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Administrator::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Administrator {
    Table,
    Id,
    Email,
    Password,
    Profile,
}
