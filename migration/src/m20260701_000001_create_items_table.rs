use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create items table
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Items::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Items::ItemName).string().not_null())
                    .col(ColumnDef::new(Items::Description).string().not_null().default(""))
                    .col(ColumnDef::new(Items::LocationFound).string().null())
                    .col(ColumnDef::new(Items::DateFound).date().null())
                    .col(ColumnDef::new(Items::Claimed).boolean().not_null().default(false))
                    .col(ColumnDef::new(Items::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Items::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Index for the unclaimed listing
        manager
            .create_index(
                Index::create()
                    .name("idx_items_claimed")
                    .table(Items::Table)
                    .col(Items::Claimed)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    ItemName,
    Description,
    LocationFound,
    DateFound,
    Claimed,
    CreatedAt,
    UpdatedAt,
}
