use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(string(Category::Id).primary_key())
                    .col(string(Category::UserId))
                    .col(string(Category::Name))
                    .col(string_len(Category::Kind, 16))
                    .col(boolean(Category::Uncategorized).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_user_id")
                            .from(Category::Table, Category::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A user can't hold two categories with the same name and kind
        manager
            .create_index(
                Index::create()
                    .name("idx_category_user_name_kind")
                    .table(Category::Table)
                    .col(Category::UserId)
                    .col(Category::Name)
                    .col(Category::Kind)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_category_user_name_kind")
                    .table(Category::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    UserId,
    Name,
    Kind,
    Uncategorized,
}
