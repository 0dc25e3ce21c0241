use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Income::Table)
                    .if_not_exists()
                    .col(string(Income::Id).primary_key())
                    .col(string(Income::UserId))
                    .col(string(Income::CategoryId))
                    .col(date(Income::Date))
                    .col(string(Income::Amount))
                    .col(string(Income::Source))
                    .col(string(Income::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_income_user_id")
                            .from(Income::Table, Income::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_income_category_id")
                            .from(Income::Table, Income::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_income_user_date")
                    .table(Income::Table)
                    .col(Income::UserId)
                    .col(Income::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_income_user_date")
                    .table(Income::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Income::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Income {
    Table,
    Id,
    UserId,
    CategoryId,
    Date,
    Amount,
    Source,
    Notes,
}
