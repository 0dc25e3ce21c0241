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
                    .table(Expense::Table)
                    .if_not_exists()
                    .col(string(Expense::Id).primary_key())
                    .col(string(Expense::UserId))
                    .col(string(Expense::CategoryId))
                    .col(date(Expense::Date))
                    .col(string(Expense::Amount))
                    .col(string(Expense::Destination))
                    .col(string(Expense::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expense_user_id")
                            .from(Expense::Table, Expense::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expense_category_id")
                            .from(Expense::Table, Expense::CategoryId)
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
                    .name("idx_expense_user_date")
                    .table(Expense::Table)
                    .col(Expense::UserId)
                    .col(Expense::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_expense_user_date")
                    .table(Expense::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Expense::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Expense {
    Table,
    Id,
    UserId,
    CategoryId,
    Date,
    Amount,
    Destination,
    Notes,
}
