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
                    .table(MonthlyBudget::Table)
                    .if_not_exists()
                    .col(string(MonthlyBudget::Id).primary_key())
                    .col(string(MonthlyBudget::UserId))
                    .col(string(MonthlyBudget::CategoryId))
                    .col(string(MonthlyBudget::LimitAmount))
                    .col(string_len(MonthlyBudget::Period, 7))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monthly_budget_user_id")
                            .from(MonthlyBudget::Table, MonthlyBudget::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monthly_budget_category_id")
                            .from(MonthlyBudget::Table, MonthlyBudget::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One budget per category and month for each user
        manager
            .create_index(
                Index::create()
                    .name("idx_monthly_budget_user_category_period")
                    .table(MonthlyBudget::Table)
                    .col(MonthlyBudget::UserId)
                    .col(MonthlyBudget::CategoryId)
                    .col(MonthlyBudget::Period)
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
                    .name("idx_monthly_budget_user_category_period")
                    .table(MonthlyBudget::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MonthlyBudget::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MonthlyBudget {
    Table,
    Id,
    UserId,
    CategoryId,
    LimitAmount,
    Period,
}
