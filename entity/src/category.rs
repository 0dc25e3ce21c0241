use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub kind: CategoryKind,
    /// Marks the per-user fallback category that cannot be renamed or removed.
    pub uncategorized: bool,
}

/// Whether a category groups incomes or expenses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CategoryKind {
    #[sea_orm(string_value = "RECEITAS")]
    Income,
    #[sea_orm(string_value = "DESPESAS")]
    Expense,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::income::Entity")]
    Income,
    #[sea_orm(has_many = "super::expense::Entity")]
    Expense,
    #[sea_orm(has_many = "super::monthly_budget::Entity")]
    MonthlyBudget,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::income::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Income.def()
    }
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expense.def()
    }
}

impl Related<super::monthly_budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthlyBudget.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
