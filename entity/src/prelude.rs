pub use super::category::Entity as Category;
pub use super::expense::Entity as Expense;
pub use super::income::Entity as Income;
pub use super::monthly_budget::Entity as MonthlyBudget;
pub use super::user::Entity as User;
