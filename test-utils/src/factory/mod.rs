//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! into the database, so the referenced tables must exist in the test context.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let category = factory::create_expense_category(&db, &user.id).await?;
//!     let expense = factory::create_expense(&db, &user.id, &category.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let expense = factory::expense::ExpenseFactory::new(&db, &user.id, &category.id)
//!     .amount(Decimal::new(12_550, 2))
//!     .date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create income or expense categories
//! - `income` - Create income entries
//! - `expense` - Create expense entries
//! - `monthly_budget` - Create monthly budgets
//! - `helpers` - ID generation and multi-entity setups

pub mod category;
pub mod expense;
pub mod helpers;
pub mod income;
pub mod monthly_budget;
pub mod user;

pub use category::{create_expense_category, create_income_category};
pub use expense::create_expense;
pub use helpers::create_user_with_default_categories;
pub use income::create_income;
pub use monthly_budget::create_monthly_budget;
pub use user::create_user;
