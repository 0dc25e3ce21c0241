//! Shared helper utilities for factory methods.

use entity::category::CategoryKind;
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{category::CategoryFactory, user::create_user};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a unique string identifier with the given prefix.
pub fn next_uuid(prefix: &str) -> String {
    format!("{}-{:012}", prefix, next_id())
}

/// Creates a user together with both "Sem Categoria" fallback categories.
///
/// Mirrors what registration produces so that tests covering category deletion or
/// reassignment start from a realistic state.
///
/// # Returns
/// - `Ok((user, income_fallback, expense_fallback))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_default_categories(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::category::Model,
    ),
    DbErr,
> {
    let user = create_user(db).await?;

    let income = CategoryFactory::new(db, &user.id)
        .name("Sem Categoria")
        .kind(CategoryKind::Income)
        .uncategorized(true)
        .build()
        .await?;
    let expense = CategoryFactory::new(db, &user.id)
        .name("Sem Categoria")
        .kind(CategoryKind::Expense)
        .uncategorized(true)
        .build()
        .await?;

    Ok((user, income, expense))
}
