use super::*;

/// Tests moving entries to the fallback before deleting a category.
///
/// Verifies that incomes and expenses of the deleted category now point at the
/// fallback, and that budgets on the deleted category are removed.
///
/// Expected: Ok(true), entries reassigned, budget gone
#[tokio::test]
async fn reassigns_entries_and_removes_budgets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, expense_fallback) = factory::create_user_with_default_categories(db).await?;
    let category = factory::create_expense_category(db, &user.id).await?;
    let first = factory::create_expense(db, &user.id, &category.id).await?;
    let second = factory::create_expense(db, &user.id, &category.id).await?;
    let budget = factory::create_monthly_budget(db, &user.id, &category.id).await?;

    let repo = CategoryRepository::new(db);
    let moved = repo.reassign_entries(&category.id, &expense_fallback.id).await?;
    let deleted = repo.delete(&category.id).await?;

    assert_eq!(moved, 2);
    assert!(deleted);

    for id in [first.id, second.id] {
        let expense = entity::prelude::Expense::find_by_id(id).one(db).await?.unwrap();
        assert_eq!(expense.category_id, expense_fallback.id);
    }
    assert!(entity::prelude::MonthlyBudget::find_by_id(budget.id)
        .one(db)
        .await?
        .is_none());
    assert!(repo.find_by_id(&category.id).await?.is_none());

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(!repo.delete("missing").await?);

    Ok(())
}
