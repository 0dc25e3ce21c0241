use super::*;

/// Tests duplicate detection for budgets.
///
/// Expected: true for a stored (category, period) pair unless that budget is excluded
#[tokio::test]
async fn detects_existing_budget() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_expense_category(db, &user.id).await?;
    let budget = factory::monthly_budget::MonthlyBudgetFactory::new(db, &user.id, &category.id)
        .period("2024-05")
        .build()
        .await?;

    let repo = MonthlyBudgetRepository::new(db);

    assert!(
        repo.exists(&user.id, &category.id, period("2024-05"), None)
            .await?
    );
    assert!(
        !repo
            .exists(&user.id, &category.id, period("2024-05"), Some(&budget.id))
            .await?
    );
    assert!(
        !repo
            .exists(&user.id, &category.id, period("2024-06"), None)
            .await?
    );

    Ok(())
}
