use super::*;

/// Tests creating a monthly budget.
///
/// Expected: Ok(MonthlyBudget) with category name and parsed period
#[tokio::test]
async fn creates_budget() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db, &user.id)
        .name("Lazer")
        .build()
        .await?;

    let repo = MonthlyBudgetRepository::new(db);
    let budget = repo
        .create(SaveMonthlyBudgetParams {
            user_id: user.id.clone(),
            category_id: category.id.clone(),
            limit_amount: Decimal::new(300, 0),
            period: period("2024-04"),
        })
        .await?;

    assert_eq!(budget.category_name, "Lazer");
    assert_eq!(budget.period, period("2024-04"));
    assert_eq!(budget.limit_amount, Decimal::new(300, 0));

    Ok(())
}

/// Tests inserting a second budget for the same category and month.
///
/// Verifies that the unique index violation is reported as the domain error,
/// naming the category.
///
/// Expected: Err(AppError::BudgetErr(AlreadyExists))
#[tokio::test]
async fn fails_on_duplicate_category_and_period() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db, &user.id)
        .name("Lazer")
        .build()
        .await?;
    let params = SaveMonthlyBudgetParams {
        user_id: user.id.clone(),
        category_id: category.id.clone(),
        limit_amount: Decimal::new(300, 0),
        period: period("2024-04"),
    };

    let repo = MonthlyBudgetRepository::new(db);
    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(matches!(
        result,
        Err(AppError::BudgetErr(BudgetError::AlreadyExists { category, period: p }))
            if category == "Lazer" && p == period("2024-04")
    ));

    Ok(())
}
