use super::*;

/// Tests replacing a budget's limit and period.
///
/// Expected: Ok(Some(MonthlyBudget)) with the new values
#[tokio::test]
async fn replaces_limit_and_period() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_expense_category(db, &user.id).await?;
    let budget = factory::create_monthly_budget(db, &user.id, &category.id).await?;

    let repo = MonthlyBudgetRepository::new(db);
    let updated = repo
        .update(
            &budget.id,
            SaveMonthlyBudgetParams {
                user_id: user.id.clone(),
                category_id: category.id.clone(),
                limit_amount: Decimal::new(1234_5678, 4),
                period: period("2024-03"),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.limit_amount, Decimal::new(1234_5678, 4));
    assert_eq!(updated.period, period("2024-03"));

    Ok(())
}

/// Tests moving a budget onto a month its category is already budgeted for.
///
/// Expected: Err(AppError::BudgetErr(AlreadyExists))
#[tokio::test]
async fn fails_when_period_is_taken() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db, &user.id)
        .name("Mercado")
        .build()
        .await?;
    factory::monthly_budget::MonthlyBudgetFactory::new(db, &user.id, &category.id)
        .period("2024-05")
        .build()
        .await?;
    let budget = factory::monthly_budget::MonthlyBudgetFactory::new(db, &user.id, &category.id)
        .period("2024-06")
        .build()
        .await?;

    let repo = MonthlyBudgetRepository::new(db);
    let result = repo
        .update(
            &budget.id,
            SaveMonthlyBudgetParams {
                user_id: user.id.clone(),
                category_id: category.id.clone(),
                limit_amount: Decimal::new(100, 0),
                period: period("2024-05"),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BudgetErr(BudgetError::AlreadyExists { category, .. })) if category == "Mercado"
    ));

    Ok(())
}
