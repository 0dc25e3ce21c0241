use super::*;

/// Tests listing budgets by period.
///
/// Verifies that only the user's budgets of the requested month are returned.
///
/// Expected: Ok(Vec<MonthlyBudget>) with one entry
#[tokio::test]
async fn filters_by_period() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let category = factory::create_expense_category(db, &user.id).await?;
    let other_category = factory::create_expense_category(db, &other.id).await?;

    for value in ["2024-01", "2024-02"] {
        factory::monthly_budget::MonthlyBudgetFactory::new(db, &user.id, &category.id)
            .period(value)
            .build()
            .await?;
    }
    factory::monthly_budget::MonthlyBudgetFactory::new(db, &other.id, &other_category.id)
        .period("2024-02")
        .build()
        .await?;

    let repo = MonthlyBudgetRepository::new(db);

    let february = repo
        .find_by_user_and_period(&user.id, period("2024-02"))
        .await?;
    assert_eq!(february.len(), 1);
    assert_eq!(february[0].user_id, user.id);

    let all = repo.find_by_user(&user.id).await?;
    let periods: Vec<_> = all.iter().map(|b| b.period.to_string()).collect();
    assert_eq!(periods, vec!["2024-01", "2024-02"]);

    Ok(())
}
