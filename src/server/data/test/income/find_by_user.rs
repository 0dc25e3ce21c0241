use super::*;

/// Tests listing a user's incomes.
///
/// Verifies that only the owner's entries are returned, ordered by date.
///
/// Expected: Ok(Vec<LedgerEntry>) in chronological order
#[tokio::test]
async fn returns_owner_entries_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let category = factory::create_income_category(db, &user.id).await?;
    let other_category = factory::create_income_category(db, &other.id).await?;

    factory::income::IncomeFactory::new(db, &user.id, &category.id)
        .date(date(2024, 3, 1))
        .build()
        .await?;
    factory::income::IncomeFactory::new(db, &user.id, &category.id)
        .date(date(2024, 1, 1))
        .build()
        .await?;
    factory::create_income(db, &other.id, &other_category.id).await?;

    let repo = IncomeRepository::new(db);
    let entries = repo.find_by_user(&user.id).await?;

    let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 3, 1)]);
    assert!(entries.iter().all(|e| e.user_id == user.id));

    Ok(())
}

/// Tests the inclusive date range filter.
///
/// Expected: entries dated on both bounds are included, others excluded
#[tokio::test]
async fn filters_by_inclusive_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_income_category(db, &user.id).await?;

    for day in [date(2024, 1, 31), date(2024, 2, 1), date(2024, 2, 29), date(2024, 3, 1)] {
        factory::income::IncomeFactory::new(db, &user.id, &category.id)
            .date(day)
            .build()
            .await?;
    }

    let repo = IncomeRepository::new(db);
    let entries = repo
        .find_by_user_between(&user.id, date(2024, 2, 1), date(2024, 2, 29))
        .await?;

    let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2024, 2, 1), date(2024, 2, 29)]);

    Ok(())
}
