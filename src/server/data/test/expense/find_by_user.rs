use super::*;

/// Tests listing a user's expenses.
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
    let category = factory::create_expense_category(db, &user.id).await?;
    let other_category = factory::create_expense_category(db, &other.id).await?;

    factory::expense::ExpenseFactory::new(db, &user.id, &category.id)
        .date(date(2024, 5, 20))
        .build()
        .await?;
    factory::expense::ExpenseFactory::new(db, &user.id, &category.id)
        .date(date(2024, 2, 10))
        .build()
        .await?;
    factory::create_expense(db, &other.id, &other_category.id).await?;

    let repo = ExpenseRepository::new(db);
    let entries = repo.find_by_user(&user.id).await?;

    let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2024, 2, 10), date(2024, 5, 20)]);
    assert!(entries.iter().all(|e| e.user_id == user.id));

    Ok(())
}

/// Tests ordering of expenses sharing a date.
///
/// Expected: same-day entries come back in insertion order, in both listings
#[tokio::test]
async fn keeps_insertion_order_within_a_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_expense_category(db, &user.id).await?;

    for destination in ["Padaria", "Farmácia", "Açougue", "Banca"] {
        factory::expense::ExpenseFactory::new(db, &user.id, &category.id)
            .date(date(2024, 4, 12))
            .destination(destination)
            .build()
            .await?;
    }

    let repo = ExpenseRepository::new(db);
    let expected = vec!["Padaria", "Farmácia", "Açougue", "Banca"];

    let all = repo.find_by_user(&user.id).await?;
    let names: Vec<_> = all.iter().map(|e| e.counterparty.as_str()).collect();
    assert_eq!(names, expected);

    let month = repo
        .find_by_user_between(&user.id, date(2024, 4, 1), date(2024, 4, 30))
        .await?;
    let names: Vec<_> = month.iter().map(|e| e.counterparty.as_str()).collect();
    assert_eq!(names, expected);

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
    let category = factory::create_expense_category(db, &user.id).await?;

    for day in [date(2023, 12, 31), date(2024, 1, 1), date(2024, 1, 31), date(2024, 2, 1)] {
        factory::expense::ExpenseFactory::new(db, &user.id, &category.id)
            .date(day)
            .build()
            .await?;
    }

    let repo = ExpenseRepository::new(db);
    let entries = repo
        .find_by_user_between(&user.id, date(2024, 1, 1), date(2024, 1, 31))
        .await?;

    let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 1, 31)]);

    Ok(())
}
