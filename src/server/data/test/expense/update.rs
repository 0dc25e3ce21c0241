use super::*;

/// Tests replacing an expense entry.
///
/// Expected: Ok(Some(LedgerEntry)) with every field replaced
#[tokio::test]
async fn replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_expense_category(db, &user.id).await?;
    let other_category = factory::category::CategoryFactory::new(db, &user.id)
        .name("Transporte")
        .build()
        .await?;
    let expense = factory::create_expense(db, &user.id, &category.id).await?;

    let repo = ExpenseRepository::new(db);
    let updated = repo
        .update(
            &expense.id,
            SaveLedgerEntryParams {
                user_id: user.id.clone(),
                category_id: other_category.id.clone(),
                date: date(2024, 7, 1),
                amount: Decimal::new(42_35, 2),
                counterparty: "Posto".to_string(),
                notes: "Gasolina".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, expense.id);
    assert_eq!(updated.category_name, "Transporte");
    assert_eq!(updated.date, date(2024, 7, 1));
    assert_eq!(updated.amount, Decimal::new(42_35, 2));
    assert_eq!(updated.counterparty, "Posto");
    assert_eq!(updated.notes, "Gasolina");

    Ok(())
}

/// Tests updating an expense that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_expense_category(db, &user.id).await?;

    let repo = ExpenseRepository::new(db);
    let result = repo
        .update(
            "missing-id",
            SaveLedgerEntryParams {
                user_id: user.id.clone(),
                category_id: category.id.clone(),
                date: date(2024, 7, 1),
                amount: Decimal::new(10, 0),
                counterparty: "Posto".to_string(),
                notes: "Gasolina".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests deleting an expense entry twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_expense_category(db, &user.id).await?;
    let expense = factory::create_expense(db, &user.id, &category.id).await?;

    let repo = ExpenseRepository::new(db);

    assert!(repo.delete(&expense.id).await?);
    assert!(!repo.delete(&expense.id).await?);
    assert!(repo.find_by_id(&expense.id).await?.is_none());

    Ok(())
}
