use super::*;

/// Tests creating an income entry.
///
/// Verifies that the stored entry is returned with the resolved category name
/// and the payer mapped to the counterparty.
///
/// Expected: Ok(LedgerEntry)
#[tokio::test]
async fn creates_income_with_category_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db, &user.id)
        .name("Salário")
        .kind(entity::category::CategoryKind::Income)
        .build()
        .await?;

    let repo = IncomeRepository::new(db);
    let entry = repo
        .create(SaveLedgerEntryParams {
            user_id: user.id.clone(),
            category_id: category.id.clone(),
            date: date(2024, 1, 5),
            amount: Decimal::new(5000_00, 2),
            counterparty: "Empresa".to_string(),
            notes: "Salário de janeiro".to_string(),
        })
        .await?;

    assert_eq!(entry.category_name, "Salário");
    assert_eq!(entry.counterparty, "Empresa");
    assert_eq!(entry.amount, Decimal::new(5000_00, 2));
    assert_eq!(entry.date, date(2024, 1, 5));

    let found = repo.find_by_id(&entry.id).await?;
    assert_eq!(found, Some(entry));

    Ok(())
}

/// Tests that amounts with 15 integer digits and 4 decimals survive storage.
///
/// Expected: the entry read back carries the exact amount written
#[tokio::test]
async fn stores_amount_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_income_category(db, &user.id).await?;
    let amount: Decimal = "12345678901234.5678".parse().unwrap();

    let repo = IncomeRepository::new(db);
    let entry = repo
        .create(SaveLedgerEntryParams {
            user_id: user.id.clone(),
            category_id: category.id.clone(),
            date: date(2024, 1, 5),
            amount,
            counterparty: "Empresa".to_string(),
            notes: "Bônus".to_string(),
        })
        .await?;

    assert_eq!(entry.amount.to_string(), "12345678901234.5678");

    let listed = repo.find_by_user(&user.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].amount, amount);

    Ok(())
}
