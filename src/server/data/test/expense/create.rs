use super::*;

/// Tests creating an expense entry.
///
/// Verifies that the payee is stored as the destination and read back as the
/// counterparty.
///
/// Expected: Ok(LedgerEntry)
#[tokio::test]
async fn creates_expense_with_destination() -> Result<(), DbErr> {
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

    let repo = ExpenseRepository::new(db);
    let entry = repo
        .create(SaveLedgerEntryParams {
            user_id: user.id.clone(),
            category_id: category.id.clone(),
            date: NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
            amount: Decimal::new(189_90, 2),
            counterparty: "Supermercado".to_string(),
            notes: "Compras do mês".to_string(),
        })
        .await?;

    let stored = entity::expense::Entity::find_by_id(entry.id.clone())
        .one(db)
        .await?
        .unwrap();

    assert_eq!(stored.destination, "Supermercado");
    assert_eq!(stored.amount, "189.90");
    assert_eq!(entry.counterparty, "Supermercado");
    assert_eq!(entry.category_name, "Mercado");

    Ok(())
}
