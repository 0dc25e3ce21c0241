use super::*;

/// Tests replacing an income entry.
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
    let category = factory::create_income_category(db, &user.id).await?;
    let other_category = factory::category::CategoryFactory::new(db, &user.id)
        .name("Freelance")
        .kind(entity::category::CategoryKind::Income)
        .build()
        .await?;
    let income = factory::create_income(db, &user.id, &category.id).await?;

    let repo = IncomeRepository::new(db);
    let updated = repo
        .update(
            &income.id,
            SaveLedgerEntryParams {
                user_id: user.id.clone(),
                category_id: other_category.id.clone(),
                date: date(2024, 6, 10),
                amount: Decimal::new(750, 0),
                counterparty: "Cliente".to_string(),
                notes: "Projeto".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, income.id);
    assert_eq!(updated.category_name, "Freelance");
    assert_eq!(updated.amount, Decimal::new(750, 0));
    assert_eq!(updated.counterparty, "Cliente");

    Ok(())
}

/// Tests deleting an income entry twice.
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
    let category = factory::create_income_category(db, &user.id).await?;
    let income = factory::create_income(db, &user.id, &category.id).await?;

    let repo = IncomeRepository::new(db);

    assert!(repo.delete(&income.id).await?);
    assert!(!repo.delete(&income.id).await?);
    assert!(repo.find_by_id(&income.id).await?.is_none());

    Ok(())
}
