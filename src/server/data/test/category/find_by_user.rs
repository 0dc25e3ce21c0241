use super::*;

/// Tests listing a user's categories by kind.
///
/// Verifies that only categories of the requested kind and owner are returned,
/// ordered by name.
///
/// Expected: Ok(Vec<Category>) with the user's expense categories
#[tokio::test]
async fn filters_by_owner_and_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::category::CategoryFactory::new(db, &user.id)
        .name("Transporte")
        .build()
        .await?;
    factory::category::CategoryFactory::new(db, &user.id)
        .name("Mercado")
        .build()
        .await?;
    factory::create_income_category(db, &user.id).await?;
    factory::create_expense_category(db, &other.id).await?;

    let repo = CategoryRepository::new(db);

    let expenses = repo
        .find_by_user_and_kind(&user.id, CategoryKind::Expense)
        .await?;
    let names: Vec<_> = expenses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Mercado", "Transporte"]);

    let all = repo.find_by_user(&user.id).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests looking up the fallback category.
///
/// Expected: Ok(Some(Category)) flagged as uncategorized
#[tokio::test]
async fn finds_uncategorized_fallback() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, income_fallback, _) = factory::create_user_with_default_categories(db).await?;

    let repo = CategoryRepository::new(db);
    let found = repo
        .find_uncategorized(&user.id, CategoryKind::Income)
        .await?
        .unwrap();

    assert_eq!(found.id, income_fallback.id);
    assert!(found.uncategorized);

    Ok(())
}
