use super::*;

/// Tests duplicate detection with and without an excluded id.
///
/// Verifies that a category does not collide with itself when renaming.
///
/// Expected: true for other categories, false when the match is excluded
#[tokio::test]
async fn detects_duplicates_excluding_self() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db, &user.id)
        .name("Lazer")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);

    assert!(
        repo.exists_with_name(&user.id, "Lazer", CategoryKind::Expense, None)
            .await?
    );
    assert!(
        !repo
            .exists_with_name(&user.id, "Lazer", CategoryKind::Expense, Some(&category.id))
            .await?
    );
    assert!(
        !repo
            .exists_with_name(&user.id, "Lazer", CategoryKind::Income, None)
            .await?
    );

    Ok(())
}
