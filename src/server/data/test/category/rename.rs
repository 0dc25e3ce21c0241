use super::*;

/// Tests renaming a category.
///
/// Expected: Ok(Some(Category)) with the new name
#[tokio::test]
async fn renames_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::create_expense_category(db, &user.id).await?;

    let repo = CategoryRepository::new(db);
    let renamed = repo
        .rename(&category.id, "Restaurantes".to_string())
        .await?
        .unwrap();

    assert_eq!(renamed.name, "Restaurantes");
    assert_eq!(renamed.kind, CategoryKind::Expense);

    Ok(())
}

/// Tests renaming a category that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo.rename("missing", "Nome".to_string()).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests renaming onto a name already used by a category of the same kind.
///
/// Expected: Err(AppError::CategoryErr(AlreadyExists)) and the name unchanged
#[tokio::test]
async fn fails_when_name_is_taken() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::category::CategoryFactory::new(db, &user.id)
        .name("Restaurantes")
        .build()
        .await?;
    let category = factory::category::CategoryFactory::new(db, &user.id)
        .name("Padaria")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let result = repo.rename(&category.id, "Restaurantes".to_string()).await;

    assert!(matches!(
        result,
        Err(AppError::CategoryErr(CategoryError::AlreadyExists(name))) if name == "Restaurantes"
    ));
    let unchanged = repo.find_by_id(&category.id).await?.unwrap();
    assert_eq!(unchanged.name, "Padaria");

    Ok(())
}
