use super::*;

/// Tests creating a category.
///
/// Expected: Ok(Category) with a generated id and the given kind
#[tokio::test]
async fn creates_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            user_id: user.id.clone(),
            name: "Mercado".to_string(),
            kind: CategoryKind::Expense,
            uncategorized: false,
        })
        .await?;

    assert!(!category.id.is_empty());
    assert_eq!(category.user_id, user.id);
    assert_eq!(category.kind, CategoryKind::Expense);
    assert!(!category.uncategorized);

    Ok(())
}

/// Tests the same name under both kinds.
///
/// Verifies that names only need to be unique within one kind.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_name_for_different_kinds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = CategoryRepository::new(db);
    repo.create(CreateCategoryParams::uncategorized(&user.id, CategoryKind::Income))
        .await?;
    let result = repo
        .create(CreateCategoryParams::uncategorized(&user.id, CategoryKind::Expense))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests inserting the same name and kind twice for one user.
///
/// Verifies that the unique index violation is reported as the domain error.
///
/// Expected: Err(AppError::CategoryErr(AlreadyExists))
#[tokio::test]
async fn fails_on_duplicate_name_and_kind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let params = CreateCategoryParams {
        user_id: user.id.clone(),
        name: "Viagem".to_string(),
        kind: CategoryKind::Expense,
        uncategorized: false,
    };

    let repo = CategoryRepository::new(db);
    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(matches!(
        result,
        Err(AppError::CategoryErr(CategoryError::AlreadyExists(name))) if name == "Viagem"
    ));

    Ok(())
}
