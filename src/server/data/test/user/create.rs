use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the account as active with the
/// requested role and returns it as a domain model.
///
/// Expected: Ok(User) with active = true
#[tokio::test]
async fn creates_active_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(create_param("u-1", "maria", "maria@example.com", Role::User))
        .await?;

    assert_eq!(user.id, "u-1");
    assert_eq!(user.username, "maria");
    assert_eq!(user.role, Role::User);
    assert!(user.active);

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Verifies that inserting a second account with the same email fails with the
/// domain error even without a prior existence check.
///
/// Expected: Err(AppError::UserErr(EmailAlreadyExists))
#[tokio::test]
async fn fails_on_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("u-1", "maria", "maria@example.com", Role::User))
        .await?;

    let result = repo
        .create(create_param("u-2", "outra", "maria@example.com", Role::User))
        .await;

    assert!(matches!(
        result,
        Err(AppError::UserErr(UserError::EmailAlreadyExists(email))) if email == "maria@example.com"
    ));

    Ok(())
}

/// Tests the unique constraint on username.
///
/// Expected: Err(AppError::UserErr(UsernameAlreadyExists))
#[tokio::test]
async fn fails_on_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("u-1", "maria", "maria@example.com", Role::User))
        .await?;

    let result = repo
        .create(create_param("u-2", "maria", "outra@example.com", Role::User))
        .await;

    assert!(matches!(
        result,
        Err(AppError::UserErr(UserError::UsernameAlreadyExists(username))) if username == "maria"
    ));

    Ok(())
}
