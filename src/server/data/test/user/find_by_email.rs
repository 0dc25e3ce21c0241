use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some(User)) for the stored address, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("joao@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("joao@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let missing = repo.find_by_email("ninguem@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the email and username existence checks.
///
/// Expected: true only for values already stored
#[tokio::test]
async fn reports_existing_email_and_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("joao")
        .email("joao@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists("joao@example.com").await?);
    assert!(!repo.email_exists("maria@example.com").await?);
    assert!(repo.username_exists("joao").await?);
    assert!(!repo.username_exists("maria").await?);

    Ok(())
}
