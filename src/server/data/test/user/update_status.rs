use super::*;

/// Tests deactivating a user and promoting the role.
///
/// Expected: Ok(Some(User)) with the new flag and role
#[tokio::test]
async fn updates_active_flag_and_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_status(UpdateUserStatusParams {
            user_id: user.id.clone(),
            active: false,
            role: Role::Admin,
        })
        .await?
        .unwrap();

    assert!(!updated.active);
    assert_eq!(updated.role, Role::Admin);

    let stored = repo.find_by_id(&user.id).await?.unwrap();
    assert!(!stored.active);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_status(UpdateUserStatusParams {
            user_id: "missing".to_string(),
            active: true,
            role: Role::User,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
