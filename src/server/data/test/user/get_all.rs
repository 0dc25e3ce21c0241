use super::*;

/// Tests listing all users.
///
/// Verifies that users are returned ordered alphabetically by username.
///
/// Expected: Ok(Vec<User>) sorted by username
#[tokio::test]
async fn returns_users_ordered_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["carla", "ana", "bruno"] {
        factory::user::UserFactory::new(db)
            .username(name)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["ana", "bruno", "carla"]);

    Ok(())
}
