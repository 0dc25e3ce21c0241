use super::*;

/// Tests an authenticated user without extra permissions.
///
/// Verifies that a valid bearer token for an active user passes the guard.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn grants_access_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);

    let user = factory::create_user(db).await?;
    let headers = bearer(&token_for(&state, user.clone()));

    let result = AuthGuard::new(&state, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_access_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a non-Bearer authorization scheme.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_access_with_basic_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a tampered token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_access_with_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);
    let headers = bearer("eyJhbGciOiJIUzUxMiJ9.e30.assinatura");

    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a token whose user was removed.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);

    let token = state
        .tokens
        .issue(&User {
            id: "ghost".to_string(),
            username: "ghost".to_string(),
            email: "ghost@example.com".to_string(),
            password_hash: String::new(),
            role: crate::server::model::user::Role::User,
            active: true,
            created_at: chrono::Utc::now(),
        })
        .unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == "ghost"
    ));

    Ok(())
}

/// Tests a token of a user deactivated after login.
///
/// Expected: Err(AuthError::InactiveUser)
#[tokio::test]
async fn denies_access_to_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let headers = bearer(&token_for(&state, user));

    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InactiveUser(_)))
    ));

    Ok(())
}

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with the ADMIN role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);

    let admin = factory::user::create_admin(db).await?;
    let headers = bearer(&token_for(&state, admin));

    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(result.is_admin());

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = state(db);

    let user = factory::create_user(db).await?;
    let headers = bearer(&token_for(&state, user));

    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
