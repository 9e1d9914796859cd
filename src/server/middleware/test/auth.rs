use super::*;

/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_request_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted or unknown user.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_session_for_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    AuthSession::new(session).set_user_id(999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Expected: Ok with the logged-in user when no permission is required
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let current = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(current.id, user.id);

    Ok(())
}

/// Tests role permissions.
///
/// Expected: Err(AuthError::AccessDenied) for a plain user, Ok for matching roles
#[tokio::test]
async fn checks_role_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;
    let shopkeeper = factory::create_shopkeeper(db).await?;
    let admin = factory::create_admin(db).await?;
    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(user.id).await?;
    for permission in [Permission::Admin, Permission::Shopkeeper] {
        let result = guard.require(&[permission]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
        ));
    }

    auth_session.set_user_id(shopkeeper.id).await?;
    assert!(guard.require(&[Permission::Shopkeeper]).await.is_ok());

    auth_session.set_user_id(admin.id).await?;
    assert!(guard.require(&[Permission::Admin]).await.is_ok());

    Ok(())
}

/// Tests shop ownership checks.
///
/// Expected: owner and admin allowed, other shopkeeper denied, unknown shop NotFound
#[tokio::test]
async fn checks_shop_ownership() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Shop)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (owner, shop) = factory::helpers::create_shop_with_owner(db).await?;
    let other = factory::create_shopkeeper(db).await?;
    let admin = factory::create_admin(db).await?;
    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);
    let manage = [Permission::Shopkeeper, Permission::ManageShop(shop.id)];

    auth_session.set_user_id(owner.id).await?;
    assert!(guard.require(&manage).await.is_ok());

    auth_session.set_user_id(other.id).await?;
    assert!(matches!(
        guard.require(&manage).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    auth_session.set_user_id(admin.id).await?;
    assert!(guard.require(&[Permission::ManageShop(shop.id)]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::ManageShop(shop.id + 100)]).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
