use super::*;

/// Tests every field is overwritten.
///
/// Expected: Ok with the stored row matching the new values
#[tokio::test]
async fn overwrites_every_field() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Administrator)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdministratorRepository::new(db);
    let created = repo
        .create(new_administrator("old@teste.com", Profile::Editor))
        .await?;

    let updated = repo
        .update(Administrator {
            id: created.id,
            email: "new@teste.com".to_string(),
            password_hash: "$argon2id$other".to_string(),
            profile: Profile::Adm,
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(repo.find_by_id(created.id).await?, Some(updated.clone()));
    assert_eq!(updated.email, "new@teste.com");
    assert_eq!(updated.password_hash, "$argon2id$other");
    assert_eq!(updated.profile, Profile::Adm);

    Ok(())
}

/// Tests updating an id that doesn't exist.
///
/// Expected: Err(AppError::DbErr(DbErr::RecordNotFound))
#[tokio::test]
async fn fails_for_missing_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Administrator)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AdministratorRepository::new(db)
        .update(Administrator {
            id: 42,
            email: "ghost@teste.com".to_string(),
            password_hash: String::new(),
            profile: Profile::Adm,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(DbErr::RecordNotFound(_)))
    ));

    Ok(())
}
