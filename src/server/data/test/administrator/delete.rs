use super::*;

/// Tests deleting an existing administrator.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn deletes_administrator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Administrator)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::administrator::create_administrator(db).await?;

    let repo = AdministratorRepository::new(db);
    repo.delete(model.id).await?;

    assert!(repo.find_by_id(model.id).await?.is_none());

    Ok(())
}

/// Tests deleting an id that doesn't exist is a no-op.
///
/// Expected: Ok with the record count unchanged
#[tokio::test]
async fn ignores_missing_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Administrator)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::administrator::create_administrator(db).await?;
    factory::administrator::create_administrator(db).await?;

    AdministratorRepository::new(db).delete(999).await?;

    assert_eq!(entity::prelude::Administrator::find().count(db).await?, 2);

    Ok(())
}
