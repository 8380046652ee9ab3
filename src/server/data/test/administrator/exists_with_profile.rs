use super::*;

/// Tests profile detection with only EDITOR administrators stored.
///
/// Expected: Ok(true) for EDITOR, Ok(false) for ADM
#[tokio::test]
async fn distinguishes_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Administrator)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::administrator::AdministratorFactory::new(db)
        .profile("EDITOR")
        .build()
        .await?;

    let repo = AdministratorRepository::new(db);

    assert!(repo.exists_with_profile(Profile::Editor).await?);
    assert!(!repo.exists_with_profile(Profile::Adm).await?);

    Ok(())
}

/// Tests an empty table has no administrators of any profile.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Administrator)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(
        !AdministratorRepository::new(db)
            .exists_with_profile(Profile::Adm)
            .await?
    );

    Ok(())
}
