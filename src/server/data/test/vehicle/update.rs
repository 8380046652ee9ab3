use super::*;

/// Tests every field is overwritten.
///
/// Expected: Ok with the stored vehicle matching the new values
#[tokio::test]
async fn overwrites_every_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::vehicle::create_vehicle(db).await?;
    let repo = VehicleRepository::new(db);

    let replacement = Vehicle {
        id: model.id,
        name: "Uno".to_string(),
        brand: "Fiat".to_string(),
        year: 1995,
    };
    let updated = repo.update(replacement.clone()).await?;

    assert_eq!(updated, replacement);
    assert_eq!(repo.find_by_id(model.id).await?, Some(replacement));

    Ok(())
}

/// Tests updating an id that doesn't exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VehicleRepository::new(db)
        .update(Vehicle {
            id: 99,
            name: "Uno".to_string(),
            brand: "Fiat".to_string(),
            year: 1995,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
