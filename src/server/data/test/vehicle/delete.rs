use super::*;

/// Tests deleting an existing vehicle.
///
/// Expected: Ok with only that vehicle removed
#[tokio::test]
async fn deletes_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicles = factory::vehicle::create_vehicles(db, 2).await?;

    let repo = VehicleRepository::new(db);
    repo.delete(vehicles[0].id).await?;

    assert!(repo.find_by_id(vehicles[0].id).await?.is_none());
    assert!(repo.find_by_id(vehicles[1].id).await?.is_some());

    Ok(())
}

/// Tests deleting an id that doesn't exist is a no-op.
///
/// Expected: Ok with the record count unchanged
#[tokio::test]
async fn ignores_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::vehicle::create_vehicles(db, 3).await?;

    VehicleRepository::new(db).delete(12345).await?;

    assert_eq!(entity::prelude::Vehicle::find().count(db).await?, 3);

    Ok(())
}
