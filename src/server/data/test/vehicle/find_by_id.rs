use super::*;

/// Tests finding an existing vehicle.
///
/// Expected: Ok(Some(Vehicle))
#[tokio::test]
async fn finds_existing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::vehicle::VehicleFactory::new(db)
        .name("Onix")
        .brand("Chevrolet")
        .year(2022)
        .build()
        .await?;

    let found = VehicleRepository::new(db).find_by_id(model.id).await?;

    assert_eq!(
        found,
        Some(Vehicle {
            id: model.id,
            name: "Onix".to_string(),
            brand: "Chevrolet".to_string(),
            year: 2022,
        })
    );

    Ok(())
}

/// Tests finding an id that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(VehicleRepository::new(db).find_by_id(7).await?.is_none());

    Ok(())
}
