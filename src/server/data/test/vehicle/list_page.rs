use super::*;

/// Tests paging over 25 vehicles.
///
/// Expected: page 1 holds vehicles 1-10, page 3 holds 21-25, page 4 is empty
#[tokio::test]
async fn pages_twenty_five_vehicles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::vehicle::create_vehicles(db, 25).await?;
    let ids: Vec<i32> = created.iter().map(|v| v.id).collect();

    let repo = VehicleRepository::new(db);
    let page_ids = |page: Vec<Vehicle>| -> Vec<i32> { page.iter().map(|v| v.id).collect() };

    let first = repo
        .list_page(Page::new(Some(1)), VehicleFilter::default())
        .await?;
    assert_eq!(page_ids(first), ids[0..10]);

    let third = repo
        .list_page(Page::new(Some(3)), VehicleFilter::default())
        .await?;
    assert_eq!(page_ids(third), ids[20..25]);

    let fourth = repo
        .list_page(Page::new(Some(4)), VehicleFilter::default())
        .await?;
    assert!(fourth.is_empty());

    Ok(())
}

/// Tests no page and page 0 both return the first page.
///
/// Expected: Ok with the same 10 vehicles
#[tokio::test]
async fn defaults_to_first_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::vehicle::create_vehicles(db, 15).await?;

    let repo = VehicleRepository::new(db);
    let first = repo
        .list_page(Page::new(Some(1)), VehicleFilter::default())
        .await?;

    assert_eq!(first.len(), 10);
    assert_eq!(
        repo.list_page(Page::new(None), VehicleFilter::default())
            .await?,
        first
    );
    assert_eq!(
        repo.list_page(Page::new(Some(0)), VehicleFilter::default())
            .await?,
        first
    );

    Ok(())
}

/// Tests a name filter is a substring match.
///
/// Expected: Ok with only Corolla for "Cor"
#[tokio::test]
async fn filters_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::vehicle::VehicleFactory::new(db)
        .name("Corolla")
        .brand("Toyota")
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db)
        .name("Civic")
        .brand("Honda")
        .build()
        .await?;

    let page = VehicleRepository::new(db)
        .list_page(
            Page::default(),
            VehicleFilter::new(Some("Cor".to_string()), None),
        )
        .await?;

    assert_eq!(names(&page), vec!["Corolla"]);

    Ok(())
}

/// Tests name and brand filters are combined.
///
/// Expected: Ok with only vehicles matching both filters
#[tokio::test]
async fn combines_name_and_brand_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, brand) in [
        ("Corolla", "Toyota"),
        ("Corsa", "Chevrolet"),
        ("Hilux", "Toyota"),
    ] {
        factory::vehicle::VehicleFactory::new(db)
            .name(name)
            .brand(brand)
            .build()
            .await?;
    }

    let repo = VehicleRepository::new(db);

    let page = repo
        .list_page(
            Page::default(),
            VehicleFilter::new(Some("Cor".to_string()), Some("Toy".to_string())),
        )
        .await?;
    assert_eq!(names(&page), vec!["Corolla"]);

    let page = repo
        .list_page(
            Page::default(),
            VehicleFilter::new(None, Some("Toyota".to_string())),
        )
        .await?;
    assert_eq!(names(&page), vec!["Corolla", "Hilux"]);

    Ok(())
}

/// Tests filtering is applied before pagination.
///
/// Expected: Ok with the 12 matches split 10 / 2
#[tokio::test]
async fn filters_before_paging() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..24 {
        let brand = if i % 2 == 0 { "Fiat" } else { "Ford" };
        factory::vehicle::VehicleFactory::new(db)
            .brand(brand)
            .build()
            .await?;
    }

    let repo = VehicleRepository::new(db);
    let filter = || VehicleFilter::new(None, Some("Fiat".to_string()));

    let first = repo.list_page(Page::new(Some(1)), filter()).await?;
    let second = repo.list_page(Page::new(Some(2)), filter()).await?;

    assert_eq!(first.len(), 10);
    assert_eq!(second.len(), 2);
    assert!(first.iter().chain(&second).all(|v| v.brand == "Fiat"));

    Ok(())
}

/// Tests `%`, `_` and `\` in filters match themselves, not any characters.
///
/// Expected: Ok with only vehicles containing the literal characters
#[tokio::test]
async fn treats_like_metacharacters_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, brand) in [
        ("Corolla", "Toyota"),
        ("Civic", "Honda"),
        ("100% Eletrico", "BYD"),
        ("Model_3", "Tesla"),
        ("Back\\slash", "Acme"),
    ] {
        factory::vehicle::VehicleFactory::new(db)
            .name(name)
            .brand(brand)
            .build()
            .await?;
    }

    let repo = VehicleRepository::new(db);
    let by_name = |name: &str| VehicleFilter::new(Some(name.to_string()), None);

    let page = repo.list_page(Page::default(), by_name("%")).await?;
    assert_eq!(names(&page), vec!["100% Eletrico"]);

    let page = repo.list_page(Page::default(), by_name("_")).await?;
    assert_eq!(names(&page), vec!["Model_3"]);

    let page = repo.list_page(Page::default(), by_name("\\")).await?;
    assert_eq!(names(&page), vec!["Back\\slash"]);

    let page = repo
        .list_page(
            Page::default(),
            VehicleFilter::new(None, Some("T%a".to_string())),
        )
        .await?;
    assert!(page.is_empty());

    Ok(())
}

/// Tests a page far past the end, up to the largest representable one.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_huge_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::vehicle::create_vehicles(db, 3).await?;

    let page = VehicleRepository::new(db)
        .list_page(Page::new(Some(i64::MAX)), VehicleFilter::default())
        .await?;

    assert!(page.is_empty());

    Ok(())
}
